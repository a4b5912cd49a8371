//! Student record and filter criteria

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Grade level of a student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GradeLevel {
    #[serde(rename = "grade-9")]
    Grade9,
    #[serde(rename = "grade-10")]
    Grade10,
    #[serde(rename = "grade-11")]
    Grade11,
    #[serde(rename = "grade-12")]
    Grade12,
}

impl GradeLevel {
    /// All grades in ascending order
    #[must_use]
    pub fn all() -> &'static [GradeLevel] {
        &[
            GradeLevel::Grade9,
            GradeLevel::Grade10,
            GradeLevel::Grade11,
            GradeLevel::Grade12,
        ]
    }

    /// Form value (`grade-9`)
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Grade9 => "grade-9",
            Self::Grade10 => "grade-10",
            Self::Grade11 => "grade-11",
            Self::Grade12 => "grade-12",
        }
    }

    /// Display text (`Grade 9`)
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Grade9 => "Grade 9",
            Self::Grade10 => "Grade 10",
            Self::Grade11 => "Grade 11",
            Self::Grade12 => "Grade 12",
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GradeLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|grade| grade.code() == s.trim())
            .ok_or_else(|| CoreError::InvalidConfig(format!("Unknown grade level: '{s}'")))
    }
}

/// Student row supplied by the data provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    #[serde(alias = "grade")]
    pub grade_level: GradeLevel,
    #[serde(alias = "year")]
    pub academic_year: String,
    #[serde(alias = "contact")]
    pub guardian_contact: String,
}

impl StudentRecord {
    #[must_use]
    pub fn new(
        id: &str,
        name: &str,
        grade_level: GradeLevel,
        academic_year: &str,
        guardian_contact: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            grade_level,
            academic_year: academic_year.to_string(),
            guardian_contact: guardian_contact.to_string(),
        }
    }
}

/// Criteria of one filter action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub search_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<GradeLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub academic_year: Option<String>,
}

impl FilterCriteria {
    #[must_use]
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn grade(grade_level: GradeLevel) -> Self {
        Self {
            grade_level: Some(grade_level),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        let year = year.into();
        // an empty select value means "any year"
        self.academic_year = if year.trim().is_empty() { None } else { Some(year) };
        self
    }

    /// Search text normalised for matching
    #[must_use]
    pub fn normalized_search(&self) -> String {
        self.search_text.trim().to_lowercase()
    }
}
