//! Student data provider Trait

use crate::error::CoreResult;
use crate::types::{GradeLevel, StudentRecord};

/// Supplies the student collection. The core only reads it.
pub trait StudentProvider: Send + Sync {
    /// All records, in presentation order
    fn students(&self) -> &[StudentRecord];
}

/// Fixed, in-memory record set
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentProvider {
    records: Vec<StudentRecord>,
}

impl InMemoryStudentProvider {
    #[must_use]
    pub fn new(records: Vec<StudentRecord>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of records
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let records: Vec<StudentRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    /// The five sample students shown by the reference dashboard
    #[must_use]
    pub fn sample() -> Self {
        Self::new(vec![
            StudentRecord::new(
                "S-10234",
                "Jane A. Doe",
                GradeLevel::Grade10,
                "2024-2025",
                "Sarah Doe (s.doe@example.com)",
            ),
            StudentRecord::new(
                "S-10235",
                "John B. Smith",
                GradeLevel::Grade9,
                "2024-2025",
                "David Smith (d.smith@example.com)",
            ),
            StudentRecord::new(
                "S-10236",
                "Michael C. Johnson",
                GradeLevel::Grade11,
                "2023-2024",
                "Mary Johnson (m.johnson@example.com)",
            ),
            StudentRecord::new(
                "S-10237",
                "Emily D. Brown",
                GradeLevel::Grade10,
                "2024-2025",
                "James Brown (j.brown@example.com)",
            ),
            StudentRecord::new(
                "S-10238",
                "David Lee",
                GradeLevel::Grade9,
                "2023-2024",
                "Anna Lee (a.lee@example.com)",
            ),
        ])
    }
}

impl StudentProvider for InMemoryStudentProvider {
    fn students(&self) -> &[StudentRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ids_are_unique() {
        let provider = InMemoryStudentProvider::sample();
        let mut ids: Vec<&str> = provider.students().iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(InMemoryStudentProvider::from_json("{not json").is_err());
        let provider = InMemoryStudentProvider::from_json("[]").unwrap();
        assert!(provider.students().is_empty());
    }
}
