//! Student list filtering and rendering

use std::sync::Arc;

use crate::config::StudentListConfig;
use crate::traits::{ProfileViewer, StudentProvider, ViewSurface};
use crate::types::{FilterCriteria, RowAction, StudentRecord, TableBody, TableRow, ViewCommand};

/// Shown before any filter was applied
pub const PLACEHOLDER_MESSAGE: &str = "Please apply filters or search to display student data.";

/// Shown when a filter matched nothing
pub const NO_RESULTS_MESSAGE: &str = "No students found matching your criteria.";

/// What the student table currently presents
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterPresentation {
    /// No filter applied yet
    #[default]
    Placeholder,
    /// A filter was applied and matched nothing
    NoMatches,
    /// Ids of the matching records, in input order
    Matches(Vec<String>),
}

/// Filters the provider's records and renders them into the student table
pub struct FilterEngine {
    table: String,
    view_profile_label: String,
    presentation: FilterPresentation,
    students: Arc<dyn StudentProvider>,
    profile_viewer: Arc<dyn ProfileViewer>,
    view: Arc<dyn ViewSurface>,
}

impl FilterEngine {
    /// Records matching `criteria`, as a stable subsequence of `records`
    ///
    /// Text matches id or name case-insensitively; an empty text matches all.
    /// Grade and year must be equal when set.
    pub fn filter<'a>(records: &'a [StudentRecord], criteria: &FilterCriteria) -> Vec<&'a StudentRecord> {
        let needle = criteria.normalized_search();
        records
            .iter()
            .filter(|record| {
                let text_match = needle.is_empty()
                    || record.id.to_lowercase().contains(&needle)
                    || record.name.to_lowercase().contains(&needle);
                let grade_match = criteria
                    .grade_level
                    .map_or(true, |grade| grade == record.grade_level);
                let year_match = criteria
                    .academic_year
                    .as_deref()
                    .map_or(true, |year| year == record.academic_year);
                text_match && grade_match && year_match
            })
            .collect()
    }

    /// Bind to the student table; `None` when the page has none
    pub fn attach(
        config: &StudentListConfig,
        students: Arc<dyn StudentProvider>,
        profile_viewer: Arc<dyn ProfileViewer>,
        view: Arc<dyn ViewSurface>,
    ) -> Option<Self> {
        if !view.contains(&config.table) {
            log::debug!("Student table '{}' missing, filtering disabled", config.table);
            return None;
        }

        Some(Self {
            table: config.table.clone(),
            view_profile_label: config.view_profile_label.clone(),
            presentation: FilterPresentation::Placeholder,
            students,
            profile_viewer,
            view,
        })
    }

    pub fn presentation(&self) -> &FilterPresentation {
        &self.presentation
    }

    /// Filter and render. Returns the number of matches.
    pub fn apply(&mut self, criteria: &FilterCriteria) -> usize {
        let matches = Self::filter(self.students.students(), criteria);
        log::debug!("Filter {criteria:?} matched {} record(s)", matches.len());

        let body = if matches.is_empty() {
            self.presentation = FilterPresentation::NoMatches;
            TableBody::Message(NO_RESULTS_MESSAGE.to_string())
        } else {
            self.presentation =
                FilterPresentation::Matches(matches.iter().map(|r| r.id.clone()).collect());
            TableBody::Rows(matches.iter().map(|r| self.row(r)).collect())
        };

        let count = matches.len();
        self.view.apply(ViewCommand::table(&self.table, body));
        count
    }

    /// Back to the "nothing filtered yet" placeholder
    pub fn clear(&mut self) {
        self.presentation = FilterPresentation::Placeholder;
        self.view.apply(ViewCommand::table(
            &self.table,
            TableBody::Message(PLACEHOLDER_MESSAGE.to_string()),
        ));
    }

    /// Hand a row's student id to the profile viewer
    ///
    /// Returns `false` for ids not in the record set.
    pub fn view_profile(&self, student_id: &str) -> bool {
        if !self.students.students().iter().any(|r| r.id == student_id) {
            log::warn!("View profile requested for unknown student '{student_id}'");
            return false;
        }
        self.profile_viewer.open_profile(student_id);
        true
    }

    fn row(&self, record: &StudentRecord) -> TableRow {
        TableRow {
            cells: vec![
                record.id.clone(),
                record.name.clone(),
                record.grade_level.label().to_string(),
                record.academic_year.clone(),
                record.guardian_contact.clone(),
            ],
            action: Some(RowAction {
                label: self.view_profile_label.clone(),
                value: record.id.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FakeProfileViewer, FakeView};
    use crate::traits::InMemoryStudentProvider;
    use crate::types::GradeLevel;

    fn ids(records: &[&StudentRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    fn engine() -> (FilterEngine, Arc<FakeView>, Arc<FakeProfileViewer>) {
        let view = Arc::new(FakeView::with_elements(&["student-table"]));
        let viewer = Arc::new(FakeProfileViewer::default());
        let engine = FilterEngine::attach(
            &StudentListConfig::default(),
            Arc::new(InMemoryStudentProvider::sample()),
            viewer.clone(),
            view.clone(),
        )
        .unwrap();
        (engine, view, viewer)
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let provider = InMemoryStudentProvider::sample();
        let result = FilterEngine::filter(provider.students(), &FilterCriteria::search("jane"));
        assert_eq!(ids(&result), vec!["S-10234"]);
    }

    #[test]
    fn search_matches_id_fragment() {
        let provider = InMemoryStudentProvider::sample();
        let result = FilterEngine::filter(provider.students(), &FilterCriteria::search("s-1023"));
        assert_eq!(result.len(), 5);
        let result = FilterEngine::filter(provider.students(), &FilterCriteria::search("10237"));
        assert_eq!(ids(&result), vec!["S-10237"]);
    }

    #[test]
    fn grade_filter_keeps_input_order() {
        let provider = InMemoryStudentProvider::sample();
        let result =
            FilterEngine::filter(provider.students(), &FilterCriteria::grade(GradeLevel::Grade9));
        assert_eq!(ids(&result), vec!["S-10235", "S-10238"]);
    }

    #[test]
    fn criteria_combine_with_and() {
        let provider = InMemoryStudentProvider::sample();
        let criteria = FilterCriteria::grade(GradeLevel::Grade10).with_year("2024-2025");
        let result = FilterEngine::filter(provider.students(), &criteria);
        assert_eq!(ids(&result), vec!["S-10234", "S-10237"]);

        let criteria = FilterCriteria::grade(GradeLevel::Grade11).with_year("2024-2025");
        assert!(FilterEngine::filter(provider.students(), &criteria).is_empty());
    }

    #[test]
    fn empty_criteria_match_everything() {
        let provider = InMemoryStudentProvider::sample();
        let result = FilterEngine::filter(provider.students(), &FilterCriteria::default());
        assert_eq!(result.len(), provider.students().len());
    }

    #[test]
    fn no_matches_differs_from_placeholder() {
        let (mut engine, view, _) = engine();
        engine.clear();
        assert_eq!(engine.presentation(), &FilterPresentation::Placeholder);
        assert_eq!(
            view.table("student-table"),
            Some(TableBody::Message(PLACEHOLDER_MESSAGE.to_string()))
        );

        assert_eq!(engine.apply(&FilterCriteria::search("zzz")), 0);
        assert_eq!(engine.presentation(), &FilterPresentation::NoMatches);
        assert_eq!(
            view.table("student-table"),
            Some(TableBody::Message(NO_RESULTS_MESSAGE.to_string()))
        );
    }

    #[test]
    fn rows_carry_a_view_profile_action() {
        let (mut engine, view, _) = engine();
        engine.apply(&FilterCriteria::search("emily"));

        let Some(TableBody::Rows(rows)) = view.table("student-table") else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].cells,
            vec![
                "S-10237",
                "Emily D. Brown",
                "Grade 10",
                "2024-2025",
                "James Brown (j.brown@example.com)"
            ]
        );
        assert_eq!(
            rows[0].action,
            Some(RowAction {
                label: "View Profile".to_string(),
                value: "S-10237".to_string(),
            })
        );
    }

    #[test]
    fn view_profile_reaches_the_viewer() {
        let (engine, _, viewer) = engine();
        assert!(engine.view_profile("S-10236"));
        assert!(!engine.view_profile("S-99999"));
        assert_eq!(viewer.opened(), vec!["S-10236".to_string()]);
    }

    #[test]
    fn records_are_never_reordered() {
        let provider = InMemoryStudentProvider::sample();
        let before = provider.students().to_vec();
        let _ = FilterEngine::filter(provider.students(), &FilterCriteria::search("d"));
        assert_eq!(provider.students(), before.as_slice());
    }

    #[test]
    fn detached_without_table() {
        let view = Arc::new(FakeView::new());
        assert!(FilterEngine::attach(
            &StudentListConfig::default(),
            Arc::new(InMemoryStudentProvider::sample()),
            Arc::new(FakeProfileViewer::default()),
            view,
        )
        .is_none());
    }
}
