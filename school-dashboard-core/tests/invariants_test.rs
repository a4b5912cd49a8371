//! Property-based checks of the state machine invariants

use proptest::prelude::*;
use school_dashboard_core::services::FilterEngine;
use school_dashboard_core::test_utils::{
    fill_admission_form, started_dashboard, FULL_WIDTH, PHONE_WIDTH,
};
use school_dashboard_core::traits::InMemoryStudentProvider;
use school_dashboard_core::types::{FilterCriteria, FormField, GradeLevel};
use school_dashboard_core::{DashboardEvent, StudentProvider};

const SUBMENUS: [&str; 2] = ["student-submenu", "fees-submenu"];

fn menu_click_strategy() -> impl Strategy<Value = DashboardEvent> {
    prop_oneof![
        Just(DashboardEvent::MenuEntryClicked("student-menu".to_string())),
        Just(DashboardEvent::MenuEntryClicked("fees-menu".to_string())),
        Just(DashboardEvent::MenuEntryClicked("nav-dashboard".to_string())),
        Just(DashboardEvent::SubmenuLinkClicked("summary".to_string())),
        Just(DashboardEvent::SubmenuLinkClicked("feescate".to_string())),
        Just(DashboardEvent::MenuToggleClicked),
        Just(DashboardEvent::OverlayClicked),
    ]
}

fn module_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("admission".to_string()),
        Just("student-list".to_string()),
        Just("summary".to_string()),
        Just("oldstudentrec".to_string()),
        Just("dashboard".to_string()),
        "[a-z-]{1,12}",
    ]
}

#[derive(Debug, Clone, Copy)]
enum WizardAction {
    Next,
    Prev,
    FillAll,
    ClearFirst,
    ClosePopup,
}

fn wizard_action_strategy() -> impl Strategy<Value = WizardAction> {
    prop_oneof![
        3 => Just(WizardAction::Next),
        2 => Just(WizardAction::Prev),
        1 => Just(WizardAction::FillAll),
        1 => Just(WizardAction::ClearFirst),
        1 => Just(WizardAction::ClosePopup),
    ]
}

fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    (
        "[a-zA-Z0-9 .-]{0,4}",
        proptest::option::of(0usize..4),
        proptest::option::of(prop_oneof![
            Just("2023-2024".to_string()),
            Just("2024-2025".to_string()),
            Just("1999-2000".to_string()),
        ]),
    )
        .prop_map(|(search_text, grade, year)| FilterCriteria {
            search_text,
            grade_level: grade.map(|i| GradeLevel::all()[i]),
            academic_year: year,
        })
}

proptest! {
    #[test]
    fn at_most_one_submenu_is_open(
        width in prop_oneof![Just(FULL_WIDTH), Just(PHONE_WIDTH)],
        clicks in proptest::collection::vec(menu_click_strategy(), 1..30),
    ) {
        let (mut dashboard, host) = started_dashboard("student-management", width, "");
        for click in clicks {
            dashboard.handle(click).unwrap();

            let shown: Vec<&str> = SUBMENUS
                .iter()
                .copied()
                .filter(|id| host.view.has_class(id, "show"))
                .collect();
            prop_assert!(shown.len() <= 1);

            let expected = dashboard
                .state()
                .open_accordion
                .as_ref()
                .map(|id| format!("{id}-submenu"));
            prop_assert_eq!(shown.first().map(|s| (*s).to_string()), expected);
        }
    }

    #[test]
    fn exactly_one_panel_after_any_navigation(
        targets in proptest::collection::vec(module_strategy(), 1..20),
    ) {
        let (mut dashboard, host) = started_dashboard("student-management", FULL_WIDTH, "");
        for target in targets {
            dashboard.handle(DashboardEvent::LocationChanged(target)).unwrap();

            let panels = host.view.visible_panels();
            prop_assert_eq!(panels.len(), 1);
            let active = dashboard.state().active_module.clone().unwrap();
            prop_assert_eq!(&panels[0], &active.default_panel_id());
        }
    }

    #[test]
    fn wizard_step_stays_in_bounds(
        actions in proptest::collection::vec(wizard_action_strategy(), 1..40),
    ) {
        let (mut dashboard, host) = started_dashboard("student-management", FULL_WIDTH, "");
        let total = dashboard.wizard().unwrap().total_steps();

        for action in actions {
            let before = dashboard.wizard().unwrap().current_step();
            match action {
                WizardAction::Next => {
                    let result = dashboard.handle(DashboardEvent::NextClicked);
                    let after = dashboard.wizard().unwrap().current_step();
                    if result.is_err() {
                        prop_assert_eq!(after, before);
                    } else {
                        prop_assert!(after == before || after == before + 1);
                    }
                }
                WizardAction::Prev => {
                    dashboard.handle(DashboardEvent::PrevClicked).unwrap();
                    let after = dashboard.wizard().unwrap().current_step();
                    prop_assert!(after == before || after + 1 == before);
                }
                WizardAction::FillAll => fill_admission_form(&host.view),
                WizardAction::ClearFirst => host.view.set_fields(
                    "step-1",
                    vec![FormField::text("first-name", true, "")],
                ),
                WizardAction::ClosePopup => {
                    dashboard.handle(DashboardEvent::PopupCloseClicked).unwrap();
                }
            }

            let step = dashboard.wizard().unwrap().current_step();
            prop_assert!(step < total);
        }
    }

    #[test]
    fn filtering_is_a_stable_subsequence(criteria in criteria_strategy()) {
        let provider = InMemoryStudentProvider::sample();
        let records = provider.students();

        let first = FilterEngine::filter(records, &criteria);
        let second = FilterEngine::filter(records, &criteria);
        prop_assert_eq!(&first, &second);

        let mut cursor = 0;
        for matched in &first {
            let offset = records[cursor..]
                .iter()
                .position(|r| r.id == matched.id);
            prop_assert!(offset.is_some());
            cursor += offset.unwrap_or(0) + 1;
        }
    }
}
