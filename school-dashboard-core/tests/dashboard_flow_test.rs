//! End-to-end flows over the public API
//!
//! Operation mode:
//! ```bash
//! cargo test -p school-dashboard-core --test dashboard_flow_test
//! ```

use school_dashboard_core::services::{DashboardOutcome, NO_RESULTS_MESSAGE, PLACEHOLDER_MESSAGE};
use school_dashboard_core::test_utils::{
    dashboard_at, fill_admission_form, started_dashboard, FULL_WIDTH, PHONE_WIDTH,
};
use school_dashboard_core::types::{FilterCriteria, FormField, GradeLevel, ModuleId, TableBody};
use school_dashboard_core::{CoreError, DashboardConfig, DashboardEvent, Location};

// ============ Routing ============

#[test]
fn test_deep_link_selects_module() {
    let (dashboard, host) = started_dashboard("student-management", FULL_WIDTH, "searchstudent");

    assert_eq!(
        dashboard.state().active_module,
        Some(ModuleId::from("searchstudent"))
    );
    assert_eq!(host.view.visible_panels(), vec!["searchstudent-module"]);
    assert_eq!(host.location.history().len(), 1);
}

#[test]
fn test_unknown_deep_link_falls_back_without_blank_screen() {
    let (_dashboard, host) = started_dashboard("student-management", FULL_WIDTH, "does-not-exist");

    assert_eq!(host.view.visible_panels(), vec!["admission-module"]);
    assert_eq!(host.location.fragment(), "admission");
    assert_eq!(host.location.history().len(), 1);
}

#[test]
fn test_every_declared_module_is_reachable() {
    let config = DashboardConfig::default();
    let (mut dashboard, host) = started_dashboard("student-management", FULL_WIDTH, "");
    let page = config.page("student-management").unwrap();

    for module in &page.modules {
        dashboard
            .handle(DashboardEvent::LocationChanged(module.id.to_string()))
            .unwrap();
        assert_eq!(host.view.visible_panels(), vec![module.panel_id()]);
        assert_eq!(dashboard.state().active_module.as_ref(), Some(&module.id));
    }
}

#[test]
fn test_empty_location_change_keeps_state() {
    let (mut dashboard, host) = started_dashboard("student-management", FULL_WIDTH, "summary");

    let outcome = dashboard
        .handle(DashboardEvent::LocationChanged(String::new()))
        .unwrap();
    assert_eq!(outcome, DashboardOutcome::Ignored);
    assert_eq!(host.view.visible_panels(), vec!["summary-module"]);
}

#[test]
fn test_mobile_navigation_closes_drawer() {
    let (mut dashboard, host) = started_dashboard("student-management", PHONE_WIDTH, "");
    assert!(!dashboard.state().sidebar_open);

    dashboard.handle(DashboardEvent::MenuToggleClicked).unwrap();
    assert!(host.view.has_class("overlay", "active"));

    dashboard
        .handle(DashboardEvent::MenuEntryClicked("student-menu".to_string()))
        .unwrap();
    dashboard
        .handle(DashboardEvent::SubmenuLinkClicked("migrate".to_string()))
        .unwrap();

    assert!(!dashboard.state().sidebar_open);
    assert!(!host.view.has_class("overlay", "active"));
    assert!(host.view.has_class("migrate", "active"));
    assert!(host.view.has_class("student-menu", "active"));
}

// ============ Accordion ============

#[test]
fn test_accordion_is_exclusive_through_events() {
    let (mut dashboard, host) = started_dashboard("student-management", FULL_WIDTH, "");

    dashboard
        .handle(DashboardEvent::MenuEntryClicked("student-menu".to_string()))
        .unwrap();
    dashboard
        .handle(DashboardEvent::MenuEntryClicked("fees-menu".to_string()))
        .unwrap();

    assert!(host.view.has_class("fees-submenu", "show"));
    assert!(!host.view.has_class("student-submenu", "show"));
    assert!(!host.view.is_visible("student-submenu"));
    assert!(host.view.has_class("fees-chevron", "rotate"));
    assert!(!host.view.has_class("student-chevron", "rotate"));
}

#[test]
fn test_accordion_reopens_collapsed_sidebar() {
    let (mut dashboard, host) = started_dashboard("student-management", FULL_WIDTH, "");
    dashboard.handle(DashboardEvent::MenuToggleClicked).unwrap();
    assert!(host.view.has_class("sidebar", "collapsed"));

    dashboard
        .handle(DashboardEvent::MenuEntryClicked("student-menu".to_string()))
        .unwrap();
    assert!(dashboard.state().sidebar_open);
    assert!(!host.view.has_class("sidebar", "collapsed"));
    assert!(host.view.has_class("student-submenu", "show"));
}

// ============ Admission wizard ============

#[test]
fn test_admission_flow_lands_on_student_list() {
    let (mut dashboard, host) = started_dashboard("student-management", FULL_WIDTH, "");
    fill_admission_form(&host.view);

    let mut outcomes = Vec::new();
    for _ in 0..4 {
        outcomes.push(dashboard.handle(DashboardEvent::NextClicked).unwrap());
    }
    assert_eq!(
        outcomes,
        vec![
            DashboardOutcome::Updated,
            DashboardOutcome::Updated,
            DashboardOutcome::Updated,
            DashboardOutcome::Submitted,
        ]
    );
    assert!(host.view.has_class("admission-popup", "show"));

    dashboard.handle(DashboardEvent::PopupCloseClicked).unwrap();
    assert_eq!(host.view.visible_panels(), vec!["student-list-module"]);
    assert_eq!(host.location.fragment(), "student-list");
    assert!(host.view.is_visible("step-1"));
    assert!(!host.view.is_visible("step-4"));
}

#[test]
fn test_landing_module_is_configurable() {
    let mut config = DashboardConfig::default();
    config.landing_module_on_reset = ModuleId::from("summary");
    let (mut dashboard, host) = dashboard_at(&config, "student-management", FULL_WIDTH, "");
    dashboard.start();
    fill_admission_form(&host.view);

    for _ in 0..4 {
        dashboard.handle(DashboardEvent::NextClicked).unwrap();
    }
    dashboard.handle(DashboardEvent::PopupCloseClicked).unwrap();
    assert_eq!(host.view.visible_panels(), vec!["summary-module"]);
}

#[test]
fn test_invalid_step_reports_and_stays() {
    let (mut dashboard, host) = started_dashboard("student-management", FULL_WIDTH, "");
    host.view.set_fields(
        "step-1",
        vec![
            FormField::text("first-name", true, "Jane"),
            FormField::text("last-name", true, ""),
            FormField::text("date-of-birth", true, "2010-04-02"),
        ],
    );

    let err = dashboard.handle(DashboardEvent::NextClicked).unwrap_err();
    let CoreError::StepIncomplete { step, missing } = &err else {
        panic!("unexpected error: {err:?}");
    };
    assert_eq!(*step, 1);
    assert_eq!(missing, &vec!["last-name".to_string()]);
    assert!(host.view.is_visible("step-1"));
    assert_eq!(host.view.text("wizard-error"), err.to_string());
}

// ============ Student list ============

#[test]
fn test_student_list_states() {
    let (mut dashboard, host) = started_dashboard("student-management", FULL_WIDTH, "student-list");

    assert_eq!(
        host.view.table("student-table"),
        Some(TableBody::Message(PLACEHOLDER_MESSAGE.to_string()))
    );

    dashboard
        .handle(DashboardEvent::FilterSubmitted(FilterCriteria::search("zzz")))
        .unwrap();
    assert_eq!(
        host.view.table("student-table"),
        Some(TableBody::Message(NO_RESULTS_MESSAGE.to_string()))
    );

    dashboard
        .handle(DashboardEvent::FilterSubmitted(
            FilterCriteria::grade(GradeLevel::Grade10).with_year("2024-2025"),
        ))
        .unwrap();
    let Some(TableBody::Rows(rows)) = host.view.table("student-table") else {
        panic!("expected rows");
    };
    let ids: Vec<&str> = rows.iter().map(|r| r.cells[0].as_str()).collect();
    assert_eq!(ids, vec!["S-10234", "S-10237"]);

    dashboard.handle(DashboardEvent::FilterReset).unwrap();
    assert_eq!(
        host.view.table("student-table"),
        Some(TableBody::Message(PLACEHOLDER_MESSAGE.to_string()))
    );
}

// ============ Shell ============

#[test]
fn test_theme_and_settings() {
    let (mut dashboard, host) = started_dashboard("home", FULL_WIDTH, "");

    dashboard
        .handle(DashboardEvent::ThemeToggleClicked)
        .unwrap();
    assert!(host.view.has_class("body", "dark-theme"));
    assert_eq!(host.view.text("theme-toggle-btn"), "Switch to Light");

    dashboard.handle(DashboardEvent::SettingsClicked).unwrap();
    assert!(host.view.has_class("settings-panel", "show"));
    dashboard
        .handle(DashboardEvent::SettingsCloseClicked)
        .unwrap();
    assert!(!host.view.has_class("settings-panel", "show"));
    assert_eq!(
        dashboard
            .handle(DashboardEvent::SettingsCloseClicked)
            .unwrap(),
        DashboardOutcome::Ignored
    );
}

#[test]
fn test_home_page_runs_without_wizard_and_table() {
    let (mut dashboard, host) = started_dashboard("home", FULL_WIDTH, "");

    assert_eq!(host.view.visible_panels(), vec!["dashboard-module"]);
    assert_eq!(
        dashboard.handle(DashboardEvent::PrevClicked).unwrap(),
        DashboardOutcome::Ignored
    );
    assert_eq!(
        dashboard
            .handle(DashboardEvent::SubmenuLinkClicked("addstudent".to_string()))
            .unwrap(),
        DashboardOutcome::OpenPage {
            page: "student-management".to_string(),
            module: ModuleId::from("admission"),
        }
    );
}
