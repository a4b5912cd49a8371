//! Dashboard configuration
//!
//! Everything that differed between the deployed variants of the dashboard lives
//! here instead of in code: the host pages and their default modules, the reset
//! landing module, the sidebar menu and the element ids of every anchor.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{AccordionId, ModuleId, Theme};

/// Default viewport width (logical pixels) at or below which the mobile layout is used
pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 768;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    pub mobile_breakpoint: u32,
    /// Module shown after the admission popup is closed
    pub landing_module_on_reset: ModuleId,
    /// Close every submenu when the sidebar collapses on a wide layout
    pub close_accordions_on_collapse: bool,
    pub initial_theme: Theme,
    pub shell: ShellElements,
    pub pages: Vec<HostPage>,
    pub menu: Vec<MenuEntryConfig>,
    pub wizard: WizardConfig,
    pub student_list: StudentListConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            landing_module_on_reset: ModuleId::from("student-list"),
            close_accordions_on_collapse: true,
            initial_theme: Theme::Light,
            shell: ShellElements::default(),
            pages: default_pages(),
            menu: default_menu(),
            wizard: WizardConfig::default(),
            student_list: StudentListConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Look up a host page by name
    pub fn page(&self, name: &str) -> CoreResult<&HostPage> {
        self.pages
            .iter()
            .find(|page| page.name == name)
            .ok_or_else(|| CoreError::InvalidConfig(format!("Unknown host page: '{name}'")))
    }

    /// The page that declares `module`, if any
    #[must_use]
    pub fn page_of(&self, module: &ModuleId) -> Option<&HostPage> {
        self.pages.iter().find(|page| page.declares(module))
    }

    /// Check cross-references between pages, menu and wizard
    pub fn validate(&self) -> CoreResult<()> {
        if self.pages.is_empty() {
            return Err(CoreError::InvalidConfig(
                "At least one host page is required".to_string(),
            ));
        }

        let mut page_names = HashSet::new();
        for page in &self.pages {
            if !page_names.insert(page.name.as_str()) {
                return Err(CoreError::InvalidConfig(format!(
                    "Duplicate host page: '{}'",
                    page.name
                )));
            }

            let mut ids = HashSet::new();
            for module in &page.modules {
                if module.id.is_empty() {
                    return Err(CoreError::InvalidConfig(format!(
                        "Page '{}' declares a module with an empty id",
                        page.name
                    )));
                }
                if !ids.insert(&module.id) {
                    return Err(CoreError::InvalidConfig(format!(
                        "Page '{}' declares module '{}' twice",
                        page.name, module.id
                    )));
                }
            }

            if !page.declares(&page.default_module) {
                return Err(CoreError::InvalidConfig(format!(
                    "Default module '{}' is not declared on page '{}'",
                    page.default_module, page.name
                )));
            }
        }

        if self.wizard.steps.is_empty() {
            return Err(CoreError::InvalidConfig(
                "The admission wizard needs at least one step".to_string(),
            ));
        }

        if self.page_of(&self.landing_module_on_reset).is_none() {
            return Err(CoreError::InvalidConfig(format!(
                "Landing module '{}' is not declared on any page",
                self.landing_module_on_reset
            )));
        }

        Ok(())
    }
}

/// Element ids of the shell anchors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellElements {
    pub root: String,
    pub sidebar: String,
    pub content: String,
    pub overlay: String,
    pub menu_icon: String,
    pub settings_panel: String,
    pub theme_button: String,
    pub fullscreen_icon: String,
}

impl Default for ShellElements {
    fn default() -> Self {
        Self {
            root: "body".to_string(),
            sidebar: "sidebar".to_string(),
            content: "content".to_string(),
            overlay: "overlay".to_string(),
            menu_icon: "menu-toggle".to_string(),
            settings_panel: "settings-panel".to_string(),
            theme_button: "theme-toggle-btn".to_string(),
            fullscreen_icon: "fullscreen-btn".to_string(),
        }
    }
}

/// One independent page sharing the dashboard script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostPage {
    pub name: String,
    pub title: String,
    /// Module shown when the location carries no fragment
    pub default_module: ModuleId,
    pub modules: Vec<ModuleConfig>,
}

impl HostPage {
    #[must_use]
    pub fn declares(&self, module: &ModuleId) -> bool {
        self.module(module).is_some()
    }

    #[must_use]
    pub fn module(&self, module: &ModuleId) -> Option<&ModuleConfig> {
        self.modules.iter().find(|m| &m.id == module)
    }
}

/// A content panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleConfig {
    pub id: ModuleId,
    pub title: String,
    /// Panel element id, `<id>-module` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel: Option<String>,
}

impl ModuleConfig {
    fn new(id: &str, title: &str) -> Self {
        Self {
            id: ModuleId::from(id),
            title: title.to_string(),
            panel: None,
        }
    }

    #[must_use]
    pub fn panel_id(&self) -> String {
        self.panel
            .clone()
            .unwrap_or_else(|| self.id.default_panel_id())
    }
}

/// Sidebar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MenuEntryConfig {
    /// Entry without a submenu
    #[serde(rename_all = "camelCase")]
    Leaf {
        id: String,
        label: String,
        module: ModuleId,
        /// Host page of the module; `None` means the current page
        #[serde(default, skip_serializing_if = "Option::is_none")]
        page: Option<String>,
    },
    /// Accordion header with a submenu of links
    #[serde(rename_all = "camelCase")]
    Group {
        id: AccordionId,
        label: String,
        header: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        chevron: Option<String>,
        submenu: String,
        links: Vec<LinkConfig>,
    },
}

impl MenuEntryConfig {
    /// Element id of the clickable control
    #[must_use]
    pub fn element_id(&self) -> &str {
        match self {
            Self::Leaf { id, .. } => id,
            Self::Group { header, .. } => header,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf { label, .. } | Self::Group { label, .. } => label,
        }
    }
}

/// Submenu link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkConfig {
    /// Element id of the link
    pub id: String,
    pub label: String,
    /// Target module; the link id itself is tried when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleId>,
    /// Host page of the target; `None` means the current page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

impl LinkConfig {
    fn to(id: &str, label: &str, module: Option<&str>, page: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            module: module.map(ModuleId::from),
            page: page.map(str::to_string),
        }
    }
}

/// Admission wizard anchors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WizardConfig {
    pub steps: Vec<StepConfig>,
    pub prev_button: String,
    pub next_button: String,
    pub popup: String,
    /// Element receiving validation messages
    pub error_label: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            prev_button: "prev-btn".to_string(),
            next_button: "next-btn".to_string(),
            popup: "admission-popup".to_string(),
            error_label: "wizard-error".to_string(),
        }
    }
}

/// One wizard step: its section, its indicator and the controls it holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepConfig {
    pub title: String,
    pub section: String,
    pub indicator: String,
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

/// Form control declaration (used by hosts to build the form)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub checkbox: bool,
}

impl FieldConfig {
    fn text(name: &str, label: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            required,
            checkbox: false,
        }
    }

    fn checkbox(name: &str, label: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            required,
            checkbox: true,
        }
    }
}

/// Student list anchors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentListConfig {
    /// Table body element id
    pub table: String,
    pub view_profile_label: String,
}

impl Default for StudentListConfig {
    fn default() -> Self {
        Self {
            table: "student-table".to_string(),
            view_profile_label: "View Profile".to_string(),
        }
    }
}

fn default_pages() -> Vec<HostPage> {
    vec![
        HostPage {
            name: "home".to_string(),
            title: "Home".to_string(),
            default_module: ModuleId::from("dashboard"),
            modules: vec![ModuleConfig::new("dashboard", "Dashboard")],
        },
        HostPage {
            name: "student-management".to_string(),
            title: "Student Management".to_string(),
            default_module: ModuleId::from("admission"),
            modules: vec![
                ModuleConfig::new("admission", "Admission"),
                ModuleConfig::new("student-list", "Student List"),
                ModuleConfig::new("summary", "Summary"),
                ModuleConfig::new("migrate", "Migrate Students"),
                ModuleConfig::new("quickedit", "Quick Edit"),
                ModuleConfig::new("academicedit", "Academic Edit"),
                ModuleConfig::new("searchstudent", "Search Student"),
                ModuleConfig::new("studentaccounts", "Student Accounts"),
                ModuleConfig::new("oldstudentdebt", "Old Student Debt"),
                ModuleConfig::new("oldstudentrec", "Old Student Records"),
            ],
        },
    ]
}

fn default_menu() -> Vec<MenuEntryConfig> {
    const STUDENT_PAGE: Option<&str> = Some("student-management");
    vec![
        MenuEntryConfig::Leaf {
            id: "nav-dashboard".to_string(),
            label: "Dashboard".to_string(),
            module: ModuleId::from("dashboard"),
            page: Some("home".to_string()),
        },
        MenuEntryConfig::Group {
            id: "student".to_string(),
            label: "Students".to_string(),
            header: "student-menu".to_string(),
            chevron: Some("student-chevron".to_string()),
            submenu: "student-submenu".to_string(),
            links: vec![
                LinkConfig::to("addstudent", "Add Student", Some("admission"), STUDENT_PAGE),
                LinkConfig::to("viewstudent", "View Students", Some("student-list"), STUDENT_PAGE),
                LinkConfig::to("summary", "Summary", None, STUDENT_PAGE),
                LinkConfig::to("migrate", "Migrate", None, STUDENT_PAGE),
                LinkConfig::to("quickedit", "Quick Edit", None, STUDENT_PAGE),
                LinkConfig::to("academicedit", "Academic Edit", None, STUDENT_PAGE),
                LinkConfig::to("searchstudent", "Search Student", None, STUDENT_PAGE),
                LinkConfig::to("studentaccounts", "Student Accounts", None, STUDENT_PAGE),
                LinkConfig::to("oldstudentdebt", "Old Student Debt", None, STUDENT_PAGE),
                LinkConfig::to("oldstudentrec", "Old Student Records", None, STUDENT_PAGE),
            ],
        },
        MenuEntryConfig::Group {
            id: "fees".to_string(),
            label: "Fees".to_string(),
            header: "fees-menu".to_string(),
            chevron: Some("fees-chevron".to_string()),
            submenu: "fees-submenu".to_string(),
            links: vec![
                LinkConfig::to("feescate", "Fee Categories", None, None),
                LinkConfig::to("newrequi", "New Requisition", None, None),
            ],
        },
    ]
}

fn default_steps() -> Vec<StepConfig> {
    vec![
        StepConfig {
            title: "Student Details".to_string(),
            section: "step-1".to_string(),
            indicator: "step-indicator-1".to_string(),
            fields: vec![
                FieldConfig::text("first-name", "First Name", true),
                FieldConfig::text("last-name", "Last Name", true),
                FieldConfig::text("date-of-birth", "Date of Birth", true),
                FieldConfig::text("gender", "Gender", false),
            ],
        },
        StepConfig {
            title: "Guardian".to_string(),
            section: "step-2".to_string(),
            indicator: "step-indicator-2".to_string(),
            fields: vec![
                FieldConfig::text("guardian-name", "Guardian Name", true),
                FieldConfig::text("guardian-phone", "Guardian Phone", true),
                FieldConfig::text("guardian-email", "Guardian Email", false),
            ],
        },
        StepConfig {
            title: "Academic".to_string(),
            section: "step-3".to_string(),
            indicator: "step-indicator-3".to_string(),
            fields: vec![
                FieldConfig::text("grade-applying", "Grade Applying For", true),
                FieldConfig::text("previous-school", "Previous School", false),
            ],
        },
        StepConfig {
            title: "Confirm".to_string(),
            section: "step-4".to_string(),
            indicator: "step-indicator-4".to_string(),
            fields: vec![FieldConfig::checkbox(
                "terms",
                "I confirm the details above are correct",
                true,
            )],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        DashboardConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            DashboardConfig::from_json(r#"{"landingModuleOnReset":"dashboard"}"#).unwrap();
        assert_eq!(config.landing_module_on_reset, ModuleId::from("dashboard"));
        assert_eq!(config.mobile_breakpoint, DEFAULT_MOBILE_BREAKPOINT);
        assert_eq!(config.pages.len(), 2);
    }

    #[test]
    fn host_page_looks_up_its_modules() {
        let config = DashboardConfig::default();
        let page = config.page("student-management").unwrap();

        assert_eq!(
            page.module(&ModuleId::from("migrate")).map(|m| m.title.as_str()),
            Some("Migrate Students")
        );
        assert!(page.declares(&ModuleId::from("summary")));
        assert!(page.module(&ModuleId::from("dashboard")).is_none());
        assert!(!page.declares(&ModuleId::from("dashboard")));
    }

    #[test]
    fn default_module_must_be_declared() {
        let mut config = DashboardConfig::default();
        config.pages[0].default_module = ModuleId::from("fees");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn duplicate_modules_are_rejected() {
        let mut config = DashboardConfig::default();
        config.pages[0]
            .modules
            .push(ModuleConfig::new("dashboard", "Again"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn landing_module_must_exist() {
        let mut config = DashboardConfig::default();
        config.landing_module_on_reset = ModuleId::from("nowhere");
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_wizard_is_rejected() {
        let mut config = DashboardConfig::default();
        config.wizard.steps.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn menu_entries_round_trip_through_json() {
        let config = DashboardConfig::default();
        let json = serde_json::to_string(&config.menu).unwrap();
        let menu: Vec<MenuEntryConfig> = serde_json::from_str(&json).unwrap();
        assert_eq!(menu, config.menu);
    }
}
