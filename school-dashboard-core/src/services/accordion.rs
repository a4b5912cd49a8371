//! Sidebar accordion group

use std::sync::Arc;

use crate::config::MenuEntryConfig;
use crate::services::ShellController;
use crate::traits::ViewSurface;
use crate::types::{AccordionId, ViewCommand};

/// A collapsible sidebar section
///
/// Header, chevron and submenu are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AccordionItem {
    id: AccordionId,
    header: String,
    chevron: Option<String>,
    submenu: String,
}

/// Result of clicking a sidebar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccordionOutcome {
    /// A group was opened or closed
    Toggled { id: AccordionId, open: bool },
    /// A leaf entry was clicked; the router resolves its element id
    Leaf(String),
    /// Not an entry of this group
    Ignored,
}

/// Sidebar menu with at most one open submenu
pub struct AccordionGroup {
    items: Vec<AccordionItem>,
    leaves: Vec<String>,
    view: Arc<dyn ViewSurface>,
}

impl AccordionGroup {
    /// Build the group from the menu entries present on the view
    ///
    /// Entries whose anchors are missing are skipped. Returns `None` when nothing
    /// of the menu exists on this page.
    pub fn attach(menu: &[MenuEntryConfig], view: Arc<dyn ViewSurface>) -> Option<Self> {
        let mut items = Vec::new();
        let mut leaves = Vec::new();

        for entry in menu {
            match entry {
                MenuEntryConfig::Leaf { id, .. } => {
                    if view.contains(id) {
                        leaves.push(id.clone());
                    }
                }
                MenuEntryConfig::Group {
                    id,
                    header,
                    chevron,
                    submenu,
                    ..
                } => {
                    if view.contains(header) && view.contains(submenu) {
                        items.push(AccordionItem {
                            id: id.clone(),
                            header: header.clone(),
                            chevron: chevron.clone().filter(|c| view.contains(c)),
                            submenu: submenu.clone(),
                        });
                    } else {
                        log::debug!("Accordion '{id}' has no anchors on this page, skipped");
                    }
                }
            }
        }

        if items.is_empty() && leaves.is_empty() {
            log::debug!("No sidebar menu on this page");
            return None;
        }

        Some(Self {
            items,
            leaves,
            view,
        })
    }

    /// Handle a click on a sidebar entry, addressed by its element id
    ///
    /// A leaf closes the open group and is handed back for routing;
    /// a group header toggles its group.
    pub fn activate(&mut self, element_id: &str, shell: &mut ShellController) -> AccordionOutcome {
        if self.leaves.iter().any(|l| l == element_id) {
            self.close_all(shell);
            return AccordionOutcome::Leaf(element_id.to_string());
        }

        let Some(id) = self
            .items
            .iter()
            .find(|item| item.header == element_id || item.id == element_id)
            .map(|item| item.id.clone())
        else {
            return AccordionOutcome::Ignored;
        };

        let open = self.toggle(&id, shell);
        AccordionOutcome::Toggled { id, open }
    }

    /// Open `id` exclusively, or close it if it is the open one
    ///
    /// Expands a closed sidebar first so the submenu is visible.
    /// Returns whether `id` is open afterwards.
    pub fn toggle(&mut self, id: &str, shell: &mut ShellController) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            log::warn!("Unknown accordion: {id}");
            return false;
        };

        if !shell.state().sidebar_open {
            shell.toggle_sidebar();
        }

        let previously_open = shell.state_mut().open_accordion.take();

        if let Some(prev) = previously_open.as_deref() {
            if let Some(prev_item) = self.items.iter().find(|item| item.id == prev) {
                self.render(prev_item, false);
            }
        }

        if previously_open.as_deref() == Some(id) {
            log::debug!("Accordion '{id}' closed");
            return false;
        }

        self.render(&self.items[index], true);
        shell.state_mut().open_accordion = Some(id.to_string());
        log::debug!("Accordion '{id}' opened");
        true
    }

    /// Close every group
    pub fn close_all(&mut self, shell: &mut ShellController) {
        if let Some(open) = shell.state_mut().open_accordion.take() {
            log::debug!("Accordion '{open}' closed");
        }
        for item in &self.items {
            self.render(item, false);
        }
    }

    fn render(&self, item: &AccordionItem, open: bool) {
        let mut commands = vec![
            ViewCommand::visible(&item.submenu, open),
            ViewCommand::class(&item.submenu, "show", open),
        ];
        if let Some(chevron) = &item.chevron {
            commands.push(ViewCommand::class(chevron, "rotate", open));
        }
        self.view.apply_all(commands);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::test_utils::{page_fixture, FULL_WIDTH, PHONE_WIDTH};

    fn group(width: u32) -> (AccordionGroup, ShellController, Arc<crate::test_utils::FakeView>) {
        let config = DashboardConfig::default();
        let (mut shell, view) = page_fixture(&config, "student-management", width);
        shell.init();
        let group = AccordionGroup::attach(&config.menu, view.clone()).unwrap();
        (group, shell, view)
    }

    #[test]
    fn opening_one_closes_the_other() {
        let (mut group, mut shell, view) = group(FULL_WIDTH);

        assert!(group.toggle("student", &mut shell));
        assert!(view.has_class("student-submenu", "show"));
        assert!(view.has_class("student-chevron", "rotate"));

        assert!(group.toggle("fees", &mut shell));
        assert!(!view.has_class("student-submenu", "show"));
        assert!(!view.is_visible("student-submenu"));
        assert!(!view.has_class("student-chevron", "rotate"));
        assert!(view.has_class("fees-submenu", "show"));
        assert_eq!(shell.state().open_accordion.as_deref(), Some("fees"));
    }

    #[test]
    fn toggling_the_open_item_closes_it() {
        let (mut group, mut shell, view) = group(FULL_WIDTH);

        assert!(group.toggle("student", &mut shell));
        assert!(!group.toggle("student", &mut shell));
        assert_eq!(shell.state().open_accordion, None);
        assert!(!view.has_class("student-submenu", "show"));
    }

    #[test]
    fn opening_expands_a_closed_sidebar() {
        let (mut group, mut shell, view) = group(PHONE_WIDTH);
        assert!(!shell.state().sidebar_open);

        group.toggle("student", &mut shell);
        assert!(shell.state().sidebar_open);
        assert!(view.has_class("sidebar", "open"));
    }

    #[test]
    fn header_click_is_resolved_by_element_id() {
        let (mut group, mut shell, _) = group(FULL_WIDTH);

        assert_eq!(
            group.activate("student-menu", &mut shell),
            AccordionOutcome::Toggled {
                id: "student".to_string(),
                open: true
            }
        );
        assert_eq!(group.activate("nope", &mut shell), AccordionOutcome::Ignored);
    }

    #[test]
    fn leaf_click_closes_open_group() {
        let (mut group, mut shell, view) = group(FULL_WIDTH);

        group.toggle("fees", &mut shell);
        assert_eq!(
            group.activate("nav-dashboard", &mut shell),
            AccordionOutcome::Leaf("nav-dashboard".to_string())
        );
        assert_eq!(shell.state().open_accordion, None);
        assert!(!view.has_class("fees-submenu", "show"));
    }

    #[test]
    fn detached_without_anchors() {
        let config = DashboardConfig::default();
        let view = Arc::new(crate::test_utils::FakeView::new());
        assert!(AccordionGroup::attach(&config.menu, view).is_none());
    }
}
