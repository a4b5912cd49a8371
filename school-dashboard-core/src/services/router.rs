//! Module router: panel visibility, location fragment and active links

use std::sync::Arc;

use crate::config::{DashboardConfig, MenuEntryConfig};
use crate::error::{CoreError, CoreResult};
use crate::services::ShellController;
use crate::traits::{Location, ViewSurface};
use crate::types::{ModuleId, ViewCommand};

/// Where a sidebar link leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// A module of the current page
    Module(ModuleId),
    /// A module of another host page; the host loads that page
    External { page: String, module: ModuleId },
    /// Nothing on any page
    Unresolved,
}

/// Result of a navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateOutcome {
    /// Empty target, nothing changed
    Ignored,
    /// The requested module is shown
    Shown(ModuleId),
    /// The requested module does not exist here; the default is shown instead
    FellBack { requested: ModuleId, shown: ModuleId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Push,
    Replace,
}

#[derive(Debug, Clone)]
struct Panel {
    module: ModuleId,
    element: String,
}

#[derive(Debug, Clone)]
struct RouteLink {
    element: String,
    target: LinkTarget,
    parent_header: Option<String>,
}

/// Maps module ids to panels for one host page
pub struct ModuleRouter {
    page: String,
    default_module: ModuleId,
    panels: Vec<Panel>,
    links: Vec<RouteLink>,
    headers: Vec<String>,
    view: Arc<dyn ViewSurface>,
    location: Arc<dyn Location>,
}

impl ModuleRouter {
    /// Build the router of `page_name`
    ///
    /// Only panels present on the view are routable. Returns `Ok(None)` when the
    /// page's default panel is missing, so the page runs without routing.
    pub fn attach(
        config: &DashboardConfig,
        page_name: &str,
        view: Arc<dyn ViewSurface>,
        location: Arc<dyn Location>,
    ) -> CoreResult<Option<Self>> {
        let page = config.page(page_name)?;

        let mut panels = Vec::with_capacity(page.modules.len());
        for module in &page.modules {
            let element = module.panel_id();
            if view.contains(&element) {
                panels.push(Panel {
                    module: module.id.clone(),
                    element,
                });
            } else {
                log::warn!(
                    "Panel '{element}' of module '{}' is missing on page '{page_name}'",
                    module.id
                );
            }
        }

        if !panels.iter().any(|p| p.module == page.default_module) {
            log::warn!(
                "Default module '{}' has no panel on page '{page_name}', routing disabled",
                page.default_module
            );
            return Ok(None);
        }

        let mut links = Vec::new();
        let mut headers = Vec::new();
        for entry in &config.menu {
            match entry {
                MenuEntryConfig::Leaf {
                    id, module, page, ..
                } => {
                    if view.contains(id) {
                        links.push(RouteLink {
                            element: id.clone(),
                            target: resolve(config, page_name, module, page.as_deref()),
                            parent_header: None,
                        });
                    }
                }
                MenuEntryConfig::Group {
                    header,
                    links: group_links,
                    ..
                } => {
                    let header_present = view.contains(header);
                    if header_present {
                        headers.push(header.clone());
                    }
                    for link in group_links {
                        if !view.contains(&link.id) {
                            continue;
                        }
                        let module = link
                            .module
                            .clone()
                            .unwrap_or_else(|| ModuleId::from(link.id.as_str()));
                        links.push(RouteLink {
                            element: link.id.clone(),
                            target: resolve(config, page_name, &module, link.page.as_deref()),
                            parent_header: header_present.then(|| header.clone()),
                        });
                    }
                }
            }
        }

        Ok(Some(Self {
            page: page_name.to_string(),
            default_module: page.default_module.clone(),
            panels,
            links,
            headers,
            view,
            location,
        }))
    }

    /// Whether `module` has a panel on this page
    pub fn is_known(&self, module: &ModuleId) -> bool {
        self.panels.iter().any(|p| &p.module == module)
    }

    fn ensure_known(&self, module: &ModuleId) -> CoreResult<()> {
        if self.is_known(module) {
            Ok(())
        } else {
            Err(CoreError::UnknownModule(module.to_string()))
        }
    }

    /// Target of a sidebar link or leaf, by element id
    pub fn resolve_link(&self, element_id: &str) -> LinkTarget {
        self.links
            .iter()
            .find(|l| l.element == element_id)
            .map_or(LinkTarget::Unresolved, |l| l.target.clone())
    }

    /// Show the module named by the current location, or the page default
    pub fn start(&self, shell: &mut ShellController) -> NavigateOutcome {
        let fragment = self.location.fragment();
        if ModuleId::from_fragment(&fragment).is_some() {
            log::info!("Deep link to '{fragment}'");
            self.navigate(&fragment, shell)
        } else {
            let default = self.default_module.clone();
            self.show(&default, HistoryMode::Replace, shell);
            NavigateOutcome::Shown(default)
        }
    }

    /// The location fragment changed outside the router
    pub fn on_location_changed(&self, fragment: &str, shell: &mut ShellController) -> NavigateOutcome {
        if ModuleId::from_fragment(fragment).is_none() {
            return NavigateOutcome::Ignored;
        }
        self.navigate(fragment, shell)
    }

    /// Show `target` and hide every other panel
    ///
    /// An empty target is ignored. An unknown one falls back to the page default.
    pub fn navigate(&self, target: &str, shell: &mut ShellController) -> NavigateOutcome {
        let Some(requested) = ModuleId::from_fragment(target) else {
            log::debug!("Navigation without a target ignored");
            return NavigateOutcome::Ignored;
        };

        if let Err(err) = self.ensure_known(&requested) {
            log::warn!(
                "{err} on page '{}', showing '{}'",
                self.page,
                self.default_module
            );
        } else {
            self.show(&requested, HistoryMode::Push, shell);
            log::info!("Navigated to '{requested}'");
            return NavigateOutcome::Shown(requested);
        }

        // an unknown fragment typed into the location is overwritten, not stacked
        let mode = if ModuleId::from_fragment(&self.location.fragment()).as_ref() == Some(&requested)
        {
            HistoryMode::Replace
        } else {
            HistoryMode::Push
        };
        let shown = self.default_module.clone();
        self.show(&shown, mode, shell);
        NavigateOutcome::FellBack { requested, shown }
    }

    fn show(&self, module: &ModuleId, mode: HistoryMode, shell: &mut ShellController) {
        shell.set_active_module(module.clone());

        let mut commands: Vec<ViewCommand> = self
            .panels
            .iter()
            .map(|p| ViewCommand::visible(&p.element, &p.module == module))
            .collect();

        for header in &self.headers {
            commands.push(ViewCommand::class(header, "active", false));
        }
        let mut active_headers = Vec::new();
        for link in &self.links {
            let active = matches!(&link.target, LinkTarget::Module(m) if m == module);
            commands.push(ViewCommand::class(&link.element, "active", active));
            if active {
                if let Some(header) = &link.parent_header {
                    active_headers.push(header);
                }
            }
        }
        for header in active_headers {
            commands.push(ViewCommand::class(header, "active", true));
        }
        self.view.apply_all(commands);

        if self.location.fragment() != module.as_str() {
            match mode {
                HistoryMode::Push => self.location.push_fragment(module.as_str()),
                HistoryMode::Replace => self.location.replace_fragment(module.as_str()),
            }
        }

        if shell.layout().is_mobile() && shell.state().sidebar_open {
            shell.toggle_sidebar();
        }
    }
}

fn resolve(
    config: &DashboardConfig,
    current_page: &str,
    module: &ModuleId,
    page: Option<&str>,
) -> LinkTarget {
    match page {
        Some(other) if other != current_page => match config.page(other) {
            Ok(host) if host.declares(module) => LinkTarget::External {
                page: other.to_string(),
                module: module.clone(),
            },
            _ => LinkTarget::Unresolved,
        },
        _ => {
            let declared = config
                .page(current_page)
                .is_ok_and(|host| host.declares(module));
            if declared {
                LinkTarget::Module(module.clone())
            } else {
                LinkTarget::Unresolved
            }
        }
    }
}
