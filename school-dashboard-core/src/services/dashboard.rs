//! Composition root: routes host events to the components of one page

use crate::config::DashboardConfig;
use crate::error::CoreResult;
use crate::services::{
    AccordionGroup, AccordionOutcome, DashboardContext, FilterEngine, LinkTarget, ModuleRouter,
    NavigateOutcome, ShellController, StepWizard, WizardTransition,
};
use crate::types::{FilterCriteria, ModuleId, UiState};

/// Notifications a host forwards to the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    MenuToggleClicked,
    OverlayClicked,
    SettingsClicked,
    SettingsCloseClicked,
    ThemeToggleClicked,
    FullscreenClicked,
    /// The host's fullscreen state actually changed
    FullscreenChanged(bool),
    /// Sidebar entry clicked, by element id (leaf or group header)
    MenuEntryClicked(String),
    /// Submenu link clicked, by element id
    SubmenuLinkClicked(String),
    /// The location fragment changed outside the dashboard
    LocationChanged(String),
    NextClicked,
    PrevClicked,
    PopupCloseClicked,
    FilterSubmitted(FilterCriteria),
    FilterReset,
    /// Row action of the student table, carrying the student id
    ViewProfileClicked(String),
}

/// What the host should do after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardOutcome {
    /// State and view changed
    Updated,
    /// Nothing applied to this page
    Ignored,
    /// The target lives on another host page; the host loads it
    OpenPage { page: String, module: ModuleId },
    /// The admission wizard was submitted and its popup is shown
    Submitted,
}

impl From<NavigateOutcome> for DashboardOutcome {
    fn from(outcome: NavigateOutcome) -> Self {
        match outcome {
            NavigateOutcome::Ignored => Self::Ignored,
            NavigateOutcome::Shown(_) | NavigateOutcome::FellBack { .. } => Self::Updated,
        }
    }
}

/// One dashboard instance on one host page
///
/// Components whose view anchors are missing are left out and their events
/// are ignored.
pub struct Dashboard {
    config: DashboardConfig,
    page: String,
    shell: ShellController,
    accordion: Option<AccordionGroup>,
    router: Option<ModuleRouter>,
    wizard: Option<StepWizard>,
    filter: Option<FilterEngine>,
}

impl Dashboard {
    pub fn new(ctx: DashboardContext, config: &DashboardConfig, page: &str) -> CoreResult<Self> {
        config.validate()?;

        let shell = ShellController::new(
            config,
            ctx.view.clone(),
            ctx.viewport.clone(),
            ctx.fullscreen.clone(),
        );
        let accordion = AccordionGroup::attach(&config.menu, ctx.view.clone());
        let router = ModuleRouter::attach(config, page, ctx.view.clone(), ctx.location.clone())?;
        let wizard = StepWizard::attach(&config.wizard, ctx.view.clone());
        let filter = FilterEngine::attach(
            &config.student_list,
            ctx.students.clone(),
            ctx.profile_viewer.clone(),
            ctx.view.clone(),
        );

        log::info!(
            "Dashboard page '{page}' attached: accordion={}, router={}, wizard={}, filter={}",
            accordion.is_some(),
            router.is_some(),
            wizard.is_some(),
            filter.is_some()
        );

        Ok(Self {
            config: config.clone(),
            page: page.to_string(),
            shell,
            accordion,
            router,
            wizard,
            filter,
        })
    }

    /// Apply the initial state of every attached component
    pub fn start(&mut self) {
        self.shell.init();
        if let Some(accordion) = &mut self.accordion {
            accordion.close_all(&mut self.shell);
        }
        if let Some(router) = &self.router {
            router.start(&mut self.shell);
        }
        if let Some(wizard) = &self.wizard {
            wizard.sync_view();
        }
        if let Some(filter) = &mut self.filter {
            filter.clear();
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn state(&self) -> &UiState {
        self.shell.state()
    }

    pub fn wizard(&self) -> Option<&StepWizard> {
        self.wizard.as_ref()
    }

    pub fn filter(&self) -> Option<&FilterEngine> {
        self.filter.as_ref()
    }

    /// Show `module` directly
    pub fn navigate(&mut self, module: &str) -> NavigateOutcome {
        match &self.router {
            Some(router) => router.navigate(module, &mut self.shell),
            None => NavigateOutcome::Ignored,
        }
    }

    /// Handle one host event
    ///
    /// Only an incomplete wizard step is reported as an error; every other
    /// failure is absorbed by the component concerned.
    pub fn handle(&mut self, event: DashboardEvent) -> CoreResult<DashboardOutcome> {
        log::trace!("Dashboard event: {event:?}");

        let outcome = match event {
            DashboardEvent::MenuToggleClicked => {
                let open = self.shell.toggle_sidebar();
                if !open && !self.shell.layout().is_mobile() && self.config.close_accordions_on_collapse
                {
                    if let Some(accordion) = &mut self.accordion {
                        accordion.close_all(&mut self.shell);
                    }
                }
                DashboardOutcome::Updated
            }
            DashboardEvent::OverlayClicked => {
                if self.shell.state().overlay_visible {
                    self.shell.toggle_sidebar();
                    DashboardOutcome::Updated
                } else {
                    DashboardOutcome::Ignored
                }
            }
            DashboardEvent::SettingsClicked => {
                self.shell.toggle_settings_panel();
                DashboardOutcome::Updated
            }
            DashboardEvent::SettingsCloseClicked => {
                if self.shell.state().settings_open {
                    self.shell.toggle_settings_panel();
                    DashboardOutcome::Updated
                } else {
                    DashboardOutcome::Ignored
                }
            }
            DashboardEvent::ThemeToggleClicked => {
                self.shell.toggle_theme();
                DashboardOutcome::Updated
            }
            DashboardEvent::FullscreenClicked => {
                // state follows the change notification
                self.shell.toggle_fullscreen();
                DashboardOutcome::Ignored
            }
            DashboardEvent::FullscreenChanged(active) => {
                self.shell.on_fullscreen_changed(active);
                DashboardOutcome::Updated
            }
            DashboardEvent::MenuEntryClicked(element_id) => {
                let Some(accordion) = &mut self.accordion else {
                    return Ok(DashboardOutcome::Ignored);
                };
                let clicked = accordion.activate(&element_id, &mut self.shell);
                match clicked {
                    AccordionOutcome::Toggled { .. } => DashboardOutcome::Updated,
                    AccordionOutcome::Leaf(id) => self.follow_link(&id),
                    AccordionOutcome::Ignored => DashboardOutcome::Ignored,
                }
            }
            DashboardEvent::SubmenuLinkClicked(element_id) => self.follow_link(&element_id),
            DashboardEvent::LocationChanged(fragment) => match &self.router {
                Some(router) => router.on_location_changed(&fragment, &mut self.shell).into(),
                None => DashboardOutcome::Ignored,
            },
            DashboardEvent::NextClicked => match &mut self.wizard {
                Some(wizard) => match wizard.next()? {
                    WizardTransition::Advanced { .. } => DashboardOutcome::Updated,
                    WizardTransition::Submitted => DashboardOutcome::Submitted,
                    WizardTransition::Unchanged => DashboardOutcome::Ignored,
                },
                None => DashboardOutcome::Ignored,
            },
            DashboardEvent::PrevClicked => match &mut self.wizard {
                Some(wizard) => {
                    if wizard.prev() {
                        DashboardOutcome::Updated
                    } else {
                        DashboardOutcome::Ignored
                    }
                }
                None => DashboardOutcome::Ignored,
            },
            DashboardEvent::PopupCloseClicked => {
                let closed = match &mut self.wizard {
                    Some(wizard) if wizard.popup_open() => {
                        wizard.close_popup();
                        true
                    }
                    _ => false,
                };
                if closed {
                    self.go_to_landing()
                } else {
                    DashboardOutcome::Ignored
                }
            }
            DashboardEvent::FilterSubmitted(criteria) => match &mut self.filter {
                Some(filter) => {
                    filter.apply(&criteria);
                    DashboardOutcome::Updated
                }
                None => DashboardOutcome::Ignored,
            },
            DashboardEvent::FilterReset => match &mut self.filter {
                Some(filter) => {
                    filter.clear();
                    DashboardOutcome::Updated
                }
                None => DashboardOutcome::Ignored,
            },
            DashboardEvent::ViewProfileClicked(student_id) => match &self.filter {
                Some(filter) if filter.view_profile(&student_id) => DashboardOutcome::Updated,
                _ => DashboardOutcome::Ignored,
            },
        };

        Ok(outcome)
    }

    fn follow_link(&mut self, element_id: &str) -> DashboardOutcome {
        let Some(router) = &self.router else {
            return DashboardOutcome::Ignored;
        };

        match router.resolve_link(element_id) {
            LinkTarget::Module(module) => router.navigate(module.as_str(), &mut self.shell).into(),
            LinkTarget::External { page, module } => {
                log::info!("Link '{element_id}' leads to '{module}' on page '{page}'");
                DashboardOutcome::OpenPage { page, module }
            }
            LinkTarget::Unresolved => {
                log::warn!("Link '{element_id}' has no module on any page");
                DashboardOutcome::Ignored
            }
        }
    }

    fn go_to_landing(&mut self) -> DashboardOutcome {
        let landing = self.config.landing_module_on_reset.clone();

        if let Some(router) = &self.router {
            if router.is_known(&landing) {
                return router.navigate(landing.as_str(), &mut self.shell).into();
            }
        }

        match self.config.page_of(&landing) {
            Some(host) if host.name != self.page => DashboardOutcome::OpenPage {
                page: host.name.clone(),
                module: landing,
            },
            _ => {
                log::warn!("Landing module '{landing}' has no panel on page '{}'", self.page);
                DashboardOutcome::Updated
            }
        }
    }
}
