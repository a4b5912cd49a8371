//! Shell controller: sidebar, settings panel, theme and fullscreen

use std::sync::Arc;

use crate::config::{DashboardConfig, ShellElements};
use crate::traits::{FullscreenControl, ViewSurface, Viewport};
use crate::types::{LayoutMode, ModuleId, Theme, UiState, ViewCommand};

/// Owner of the [`UiState`] of one dashboard instance
///
/// Other components receive `&mut ShellController` when a transition of theirs
/// has to touch shell state (opening an accordion expands the sidebar,
/// navigating on a narrow viewport closes it).
pub struct ShellController {
    state: UiState,
    elements: ShellElements,
    breakpoint: u32,
    view: Arc<dyn ViewSurface>,
    viewport: Arc<dyn Viewport>,
    fullscreen: Arc<dyn FullscreenControl>,
}

impl ShellController {
    #[must_use]
    pub fn new(
        config: &DashboardConfig,
        view: Arc<dyn ViewSurface>,
        viewport: Arc<dyn Viewport>,
        fullscreen: Arc<dyn FullscreenControl>,
    ) -> Self {
        Self {
            state: UiState::with_theme(config.initial_theme),
            elements: config.shell.clone(),
            breakpoint: config.mobile_breakpoint,
            view,
            viewport,
            fullscreen,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut UiState {
        &mut self.state
    }

    pub(crate) fn set_active_module(&mut self, module: ModuleId) {
        self.state.active_module = Some(module);
    }

    /// Layout for the current viewport width, read fresh on every call
    pub fn layout(&self) -> LayoutMode {
        LayoutMode::for_width(self.viewport.width(), self.breakpoint)
    }

    /// Apply the initial shell state to the view
    ///
    /// The viewport is read once here: narrow layouts start with the drawer closed,
    /// wide layouts start with the sidebar expanded.
    pub fn init(&mut self) {
        let layout = self.layout();
        self.state.layout = layout;
        self.state.sidebar_open = !layout.is_mobile();
        self.state.settings_open = false;
        self.state.fullscreen = self.fullscreen.is_fullscreen();

        self.sync_sidebar();

        let e = &self.elements;
        self.view.apply_all(vec![
            ViewCommand::class(&e.settings_panel, "show", false),
            ViewCommand::class(&e.root, Theme::Light.class_name(), self.state.theme == Theme::Light),
            ViewCommand::class(&e.root, Theme::Dark.class_name(), self.state.theme == Theme::Dark),
            ViewCommand::text(&e.theme_button, self.state.theme.switch_label()),
        ]);
        self.sync_fullscreen_icon();

        log::debug!(
            "Shell initialised: layout={:?}, sidebar_open={}, theme={:?}",
            layout,
            self.state.sidebar_open,
            self.state.theme
        );
    }

    /// Flip the sidebar. Returns the new open state.
    pub fn toggle_sidebar(&mut self) -> bool {
        self.state.sidebar_open = !self.state.sidebar_open;
        self.state.layout = self.layout();
        self.sync_sidebar();
        log::debug!(
            "Sidebar {} ({:?} layout)",
            if self.state.sidebar_open { "opened" } else { "closed" },
            self.state.layout
        );
        self.state.sidebar_open
    }

    /// Flip the settings panel. Returns the new open state.
    pub fn toggle_settings_panel(&mut self) -> bool {
        self.state.settings_open = !self.state.settings_open;
        self.view.apply(ViewCommand::class(
            &self.elements.settings_panel,
            "show",
            self.state.settings_open,
        ));
        log::debug!("Settings panel open: {}", self.state.settings_open);
        self.state.settings_open
    }

    /// Switch between light and dark. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        let old = self.state.theme;
        let new = old.toggled();
        self.state.theme = new;

        let e = &self.elements;
        self.view.apply_all(vec![
            ViewCommand::class(&e.root, old.class_name(), false),
            ViewCommand::class(&e.root, new.class_name(), true),
            ViewCommand::text(&e.theme_button, new.switch_label()),
        ]);
        log::debug!("Theme switched to {new:?}");
        new
    }

    /// Ask the host to enter or leave fullscreen
    ///
    /// State is not touched here; it follows [`Self::on_fullscreen_changed`].
    /// A refused or unsupported request is swallowed.
    pub fn toggle_fullscreen(&mut self) {
        let result = if self.fullscreen.is_fullscreen() {
            self.fullscreen.exit()
        } else {
            self.fullscreen.request()
        };

        if let Err(e) = result {
            log::debug!("Fullscreen toggle ignored: {e}");
        }
    }

    /// Host notification that the fullscreen state actually changed
    pub fn on_fullscreen_changed(&mut self, active: bool) {
        self.state.fullscreen = active;
        self.sync_fullscreen_icon();
        log::debug!("Fullscreen is now {active}");
    }

    fn sync_sidebar(&mut self) {
        let open = self.state.sidebar_open;
        let e = &self.elements;
        let mut commands = Vec::with_capacity(7);

        if self.state.layout.is_mobile() {
            self.state.overlay_visible = open;
            commands.push(ViewCommand::class(&e.sidebar, "open", open));
            commands.push(ViewCommand::class(&e.overlay, "active", open));
            commands.push(ViewCommand::class(&e.sidebar, "collapsed", false));
            commands.push(ViewCommand::class(&e.content, "collapsed", false));
        } else {
            self.state.overlay_visible = false;
            commands.push(ViewCommand::class(&e.sidebar, "open", false));
            commands.push(ViewCommand::class(&e.overlay, "active", false));
            commands.push(ViewCommand::class(&e.sidebar, "collapsed", !open));
            commands.push(ViewCommand::class(&e.content, "collapsed", !open));
        }
        commands.push(ViewCommand::class(&e.menu_icon, "fa-chevron-left", open));
        commands.push(ViewCommand::class(&e.menu_icon, "fa-bars", !open));

        self.view.apply_all(commands);
    }

    fn sync_fullscreen_icon(&self) {
        let active = self.state.fullscreen;
        let icon = &self.elements.fullscreen_icon;
        self.view.apply_all(vec![
            ViewCommand::class(icon, "fa-compress", active),
            ViewCommand::class(icon, "fa-expand", !active),
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{shell_fixture, FakeFullscreen, FULL_WIDTH, PHONE_WIDTH};

    #[test]
    fn wide_viewport_starts_expanded() {
        let (mut shell, view, _) = shell_fixture(FULL_WIDTH);
        shell.init();

        assert!(shell.state().sidebar_open);
        assert!(!view.has_class("sidebar", "collapsed"));
        assert!(view.has_class("menu-toggle", "fa-chevron-left"));
        assert!(view.has_class("body", "light-theme"));
        assert_eq!(view.text("theme-toggle-btn"), "Switch to Dark");
    }

    #[test]
    fn narrow_viewport_starts_closed_without_overlay() {
        let (mut shell, view, _) = shell_fixture(PHONE_WIDTH);
        shell.init();

        assert!(!shell.state().sidebar_open);
        assert!(!view.has_class("sidebar", "open"));
        assert!(!view.has_class("overlay", "active"));
    }

    #[test]
    fn desktop_toggle_collapses_sidebar_and_content() {
        let (mut shell, view, _) = shell_fixture(FULL_WIDTH);
        shell.init();

        assert!(!shell.toggle_sidebar());
        assert!(view.has_class("sidebar", "collapsed"));
        assert!(view.has_class("content", "collapsed"));
        assert!(view.has_class("menu-toggle", "fa-bars"));
        assert!(!shell.state().overlay_visible);
        assert!(shell.state().is_collapsed());

        assert!(shell.toggle_sidebar());
        assert!(!view.has_class("sidebar", "collapsed"));
    }

    #[test]
    fn mobile_toggle_drives_overlay() {
        let (mut shell, view, _) = shell_fixture(PHONE_WIDTH);
        shell.init();

        assert!(shell.toggle_sidebar());
        assert!(view.has_class("sidebar", "open"));
        assert!(view.has_class("overlay", "active"));
        assert!(shell.state().overlay_visible);
        assert!(!view.has_class("sidebar", "collapsed"));

        assert!(!shell.toggle_sidebar());
        assert!(!view.has_class("overlay", "active"));
        assert!(!shell.state().overlay_visible);
    }

    #[test]
    fn layout_is_rederived_on_every_toggle() {
        let (mut shell, view, viewport) = shell_fixture(FULL_WIDTH);
        shell.init();

        viewport.set_width(PHONE_WIDTH);
        shell.toggle_sidebar();
        assert_eq!(shell.state().layout, LayoutMode::Mobile);
        assert!(!view.has_class("overlay", "active"));

        shell.toggle_sidebar();
        assert!(view.has_class("overlay", "active"));
    }

    #[test]
    fn theme_toggle_twice_restores_original() {
        let (mut shell, view, _) = shell_fixture(FULL_WIDTH);
        shell.init();

        assert_eq!(shell.toggle_theme(), Theme::Dark);
        assert!(view.has_class("body", "dark-theme"));
        assert!(!view.has_class("body", "light-theme"));
        assert_eq!(view.text("theme-toggle-btn"), "Switch to Light");

        assert_eq!(shell.toggle_theme(), Theme::Light);
        assert!(view.has_class("body", "light-theme"));
        assert!(!view.has_class("body", "dark-theme"));
        assert_eq!(view.text("theme-toggle-btn"), "Switch to Dark");
    }

    #[test]
    fn settings_panel_follows_state() {
        let (mut shell, view, _) = shell_fixture(FULL_WIDTH);
        shell.init();

        assert!(shell.toggle_settings_panel());
        assert!(view.has_class("settings-panel", "show"));
        assert!(!shell.toggle_settings_panel());
        assert!(!view.has_class("settings-panel", "show"));
    }

    #[test]
    fn fullscreen_state_waits_for_notification() {
        let (view, viewport) = crate::test_utils::fake_environment(FULL_WIDTH);
        let fullscreen = Arc::new(FakeFullscreen::deferred());
        let mut shell = ShellController::new(
            &DashboardConfig::default(),
            view.clone(),
            viewport,
            fullscreen.clone(),
        );
        shell.init();

        shell.toggle_fullscreen();
        assert_eq!(fullscreen.requests(), 1);
        assert!(!shell.state().fullscreen);
        assert!(view.has_class("fullscreen-btn", "fa-expand"));

        shell.on_fullscreen_changed(true);
        assert!(shell.state().fullscreen);
        assert!(view.has_class("fullscreen-btn", "fa-compress"));
    }

    #[test]
    fn denied_fullscreen_is_swallowed() {
        let (view, viewport) = crate::test_utils::fake_environment(FULL_WIDTH);
        let fullscreen = Arc::new(FakeFullscreen::denying());
        let mut shell =
            ShellController::new(&DashboardConfig::default(), view.clone(), viewport, fullscreen);
        shell.init();

        shell.toggle_fullscreen();
        assert!(!shell.state().fullscreen);
        assert!(view.has_class("fullscreen-btn", "fa-expand"));
    }
}
