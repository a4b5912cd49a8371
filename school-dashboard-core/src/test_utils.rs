//! Mock implementations and fixtures shared by unit and integration tests
//!
//! Compiled for unit tests and behind the `testing` feature.

#![allow(clippy::unwrap_used)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::config::{DashboardConfig, MenuEntryConfig, WizardConfig};
use crate::error::{CoreError, CoreResult};
use crate::services::{Dashboard, DashboardContext, ShellController};
use crate::traits::{
    FullscreenControl, InMemoryStudentProvider, Location, ProfileViewer, ViewSurface, Viewport,
};
use crate::types::{FormField, TableBody, ViewCommand};

pub const FULL_WIDTH: u32 = 1280;
pub const PHONE_WIDTH: u32 = 375;

// ===== FakeView =====

#[derive(Debug, Clone, Default)]
struct Element {
    hidden: bool,
    classes: HashSet<String>,
    text: String,
    disabled: bool,
    table: Option<TableBody>,
}

#[derive(Default)]
struct ViewState {
    elements: HashMap<String, Element>,
    fields: HashMap<String, Vec<FormField>>,
    commands: Vec<ViewCommand>,
}

/// Recording view surface; commands for unknown ids are dropped
#[derive(Default)]
pub struct FakeView {
    state: Mutex<ViewState>,
}

impl FakeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements(ids: &[&str]) -> Self {
        let view = Self::new();
        for id in ids {
            view.add_element(id);
        }
        view
    }

    pub fn add_element(&self, id: &str) {
        self.state
            .lock()
            .unwrap()
            .elements
            .entry(id.to_string())
            .or_default();
    }

    pub fn set_fields(&self, section: &str, fields: Vec<FormField>) {
        self.state
            .lock()
            .unwrap()
            .fields
            .insert(section.to_string(), fields);
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.state.lock().unwrap().elements.get(id).cloned()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.classes.contains(class))
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.element(id).is_some_and(|e| !e.hidden)
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        self.element(id).is_some_and(|e| e.disabled)
    }

    pub fn text(&self, id: &str) -> String {
        self.element(id).map(|e| e.text).unwrap_or_default()
    }

    pub fn table(&self, id: &str) -> Option<TableBody> {
        self.element(id).and_then(|e| e.table)
    }

    pub fn table_row_ids(&self, id: &str) -> Vec<String> {
        match self.table(id) {
            Some(TableBody::Rows(rows)) => rows
                .into_iter()
                .filter_map(|row| row.cells.into_iter().next())
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn text_of_table_message(&self, id: &str) -> Option<String> {
        match self.table(id) {
            Some(TableBody::Message(message)) => Some(message),
            _ => None,
        }
    }

    /// Visible elements whose id ends in `-module`, sorted
    pub fn visible_panels(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        let mut panels: Vec<String> = state
            .elements
            .iter()
            .filter(|(id, e)| id.ends_with("-module") && !e.hidden)
            .map(|(id, _)| id.clone())
            .collect();
        panels.sort();
        panels
    }

    pub fn command_count(&self) -> usize {
        self.state.lock().unwrap().commands.len()
    }
}

impl ViewSurface for FakeView {
    fn contains(&self, id: &str) -> bool {
        self.state.lock().unwrap().elements.contains_key(id)
    }

    fn apply(&self, command: ViewCommand) {
        let mut state = self.state.lock().unwrap();
        state.commands.push(command.clone());
        let Some(element) = state.elements.get_mut(command.target()) else {
            return;
        };
        match command {
            ViewCommand::SetVisible { visible, .. } => element.hidden = !visible,
            ViewCommand::SetClass { class, on, .. } => {
                if on {
                    element.classes.insert(class);
                } else {
                    element.classes.remove(&class);
                }
            }
            ViewCommand::SetText { text, .. } => element.text = text,
            ViewCommand::SetDisabled { disabled, .. } => element.disabled = disabled,
            ViewCommand::SetTable { body, .. } => element.table = Some(body),
        }
    }

    fn fields_in(&self, section_id: &str) -> Vec<FormField> {
        self.state
            .lock()
            .unwrap()
            .fields
            .get(section_id)
            .cloned()
            .unwrap_or_default()
    }
}

// ===== FakeLocation =====

/// In-memory history; `push_fragment` drops forward entries
pub struct FakeLocation {
    entries: Mutex<(Vec<String>, usize)>,
}

impl FakeLocation {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: Mutex::new((vec![initial.trim_start_matches('#').to_string()], 0)),
        }
    }

    /// Simulate an address bar edit
    pub fn set_external(&self, fragment: &str) {
        self.push_fragment(fragment);
    }

    pub fn history(&self) -> Vec<String> {
        self.entries.lock().unwrap().0.clone()
    }
}

impl Location for FakeLocation {
    fn fragment(&self) -> String {
        let entries = self.entries.lock().unwrap();
        entries.0[entries.1].clone()
    }

    fn push_fragment(&self, fragment: &str) {
        let mut entries = self.entries.lock().unwrap();
        let cursor = entries.1;
        entries.0.truncate(cursor + 1);
        entries.0.push(fragment.to_string());
        entries.1 = cursor + 1;
    }

    fn replace_fragment(&self, fragment: &str) {
        let mut entries = self.entries.lock().unwrap();
        let cursor = entries.1;
        entries.0[cursor] = fragment.to_string();
    }
}

// ===== FakeViewport =====

pub struct FakeViewport {
    width: AtomicU32,
}

impl FakeViewport {
    pub fn new(width: u32) -> Self {
        Self {
            width: AtomicU32::new(width),
        }
    }

    pub fn set_width(&self, width: u32) {
        self.width.store(width, Ordering::SeqCst);
    }
}

impl Viewport for FakeViewport {
    fn width(&self) -> u32 {
        self.width.load(Ordering::SeqCst)
    }
}

// ===== FakeFullscreen =====

/// Accepts or refuses requests without ever changing state itself
pub struct FakeFullscreen {
    deny: bool,
    requests: AtomicUsize,
}

impl FakeFullscreen {
    /// Accepts; the change arrives later as a notification
    pub fn deferred() -> Self {
        Self {
            deny: false,
            requests: AtomicUsize::new(0),
        }
    }

    pub fn denying() -> Self {
        Self {
            deny: true,
            requests: AtomicUsize::new(0),
        }
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl FullscreenControl for FakeFullscreen {
    fn is_fullscreen(&self) -> bool {
        false
    }

    fn request(&self) -> CoreResult<()> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.deny {
            return Err(CoreError::FullscreenDenied("no user gesture".to_string()));
        }
        Ok(())
    }

    fn exit(&self) -> CoreResult<()> {
        Ok(())
    }
}

// ===== FakeProfileViewer =====

#[derive(Default)]
pub struct FakeProfileViewer {
    opened: Mutex<Vec<String>>,
}

impl FakeProfileViewer {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl ProfileViewer for FakeProfileViewer {
    fn open_profile(&self, student_id: &str) {
        self.opened.lock().unwrap().push(student_id.to_string());
    }
}

// ===== Fixtures =====

fn shell_element_ids(config: &DashboardConfig) -> Vec<String> {
    let e = &config.shell;
    vec![
        e.root.clone(),
        e.sidebar.clone(),
        e.content.clone(),
        e.overlay.clone(),
        e.menu_icon.clone(),
        e.settings_panel.clone(),
        e.theme_button.clone(),
        e.fullscreen_icon.clone(),
    ]
}

fn menu_element_ids(config: &DashboardConfig) -> Vec<String> {
    let mut ids = Vec::new();
    for entry in &config.menu {
        match entry {
            MenuEntryConfig::Leaf { id, .. } => ids.push(id.clone()),
            MenuEntryConfig::Group {
                header,
                chevron,
                submenu,
                links,
                ..
            } => {
                ids.push(header.clone());
                ids.extend(chevron.clone());
                ids.push(submenu.clone());
                ids.extend(links.iter().map(|l| l.id.clone()));
            }
        }
    }
    ids
}

fn wizard_element_ids(config: &WizardConfig) -> Vec<String> {
    let mut ids: Vec<String> = config
        .steps
        .iter()
        .flat_map(|s| [s.section.clone(), s.indicator.clone()])
        .collect();
    ids.extend([
        config.prev_button.clone(),
        config.next_button.clone(),
        config.popup.clone(),
        config.error_label.clone(),
    ]);
    ids
}

/// Empty controls for every wizard field, as a freshly loaded page has them
pub fn seed_wizard_fields(view: &FakeView, config: &WizardConfig) {
    for step in &config.steps {
        let fields = step
            .fields
            .iter()
            .map(|field| {
                if field.checkbox {
                    FormField::checkbox(&field.name, field.required, false)
                } else {
                    FormField::text(&field.name, field.required, "")
                }
            })
            .collect();
        view.set_fields(&step.section, fields);
    }
}

/// View holding only the wizard anchors
pub fn wizard_view(config: &WizardConfig) -> FakeView {
    let view = FakeView::new();
    for id in wizard_element_ids(config) {
        view.add_element(&id);
    }
    view
}

/// View with the shell anchors of the default config, plus a viewport
pub fn fake_environment(width: u32) -> (Arc<FakeView>, Arc<FakeViewport>) {
    let view = FakeView::new();
    for id in shell_element_ids(&DashboardConfig::default()) {
        view.add_element(&id);
    }
    (Arc::new(view), Arc::new(FakeViewport::new(width)))
}

pub fn shell_fixture(width: u32) -> (ShellController, Arc<FakeView>, Arc<FakeViewport>) {
    let (view, viewport) = fake_environment(width);
    let shell = ShellController::new(
        &DashboardConfig::default(),
        view.clone(),
        viewport.clone(),
        Arc::new(FakeFullscreen::deferred()),
    );
    (shell, view, viewport)
}

/// Element ids a host page built from `config` would carry
fn page_element_ids(config: &DashboardConfig, page: &str) -> Vec<String> {
    let mut ids = shell_element_ids(config);
    ids.extend(menu_element_ids(config));
    if let Ok(host) = config.page(page) {
        ids.extend(host.modules.iter().map(|m| m.panel_id()));
        if host.declares(&"admission".into()) {
            ids.extend(wizard_element_ids(&config.wizard));
        }
        if host.declares(&"student-list".into()) {
            ids.push(config.student_list.table.clone());
        }
    }
    ids
}

/// Shell over a view holding every anchor of `page`
pub fn page_fixture(
    config: &DashboardConfig,
    page: &str,
    width: u32,
) -> (ShellController, Arc<FakeView>) {
    let view = Arc::new(FakeView::new());
    for id in page_element_ids(config, page) {
        view.add_element(&id);
    }
    let shell = ShellController::new(
        config,
        view.clone(),
        Arc::new(FakeViewport::new(width)),
        Arc::new(FakeFullscreen::deferred()),
    );
    (shell, view)
}

/// All fakes of one dashboard instance
pub struct TestHost {
    pub view: Arc<FakeView>,
    pub location: Arc<FakeLocation>,
    pub viewport: Arc<FakeViewport>,
    pub fullscreen: Arc<FakeFullscreen>,
    pub viewer: Arc<FakeProfileViewer>,
}

impl TestHost {
    pub fn new(width: u32, elements: &[String]) -> Self {
        Self::at(width, elements, "")
    }

    /// Host whose location starts at `fragment`
    pub fn at(width: u32, elements: &[String], fragment: &str) -> Self {
        let view = FakeView::new();
        for id in elements {
            view.add_element(id);
        }
        Self {
            view: Arc::new(view),
            location: Arc::new(FakeLocation::new(fragment)),
            viewport: Arc::new(FakeViewport::new(width)),
            fullscreen: Arc::new(FakeFullscreen::deferred()),
            viewer: Arc::new(FakeProfileViewer::default()),
        }
    }

    pub fn context(&self) -> DashboardContext {
        DashboardContext::new(
            self.view.clone(),
            self.location.clone(),
            self.viewport.clone(),
            self.fullscreen.clone(),
            Arc::new(InMemoryStudentProvider::sample()),
            self.viewer.clone(),
        )
    }
}

pub fn dashboard_with_config(
    config: &DashboardConfig,
    page: &str,
    width: u32,
) -> (Dashboard, TestHost) {
    dashboard_at(config, page, width, "")
}

/// Dashboard over a freshly loaded `page` whose location holds `fragment`
pub fn dashboard_at(
    config: &DashboardConfig,
    page: &str,
    width: u32,
    fragment: &str,
) -> (Dashboard, TestHost) {
    let host = TestHost::at(width, &page_element_ids(config, page), fragment);
    if config
        .page(page)
        .is_ok_and(|p| p.declares(&"admission".into()))
    {
        seed_wizard_fields(&host.view, &config.wizard);
    }
    let dashboard = Dashboard::new(host.context(), config, page).unwrap();
    (dashboard, host)
}

pub fn dashboard_fixture(page: &str, width: u32) -> (Dashboard, TestHost) {
    dashboard_with_config(&DashboardConfig::default(), page, width)
}

/// Default-config dashboard, already started
pub fn started_dashboard(page: &str, width: u32, fragment: &str) -> (Dashboard, TestHost) {
    let (mut dashboard, host) = dashboard_at(&DashboardConfig::default(), page, width, fragment);
    dashboard.start();
    (dashboard, host)
}

/// Fill every required admission field
pub fn fill_admission_form(view: &FakeView) {
    view.set_fields(
        "step-1",
        vec![
            FormField::text("first-name", true, "Jane"),
            FormField::text("last-name", true, "Doe"),
            FormField::text("date-of-birth", true, "2010-04-02"),
        ],
    );
    view.set_fields(
        "step-2",
        vec![
            FormField::text("guardian-name", true, "Sarah Doe"),
            FormField::text("guardian-phone", true, "555-0100"),
        ],
    );
    view.set_fields("step-3", vec![FormField::text("grade-applying", true, "grade-10")]);
    view.set_fields("step-4", vec![FormField::checkbox("terms", true, true)]);
}
