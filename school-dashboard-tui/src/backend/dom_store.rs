//! 元素仓库
//!
//! 终端版的“文档”：按元素 id 保存可见性、class、文本、禁用状态、表格内容和表单控件。
//! 实现 school-dashboard-core 的 ViewSurface trait，核心组件对它发出命令，
//! View 层在每一帧从它读取状态进行渲染。

use std::collections::{BTreeSet, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use school_dashboard_core::config::{FieldConfig, MenuEntryConfig};
use school_dashboard_core::types::{FieldKind, FormField, ModuleId, TableBody, ViewCommand};
use school_dashboard_core::{CoreResult, DashboardConfig, ViewSurface};

/// 单个元素的状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Element {
    hidden: bool,
    classes: BTreeSet<String>,
    text: Option<String>,
    disabled: bool,
    table: Option<TableBody>,
}

/// 表单控件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormControl {
    pub name: String,
    pub label: String,
    pub required: bool,
    pub value: FieldKind,
}

impl FormControl {
    fn from_config(field: &FieldConfig) -> Self {
        let value = if field.checkbox {
            FieldKind::Checkbox(false)
        } else {
            FieldKind::Text(String::new())
        };
        Self {
            name: field.name.clone(),
            label: field.label.clone(),
            required: field.required,
            value,
        }
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self.value, FieldKind::Checkbox(_))
    }

    fn to_field(&self) -> FormField {
        FormField {
            name: self.name.clone(),
            required: self.required,
            kind: self.value.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct Document {
    elements: HashMap<String, Element>,
    /// section id -> 控件（文档顺序）
    forms: HashMap<String, Vec<FormControl>>,
}

/// 基于内存的元素仓库
#[derive(Debug, Default)]
pub struct DomStore {
    document: RwLock<Document>,
}

impl DomStore {
    /// 创建只包含给定元素的空文档
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements = ids
            .into_iter()
            .map(|id| (id.into(), Element::default()))
            .collect();
        Self {
            document: RwLock::new(Document {
                elements,
                forms: HashMap::new(),
            }),
        }
    }

    /// 按配置构建某个页面的文档
    ///
    /// 外壳和侧边栏在每个页面都存在；面板只包含本页声明的模块。
    /// 录取向导只出现在声明了 `admission` 的页面，学生表格只出现在声明了
    /// `student-list` 的页面。
    pub fn for_page(config: &DashboardConfig, page: &str) -> CoreResult<Self> {
        let host = config.page(page)?;
        let shell = &config.shell;

        let mut ids = vec![
            shell.root.clone(),
            shell.sidebar.clone(),
            shell.content.clone(),
            shell.overlay.clone(),
            shell.menu_icon.clone(),
            shell.settings_panel.clone(),
            shell.theme_button.clone(),
            shell.fullscreen_icon.clone(),
        ];

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
                    ids.extend(links.iter().map(|link| link.id.clone()));
                }
            }
        }

        ids.extend(host.modules.iter().map(|module| module.panel_id()));

        let mut forms = HashMap::new();
        if host.declares(&ModuleId::from("admission")) {
            let wizard = &config.wizard;
            for step in &wizard.steps {
                ids.push(step.section.clone());
                ids.push(step.indicator.clone());
                forms.insert(
                    step.section.clone(),
                    step.fields.iter().map(FormControl::from_config).collect(),
                );
            }
            ids.push(wizard.prev_button.clone());
            ids.push(wizard.next_button.clone());
            ids.push(wizard.popup.clone());
            ids.push(wizard.error_label.clone());
        }

        if host.declares(&ModuleId::from("student-list")) {
            ids.push(config.student_list.table.clone());
        }

        let store = Self::new(ids);
        store.write().forms = forms;
        log::debug!(
            "Document for page '{page}' built with {} elements",
            store.read().elements.len()
        );
        Ok(store)
    }

    fn read(&self) -> RwLockReadGuard<'_, Document> {
        self.document.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Document> {
        self.document.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// 元素是否存在且可见
    pub fn is_visible(&self, id: &str) -> bool {
        self.read().elements.get(id).is_some_and(|e| !e.hidden)
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.read()
            .elements
            .get(id)
            .is_some_and(|e| e.classes.contains(class))
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.read().elements.get(id).and_then(|e| e.text.clone())
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        self.read().elements.get(id).is_some_and(|e| e.disabled)
    }

    pub fn table(&self, id: &str) -> Option<TableBody> {
        self.read().elements.get(id).and_then(|e| e.table.clone())
    }

    /// 某个 section 内的表单控件
    pub fn controls(&self, section: &str) -> Vec<FormControl> {
        self.read().forms.get(section).cloned().unwrap_or_default()
    }

    /// 向文本控件追加字符
    pub fn input(&self, section: &str, index: usize, c: char) -> bool {
        self.edit_control(section, index, |value| match value {
            FieldKind::Text(text) => {
                text.push(c);
                true
            }
            FieldKind::Checkbox(_) => false,
        })
    }

    /// 删除文本控件的最后一个字符
    pub fn backspace(&self, section: &str, index: usize) -> bool {
        self.edit_control(section, index, |value| match value {
            FieldKind::Text(text) => text.pop().is_some(),
            FieldKind::Checkbox(_) => false,
        })
    }

    /// 切换复选框
    pub fn toggle_checkbox(&self, section: &str, index: usize) -> bool {
        self.edit_control(section, index, |value| match value {
            FieldKind::Checkbox(checked) => {
                *checked = !*checked;
                true
            }
            FieldKind::Text(_) => false,
        })
    }

    fn edit_control(
        &self,
        section: &str,
        index: usize,
        edit: impl FnOnce(&mut FieldKind) -> bool,
    ) -> bool {
        let mut document = self.write();
        document
            .forms
            .get_mut(section)
            .and_then(|controls| controls.get_mut(index))
            .is_some_and(|control| edit(&mut control.value))
    }
}

impl ViewSurface for DomStore {
    fn contains(&self, id: &str) -> bool {
        self.read().elements.contains_key(id)
    }

    fn apply(&self, command: ViewCommand) {
        let mut document = self.write();
        let Some(element) = document.elements.get_mut(command.target()) else {
            // 与浏览器中查不到元素时一样，静默忽略
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
            ViewCommand::SetText { text, .. } => element.text = Some(text),
            ViewCommand::SetDisabled { disabled, .. } => element.disabled = disabled,
            ViewCommand::SetTable { body, .. } => element.table = Some(body),
        }
    }

    fn fields_in(&self, section_id: &str) -> Vec<FormField> {
        self.read()
            .forms
            .get(section_id)
            .map(|controls| controls.iter().map(FormControl::to_field).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_page() -> DomStore {
        DomStore::for_page(&DashboardConfig::default(), "student-management").unwrap()
    }

    #[test]
    fn test_home_page_has_no_wizard_or_table() {
        let store = DomStore::for_page(&DashboardConfig::default(), "home").unwrap();

        assert!(store.contains("dashboard-module"));
        assert!(store.contains("student-menu"));
        assert!(!store.contains("admission-module"));
        assert!(!store.contains("step-1"));
        assert!(!store.contains("student-table"));
    }

    #[test]
    fn test_unknown_page_is_rejected() {
        assert!(DomStore::for_page(&DashboardConfig::default(), "library").is_err());
    }

    #[test]
    fn test_commands_update_elements() {
        let store = student_page();

        store.apply(ViewCommand::visible("summary-module", false));
        store.apply(ViewCommand::class("sidebar", "collapsed", true));
        store.apply(ViewCommand::text("next-btn", "Submit"));
        store.apply(ViewCommand::disabled("prev-btn", true));

        assert!(!store.is_visible("summary-module"));
        assert!(store.is_visible("admission-module"));
        assert!(store.has_class("sidebar", "collapsed"));
        assert_eq!(store.text("next-btn").as_deref(), Some("Submit"));
        assert!(store.is_disabled("prev-btn"));

        store.apply(ViewCommand::class("sidebar", "collapsed", false));
        assert!(!store.has_class("sidebar", "collapsed"));
    }

    #[test]
    fn test_commands_for_absent_elements_are_ignored() {
        let store = DomStore::for_page(&DashboardConfig::default(), "home").unwrap();

        store.apply(ViewCommand::text("student-table", "nothing"));

        assert!(!store.contains("student-table"));
        assert_eq!(store.text("student-table"), None);
        assert!(!store.is_visible("student-table"));
    }

    #[test]
    fn test_form_editing_is_read_back() {
        let store = student_page();

        for c in "Jane".chars() {
            assert!(store.input("step-1", 0, c));
        }
        assert!(store.backspace("step-1", 0));
        assert!(!store.toggle_checkbox("step-1", 0));
        assert!(store.toggle_checkbox("step-4", 0));

        let fields = store.fields_in("step-1");
        assert_eq!(fields[0], FormField::text("first-name", true, "Jan"));
        assert_eq!(store.fields_in("step-4"), vec![FormField::checkbox("terms", true, true)]);
        assert!(store.fields_in("nowhere").is_empty());
    }

    #[test]
    fn test_edits_out_of_range_do_nothing() {
        let store = student_page();

        assert!(!store.input("step-1", 99, 'x'));
        assert!(!store.backspace("step-1", 0));
        assert!(!store.input("step-9", 0, 'x'));
    }
}
