//! Admission step wizard

use std::sync::Arc;

use crate::config::WizardConfig;
use crate::error::{CoreError, CoreResult};
use crate::traits::ViewSurface;
use crate::types::ViewCommand;

/// Result of [`StepWizard::next`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardTransition {
    /// Moved forward; carries the new zero-based step index
    Advanced { step: usize },
    /// The last step was valid and the confirmation popup is shown
    Submitted,
    /// The popup is already open
    Unchanged,
}

#[derive(Debug, Clone)]
struct Step {
    section: String,
    indicator: Option<String>,
}

/// Linear, step-gated form flow
///
/// `current_step` stays within `0..total_steps()`; transitions move it by one
/// or jump back to zero on reset.
pub struct StepWizard {
    steps: Vec<Step>,
    prev_button: String,
    next_button: String,
    popup: String,
    error_label: Option<String>,
    current: usize,
    popup_open: bool,
    view: Arc<dyn ViewSurface>,
}

impl StepWizard {
    /// Bind to the wizard anchors on the view
    ///
    /// Returns `None` unless every step section, both buttons and the popup exist.
    /// Indicators and the error label are optional.
    pub fn attach(config: &WizardConfig, view: Arc<dyn ViewSurface>) -> Option<Self> {
        if config.steps.is_empty() {
            return None;
        }

        if let Err(err) = require_anchors(config, view.as_ref()) {
            log::debug!("{err}, wizard disabled on this page");
            return None;
        }

        let steps = config
            .steps
            .iter()
            .map(|s| Step {
                section: s.section.clone(),
                indicator: Some(s.indicator.clone()).filter(|i| view.contains(i)),
            })
            .collect();
        let error_label = Some(config.error_label.clone()).filter(|id| view.contains(id));

        Some(Self {
            steps,
            prev_button: config.prev_button.clone(),
            next_button: config.next_button.clone(),
            popup: config.popup.clone(),
            error_label,
            current: 0,
            popup_open: false,
            view,
        })
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn popup_open(&self) -> bool {
        self.popup_open
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    /// Names of the required fields of step `index` that are blank or unchecked
    ///
    /// Only controls inside that step's section are read.
    pub fn validate_step(&self, index: usize) -> Vec<String> {
        let Some(step) = self.steps.get(index) else {
            return Vec::new();
        };
        self.view
            .fields_in(&step.section)
            .into_iter()
            .filter(|field| !field.is_satisfied())
            .map(|field| field.name)
            .collect()
    }

    /// Validate the current step, then advance or submit
    ///
    /// An incomplete step is reported as [`CoreError::StepIncomplete`] and shown
    /// on the error label; the step index does not change.
    pub fn next(&mut self) -> CoreResult<WizardTransition> {
        if self.popup_open {
            return Ok(WizardTransition::Unchanged);
        }

        let missing = self.validate_step(self.current);
        if !missing.is_empty() {
            let err = CoreError::StepIncomplete {
                step: self.current + 1,
                missing,
            };
            log::warn!("{err}");
            if let Some(label) = &self.error_label {
                self.view.apply(ViewCommand::text(label, err.to_string()));
            }
            return Err(err);
        }

        if self.is_last_step() {
            self.popup_open = true;
            self.sync_popup();
            log::info!("Admission submitted");
            return Ok(WizardTransition::Submitted);
        }

        self.current += 1;
        self.sync_view();
        log::debug!("Wizard advanced to step {}", self.current + 1);
        Ok(WizardTransition::Advanced { step: self.current })
    }

    /// Go back one step. Returns `false` on the first step.
    pub fn prev(&mut self) -> bool {
        if self.current == 0 || self.popup_open {
            return false;
        }
        self.current -= 1;
        self.sync_view();
        log::debug!("Wizard back to step {}", self.current + 1);
        true
    }

    /// Hide the confirmation popup and start over
    pub fn close_popup(&mut self) {
        self.reset();
    }

    /// Back to the first step with the popup hidden
    pub fn reset(&mut self) {
        self.current = 0;
        self.popup_open = false;
        self.sync_popup();
        self.sync_view();
        log::debug!("Wizard reset");
    }

    /// Render sections, indicators and buttons for the current step
    pub fn sync_view(&self) {
        let mut commands = Vec::with_capacity(self.steps.len() * 4 + 3);

        for (i, step) in self.steps.iter().enumerate() {
            let active = i == self.current;
            commands.push(ViewCommand::visible(&step.section, active));
            commands.push(ViewCommand::class(&step.section, "active", active));
            if let Some(indicator) = &step.indicator {
                commands.push(ViewCommand::class(indicator, "active", active));
                commands.push(ViewCommand::class(indicator, "completed", i < self.current));
            }
        }

        commands.push(ViewCommand::disabled(&self.prev_button, self.current == 0));
        commands.push(ViewCommand::text(
            &self.next_button,
            if self.is_last_step() { "Submit" } else { "Next" },
        ));
        if let Some(label) = &self.error_label {
            commands.push(ViewCommand::text(label, ""));
        }

        self.view.apply_all(commands);
    }

    fn sync_popup(&self) {
        self.view.apply_all(vec![
            ViewCommand::visible(&self.popup, self.popup_open),
            ViewCommand::class(&self.popup, "show", self.popup_open),
        ]);
    }
}

/// Every step section, both buttons and the popup must be on the view
fn require_anchors(config: &WizardConfig, view: &dyn ViewSurface) -> CoreResult<()> {
    let required = config
        .steps
        .iter()
        .map(|s| s.section.as_str())
        .chain([
            config.prev_button.as_str(),
            config.next_button.as_str(),
            config.popup.as_str(),
        ]);
    for id in required {
        if !view.contains(id) {
            return Err(CoreError::MissingElement(id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{wizard_view, FakeView};
    use crate::types::FormField;

    fn wizard() -> (StepWizard, Arc<FakeView>) {
        let config = WizardConfig::default();
        let view = Arc::new(wizard_view(&config));
        let wizard = StepWizard::attach(&config, view.clone()).unwrap();
        wizard.sync_view();
        (wizard, view)
    }

    fn fill_step_one(view: &FakeView) {
        view.set_fields(
            "step-1",
            vec![
                FormField::text("first-name", true, "Jane"),
                FormField::text("last-name", true, "Doe"),
                FormField::text("date-of-birth", true, "2010-04-02"),
                FormField::text("gender", false, ""),
            ],
        );
    }

    fn fill_all(view: &FakeView) {
        fill_step_one(view);
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

    #[test]
    fn initial_view_disables_prev() {
        let (wizard, view) = wizard();
        assert_eq!(wizard.current_step(), 0);
        assert!(view.is_disabled("prev-btn"));
        assert_eq!(view.text("next-btn"), "Next");
        assert!(view.is_visible("step-1"));
        assert!(!view.is_visible("step-2"));
        assert!(view.has_class("step-indicator-1", "active"));
    }

    #[test]
    fn incomplete_step_blocks_and_reports() {
        let (mut wizard, view) = wizard();
        view.set_fields(
            "step-1",
            vec![
                FormField::text("first-name", true, "Jane"),
                FormField::text("last-name", true, "   "),
                FormField::text("date-of-birth", true, ""),
            ],
        );

        let err = wizard.next().unwrap_err();
        assert_eq!(
            err,
            CoreError::StepIncomplete {
                step: 1,
                missing: vec!["last-name".to_string(), "date-of-birth".to_string()],
            }
        );
        assert_eq!(wizard.current_step(), 0);
        assert!(view.text("wizard-error").contains("last-name"));
    }

    #[test]
    fn fields_of_other_steps_are_ignored() {
        let (mut wizard, view) = wizard();
        fill_step_one(&view);
        view.set_fields("step-2", vec![FormField::text("guardian-name", true, "")]);

        assert_eq!(wizard.next().unwrap(), WizardTransition::Advanced { step: 1 });
    }

    #[test]
    fn advancing_marks_earlier_indicators_completed() {
        let (mut wizard, view) = wizard();
        fill_all(&view);

        wizard.next().unwrap();
        wizard.next().unwrap();
        assert_eq!(wizard.current_step(), 2);
        assert!(view.has_class("step-indicator-1", "completed"));
        assert!(view.has_class("step-indicator-2", "completed"));
        assert!(!view.has_class("step-indicator-3", "completed"));
        assert!(view.has_class("step-indicator-3", "active"));
        assert!(!view.is_disabled("prev-btn"));
        assert_eq!(view.text("wizard-error"), "");
    }

    #[test]
    fn last_step_offers_submit_and_opens_popup() {
        let (mut wizard, view) = wizard();
        fill_all(&view);

        for _ in 0..3 {
            wizard.next().unwrap();
        }
        assert!(wizard.is_last_step());
        assert_eq!(view.text("next-btn"), "Submit");

        assert_eq!(wizard.next().unwrap(), WizardTransition::Submitted);
        assert!(wizard.popup_open());
        assert!(view.has_class("admission-popup", "show"));
        assert_eq!(wizard.current_step(), 3);

        assert_eq!(wizard.next().unwrap(), WizardTransition::Unchanged);
    }

    #[test]
    fn unchecked_terms_block_submit() {
        let (mut wizard, view) = wizard();
        fill_all(&view);
        view.set_fields("step-4", vec![FormField::checkbox("terms", true, false)]);

        for _ in 0..3 {
            wizard.next().unwrap();
        }
        assert!(wizard.next().is_err());
        assert!(!wizard.popup_open());
    }

    #[test]
    fn prev_at_first_step_is_a_no_op() {
        let (mut wizard, _) = wizard();
        assert!(!wizard.prev());
        assert_eq!(wizard.current_step(), 0);
    }

    #[test]
    fn prev_needs_no_validation() {
        let (mut wizard, view) = wizard();
        fill_step_one(&view);
        wizard.next().unwrap();
        view.set_fields("step-1", vec![FormField::text("first-name", true, "")]);

        assert!(wizard.prev());
        assert_eq!(wizard.current_step(), 0);
        assert!(view.is_disabled("prev-btn"));
    }

    #[test]
    fn closing_popup_resets_to_first_step() {
        let (mut wizard, view) = wizard();
        fill_all(&view);
        for _ in 0..4 {
            wizard.next().unwrap();
        }

        wizard.close_popup();
        assert_eq!(wizard.current_step(), 0);
        assert!(!wizard.popup_open());
        assert!(!view.has_class("admission-popup", "show"));
        assert!(view.is_visible("step-1"));
        assert_eq!(view.text("next-btn"), "Next");
    }

    #[test]
    fn missing_anchor_disables_wizard() {
        let config = WizardConfig::default();
        let view = Arc::new(FakeView::with_elements(&[
            "step-1", "step-2", "step-3", "step-4", "prev-btn", "next-btn",
        ]));
        assert_eq!(
            require_anchors(&config, view.as_ref()),
            Err(CoreError::MissingElement("admission-popup".to_string()))
        );
        assert!(StepWizard::attach(&config, view).is_none());
    }

    #[test]
    fn missing_indicators_are_tolerated() {
        let config = WizardConfig::default();
        let view = Arc::new(FakeView::with_elements(&[
            "step-1",
            "step-2",
            "step-3",
            "step-4",
            "prev-btn",
            "next-btn",
            "admission-popup",
        ]));
        let wizard = StepWizard::attach(&config, view.clone()).unwrap();
        wizard.sync_view();
        assert!(!view.has_class("step-indicator-1", "active"));
        assert_eq!(wizard.total_steps(), 4);
    }
}
