//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A wizard step still has required fields that are empty or unchecked
    #[error("Step {step} is incomplete: please fill out all required fields ({})", missing.join(", "))]
    StepIncomplete { step: usize, missing: Vec<String> },

    /// Module not declared on the current host page
    #[error("Module not found: {0}")]
    UnknownModule(String),

    /// The host cannot enter fullscreen at all
    #[error("Fullscreen is not available")]
    FullscreenUnavailable,

    /// The host refused a fullscreen request
    #[error("Fullscreen request denied: {0}")]
    FullscreenDenied(String),

    /// A view element a component depends on is absent
    #[error("View element not found: {0}")]
    MissingElement(String),

    /// Configuration is inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, missing anchors, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::StepIncomplete { .. }
            | Self::UnknownModule(_)
            | Self::FullscreenUnavailable
            | Self::FullscreenDenied(_)
            | Self::MissingElement(_) => true,
            Self::InvalidConfig(_) | Self::SerializationError(_) => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_incomplete_lists_missing_fields() {
        let err = CoreError::StepIncomplete {
            step: 1,
            missing: vec!["first-name".to_string(), "terms".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Step 1 is incomplete: please fill out all required fields (first-name, terms)"
        );
        assert!(err.is_expected());
    }

    #[test]
    fn config_errors_are_not_expected() {
        assert!(!CoreError::InvalidConfig("no pages".to_string()).is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::UnknownModule("fees".to_string())).unwrap();
        assert_eq!(json["code"], "UnknownModule");
        assert_eq!(json["details"], "fees");
    }
}
