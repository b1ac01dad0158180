//! Shared form-field chrome
//!
//! Input, Textarea, and Select all carry the same surrounding chrome: a
//! label, help text, error/success messages, a size, and a required marker.
//! The validation state shown next to the field is derived from the
//! messages unless the caller pins it explicitly.

use serde::{Deserialize, Serialize};

/// Visual validation state of a form field.
///
/// Purely a visual indicator; it never gates submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationState {
    /// Normal state
    #[default]
    Default,
    /// Valid input
    Success,
    /// Invalid input
    Error,
}

/// Form field size variants, shared by the whole input family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldSize {
    /// Small field
    #[serde(rename = "sm")]
    Small,
    /// Default size
    #[default]
    #[serde(rename = "md")]
    Medium,
    /// Large field
    #[serde(rename = "lg")]
    Large,
}

/// Chrome shared by Input, Textarea, and Select.
#[derive(Clone, Default)]
pub(crate) struct FieldProps {
    pub(crate) label: Option<String>,
    pub(crate) help_text: Option<String>,
    pub(crate) error: Option<String>,
    pub(crate) success: Option<String>,
    /// Explicit override; when unset the state derives from the messages.
    pub(crate) validation_override: Option<ValidationState>,
    pub(crate) size: FieldSize,
    pub(crate) required: bool,
}

impl FieldProps {
    /// Resolve the validation state.
    ///
    /// An explicit override wins. Otherwise a non-empty error message means
    /// `Error`, a non-empty success message means `Success` (error takes
    /// precedence when both are set), and no messages mean `Default`.
    pub(crate) fn validation_state(&self) -> ValidationState {
        if let Some(state) = self.validation_override {
            return state;
        }
        if self.error.as_deref().is_some_and(|msg| !msg.is_empty()) {
            ValidationState::Error
        } else if self.success.as_deref().is_some_and(|msg| !msg.is_empty()) {
            ValidationState::Success
        } else {
            ValidationState::Default
        }
    }
}
