//! Input contract for single-line text entry
//!
//! Form input with label, help text, and validation messages. The visual
//! validation state derives from the messages unless pinned explicitly.
//!
//! # Example
//!
//! ```ignore
//! use larder_ui::prelude::*;
//!
//! let name = ui::input()
//!     .label("Item Name")
//!     .placeholder("Enter item name")
//!     .required()
//!     .on_change(|value: &str| println!("name: {value}"))
//!     .build();
//!
//! let quantity = ui::input()
//!     .input_type(InputType::Number)
//!     .label("Quantity")
//!     .help_text("Minimum quantity is 1")
//!     .error("Required field")
//!     .build();
//! assert_eq!(quantity.validation_state(), ValidationState::Error);
//! ```

use larder_core::{Handler, NodeHandle};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::field::{FieldProps, FieldSize, ValidationState};

/// Input content types
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Plain text
    #[default]
    Text,
    /// Numeric entry
    Number,
    /// Email address
    Email,
    /// Masked password entry
    Password,
    /// Telephone number
    Tel,
    /// URL entry
    Url,
}

/// Validated single-line input contract.
#[derive(Clone)]
pub struct Input {
    field: FieldProps,
    input_type: InputType,
    placeholder: Option<String>,
    value: Option<String>,
    left_icon: Option<NodeHandle>,
    right_icon: Option<NodeHandle>,
    disabled: bool,
    on_change: Option<Handler<str>>,
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Input")
            .field("label", &self.field.label)
            .field("input_type", &self.input_type)
            .field("value", &self.value)
            .field("validation_state", &self.validation_state())
            .field("disabled", &self.disabled)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl Input {
    /// The field label
    pub fn label(&self) -> Option<&str> {
        self.field.label.as_deref()
    }

    /// Neutral help text shown below the field
    pub fn help_text(&self) -> Option<&str> {
        self.field.help_text.as_deref()
    }

    /// The error message, if any
    pub fn error(&self) -> Option<&str> {
        self.field.error.as_deref()
    }

    /// The success message, if any
    pub fn success(&self) -> Option<&str> {
        self.field.success.as_deref()
    }

    /// The resolved visual validation state
    pub fn validation_state(&self) -> ValidationState {
        self.field.validation_state()
    }

    /// The field size
    pub fn size(&self) -> FieldSize {
        self.field.size
    }

    /// Whether the field shows a required marker
    pub fn is_required(&self) -> bool {
        self.field.required
    }

    /// The content type
    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    /// The placeholder text
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// The current value
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Icon inside the field, left side
    pub fn left_icon(&self) -> Option<NodeHandle> {
        self.left_icon
    }

    /// Icon inside the field, right side
    pub fn right_icon(&self) -> Option<NodeHandle> {
        self.right_icon
    }

    /// Whether the field rejects edits
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Report an edited value.
    ///
    /// Invokes the change handler and returns true unless the field is
    /// disabled.
    pub fn edit(&self, value: &str) -> bool {
        if self.disabled {
            tracing::debug!("edit suppressed on disabled input");
            return false;
        }
        if let Some(handler) = &self.on_change {
            handler(value);
        }
        true
    }
}

/// Fluent constructor for [`Input`]
pub struct InputBuilder {
    input: Input,
}

impl InputBuilder {
    /// Set the field label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.input.field.label = Some(label.into());
        self
    }

    /// Set the neutral help text
    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.input.field.help_text = Some(help_text.into());
        self
    }

    /// Set the error message; a non-empty message derives the error state
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.input.field.error = Some(error.into());
        self
    }

    /// Set the success message; a non-empty message derives the success state
    pub fn success(mut self, success: impl Into<String>) -> Self {
        self.input.field.success = Some(success.into());
        self
    }

    /// Pin the validation state, overriding the derived value
    pub fn validation_state(mut self, state: ValidationState) -> Self {
        self.input.field.validation_override = Some(state);
        self
    }

    /// Set the field size
    pub fn size(mut self, size: FieldSize) -> Self {
        self.input.field.size = size;
        self
    }

    /// Show the required marker on the label
    pub fn required(mut self) -> Self {
        self.input.field.required = true;
        self
    }

    /// Set the content type
    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input.input_type = input_type;
        self
    }

    /// Set the placeholder text
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.input.placeholder = Some(placeholder.into());
        self
    }

    /// Set the current value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.input.value = Some(value.into());
        self
    }

    /// Set the icon inside the field, left side
    pub fn left_icon(mut self, icon: NodeHandle) -> Self {
        self.input.left_icon = Some(icon);
        self
    }

    /// Set the icon inside the field, right side
    pub fn right_icon(mut self, icon: NodeHandle) -> Self {
        self.input.right_icon = Some(icon);
        self
    }

    /// Disable the field
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.input.disabled = disabled;
        self
    }

    /// Set the change handler; it receives the edited text
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.input.on_change = Some(Arc::new(handler));
        self
    }

    /// Finish the configuration
    pub fn build(self) -> Input {
        self.input
    }
}

/// Create a single-line input
pub fn input() -> InputBuilder {
    InputBuilder {
        input: Input {
            field: FieldProps::default(),
            input_type: InputType::default(),
            placeholder: None,
            value: None,
            left_icon: None,
            right_icon: None,
            disabled: false,
            on_change: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_input_defaults() {
        let i = input().build();
        assert_eq!(i.input_type(), InputType::Text);
        assert_eq!(i.size(), FieldSize::Medium);
        assert_eq!(i.validation_state(), ValidationState::Default);
        assert!(!i.is_required());
    }

    #[test]
    fn test_error_message_derives_error_state() {
        let i = input().error("Required field").build();
        assert_eq!(i.validation_state(), ValidationState::Error);
    }

    #[test]
    fn test_error_beats_success() {
        let i = input().error("bad").success("good").build();
        assert_eq!(i.validation_state(), ValidationState::Error);
    }

    #[test]
    fn test_explicit_state_overrides_messages() {
        let i = input()
            .error("bad")
            .validation_state(ValidationState::Default)
            .build();
        assert_eq!(i.validation_state(), ValidationState::Default);
    }

    #[test]
    fn test_edit_reports_value() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let i = input()
            .on_change(move |value: &str| {
                sink.lock().unwrap().push(value.to_string());
            })
            .build();
        assert!(i.edit("milk"));
        assert_eq!(seen.lock().unwrap().as_slice(), ["milk"]);
    }

    #[test]
    fn test_disabled_input_suppresses_edit() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let i = input()
            .disabled(true)
            .on_change(move |value: &str| {
                sink.lock().unwrap().push(value.to_string());
            })
            .build();
        assert!(!i.edit("milk"));
        assert!(seen.lock().unwrap().is_empty());
    }
}
