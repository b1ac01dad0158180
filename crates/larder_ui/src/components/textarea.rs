//! Textarea contract for multi-line text entry
//!
//! Shares the form-field chrome with Input and adds row sizing, optional
//! auto-resize, and a length cap.
//!
//! # Example
//!
//! ```ignore
//! use larder_ui::prelude::*;
//!
//! let notes = ui::textarea()
//!     .label("Notes")
//!     .placeholder("Add optional notes...")
//!     .rows(4)
//!     .build();
//!
//! let description = ui::textarea()
//!     .label("Description")
//!     .auto_resize()
//!     .max_length(500)
//!     .build();
//! ```

use larder_core::Handler;
use std::sync::Arc;

use super::field::{FieldProps, FieldSize, ValidationState};

/// Validated multi-line input contract.
#[derive(Clone)]
pub struct Textarea {
    field: FieldProps,
    rows: usize,
    auto_resize: bool,
    max_length: Option<usize>,
    placeholder: Option<String>,
    value: Option<String>,
    disabled: bool,
    on_change: Option<Handler<str>>,
}

impl std::fmt::Debug for Textarea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Textarea")
            .field("label", &self.field.label)
            .field("rows", &self.rows)
            .field("auto_resize", &self.auto_resize)
            .field("max_length", &self.max_length)
            .field("validation_state", &self.validation_state())
            .field("disabled", &self.disabled)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl Textarea {
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

    /// Number of visible text rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Whether the field grows with its content
    pub fn is_auto_resize(&self) -> bool {
        self.auto_resize
    }

    /// Maximum content length, if capped
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// The placeholder text
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// The current value
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the field rejects edits
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Report an edited value; suppressed when disabled.
    pub fn edit(&self, value: &str) -> bool {
        if self.disabled {
            tracing::debug!("edit suppressed on disabled textarea");
            return false;
        }
        if let Some(handler) = &self.on_change {
            handler(value);
        }
        true
    }
}

/// Fluent constructor for [`Textarea`]
pub struct TextareaBuilder {
    textarea: Textarea,
}

impl TextareaBuilder {
    /// Set the field label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.textarea.field.label = Some(label.into());
        self
    }

    /// Set the neutral help text
    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.textarea.field.help_text = Some(help_text.into());
        self
    }

    /// Set the error message; a non-empty message derives the error state
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.textarea.field.error = Some(error.into());
        self
    }

    /// Set the success message; a non-empty message derives the success state
    pub fn success(mut self, success: impl Into<String>) -> Self {
        self.textarea.field.success = Some(success.into());
        self
    }

    /// Pin the validation state, overriding the derived value
    pub fn validation_state(mut self, state: ValidationState) -> Self {
        self.textarea.field.validation_override = Some(state);
        self
    }

    /// Set the field size
    pub fn size(mut self, size: FieldSize) -> Self {
        self.textarea.field.size = size;
        self
    }

    /// Show the required marker on the label
    pub fn required(mut self) -> Self {
        self.textarea.field.required = true;
        self
    }

    /// Set the number of visible text rows
    pub fn rows(mut self, rows: usize) -> Self {
        self.textarea.rows = rows;
        self
    }

    /// Grow the field with its content
    pub fn auto_resize(mut self) -> Self {
        self.textarea.auto_resize = true;
        self
    }

    /// Cap the content length
    pub fn max_length(mut self, max: usize) -> Self {
        self.textarea.max_length = Some(max);
        self
    }

    /// Set the placeholder text
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.textarea.placeholder = Some(placeholder.into());
        self
    }

    /// Set the current value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.textarea.value = Some(value.into());
        self
    }

    /// Disable the field
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.textarea.disabled = disabled;
        self
    }

    /// Set the change handler; it receives the edited text
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.textarea.on_change = Some(Arc::new(handler));
        self
    }

    /// Finish the configuration
    pub fn build(self) -> Textarea {
        self.textarea
    }
}

/// Create a multi-line input
pub fn textarea() -> TextareaBuilder {
    TextareaBuilder {
        textarea: Textarea {
            field: FieldProps::default(),
            rows: 3,
            auto_resize: false,
            max_length: None,
            placeholder: None,
            value: None,
            disabled: false,
            on_change: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textarea_defaults() {
        let t = textarea().build();
        assert_eq!(t.rows(), 3);
        assert!(!t.is_auto_resize());
        assert_eq!(t.max_length(), None);
        assert_eq!(t.validation_state(), ValidationState::Default);
    }

    #[test]
    fn test_textarea_shares_field_derivation() {
        let t = textarea().success("Looks good").build();
        assert_eq!(t.validation_state(), ValidationState::Success);
    }

    #[test]
    fn test_textarea_rows_and_cap() {
        let t = textarea().rows(6).max_length(500).build();
        assert_eq!(t.rows(), 6);
        assert_eq!(t.max_length(), Some(500));
    }
}
