//! Select contract for dropdown selection
//!
//! A typed dropdown: options carry a value of the caller's choosing and the
//! change handler receives that value, not a rendering event. Shares the
//! form-field chrome with Input.
//!
//! # Example
//!
//! ```ignore
//! use larder_ui::prelude::*;
//!
//! let location = ui::select()
//!     .label("Storage Location")
//!     .placeholder("Select location...")
//!     .option(SelectOption::new("pantry", "Pantry"))
//!     .option(SelectOption::new("fridge", "Fridge"))
//!     .option(SelectOption::new("freezer", "Freezer").disabled())
//!     .on_change(|value: &&str| println!("stored in {value}"))
//!     .build();
//!
//! location.choose(&"pantry"); // handler runs
//! location.choose(&"freezer"); // disabled, handler does not run
//! ```

use larder_core::Handler;
use std::sync::Arc;

use super::field::{FieldProps, FieldSize, ValidationState};

/// An option in the select dropdown.
///
/// Label and value are both required. Value uniqueness is not enforced;
/// with duplicate values the first matching option wins.
#[derive(Clone, Debug)]
pub struct SelectOption<T> {
    /// The typed value handed to the change handler when selected
    pub value: T,
    /// The display label
    pub label: String,
    /// Whether this option can be chosen
    pub disabled: bool,
}

impl<T> SelectOption<T> {
    /// Create an option with its value and display label
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            disabled: false,
        }
    }

    /// Mark this option as disabled
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Validated select contract.
#[derive(Clone)]
pub struct Select<T> {
    field: FieldProps,
    options: Vec<SelectOption<T>>,
    placeholder: Option<String>,
    value: Option<T>,
    disabled: bool,
    on_change: Option<Handler<T>>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Select<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Select")
            .field("label", &self.field.label)
            .field("options", &self.options)
            .field("value", &self.value)
            .field("validation_state", &self.validation_state())
            .field("disabled", &self.disabled)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl<T> Select<T> {
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

    /// The configured options, in order
    pub fn options(&self) -> &[SelectOption<T>] {
        &self.options
    }

    /// Placeholder shown while nothing is selected
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// The currently selected value
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Whether the whole field rejects selection
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl<T: PartialEq> Select<T> {
    /// Choose an option by value.
    ///
    /// Invokes the change handler with the option's value and returns true.
    /// Unknown values, disabled options, and a disabled field are rejected
    /// without invoking the handler.
    pub fn choose(&self, value: &T) -> bool {
        if self.disabled {
            tracing::debug!("choose suppressed on disabled select");
            return false;
        }
        let Some(option) = self.options.iter().find(|opt| &opt.value == value) else {
            tracing::debug!("choose rejected: value is not one of the options");
            return false;
        };
        if option.disabled {
            tracing::debug!(label = %option.label, "choose rejected: option is disabled");
            return false;
        }
        if let Some(handler) = &self.on_change {
            handler(&option.value);
        }
        true
    }
}

/// Fluent constructor for [`Select`]
pub struct SelectBuilder<T> {
    select: Select<T>,
}

impl<T> SelectBuilder<T> {
    /// Set the field label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.select.field.label = Some(label.into());
        self
    }

    /// Set the neutral help text
    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.select.field.help_text = Some(help_text.into());
        self
    }

    /// Set the error message; a non-empty message derives the error state
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.select.field.error = Some(error.into());
        self
    }

    /// Set the success message; a non-empty message derives the success state
    pub fn success(mut self, success: impl Into<String>) -> Self {
        self.select.field.success = Some(success.into());
        self
    }

    /// Pin the validation state, overriding the derived value
    pub fn validation_state(mut self, state: ValidationState) -> Self {
        self.select.field.validation_override = Some(state);
        self
    }

    /// Set the field size
    pub fn size(mut self, size: FieldSize) -> Self {
        self.select.field.size = size;
        self
    }

    /// Show the required marker on the label
    pub fn required(mut self) -> Self {
        self.select.field.required = true;
        self
    }

    /// Append an option
    pub fn option(mut self, option: SelectOption<T>) -> Self {
        self.select.options.push(option);
        self
    }

    /// Replace the options with an ordered set
    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption<T>>) -> Self {
        self.select.options = options.into_iter().collect();
        self
    }

    /// Set the placeholder shown while nothing is selected
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.select.placeholder = Some(placeholder.into());
        self
    }

    /// Set the selected value
    pub fn value(mut self, value: T) -> Self {
        self.select.value = Some(value);
        self
    }

    /// Disable the whole field
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.select.disabled = disabled;
        self
    }

    /// Set the change handler; it receives the chosen option's value
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.select.on_change = Some(Arc::new(handler));
        self
    }

    /// Finish the configuration
    pub fn build(self) -> Select<T> {
        self.select
    }
}

/// Create a select field
pub fn select<T>() -> SelectBuilder<T> {
    SelectBuilder {
        select: Select {
            field: FieldProps::default(),
            options: Vec::new(),
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
    use std::sync::Mutex;

    fn locations() -> SelectBuilder<&'static str> {
        select()
            .option(SelectOption::new("pantry", "Pantry"))
            .option(SelectOption::new("fridge", "Fridge"))
            .option(SelectOption::new("freezer", "Freezer").disabled())
    }

    #[test]
    fn test_choose_invokes_handler_with_value() {
        let chosen = Arc::new(Mutex::new(Vec::new()));
        let sink = chosen.clone();
        let s = locations()
            .on_change(move |value: &&str| {
                sink.lock().unwrap().push(*value);
            })
            .build();
        assert!(s.choose(&"fridge"));
        assert_eq!(chosen.lock().unwrap().as_slice(), ["fridge"]);
    }

    #[test]
    fn test_choose_rejects_unknown_value() {
        let chosen = Arc::new(Mutex::new(Vec::new()));
        let sink = chosen.clone();
        let s = locations()
            .on_change(move |value: &&str| {
                sink.lock().unwrap().push(*value);
            })
            .build();
        assert!(!s.choose(&"attic"));
        assert!(chosen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_choose_rejects_disabled_option() {
        let chosen = Arc::new(Mutex::new(Vec::new()));
        let sink = chosen.clone();
        let s = locations()
            .on_change(move |value: &&str| {
                sink.lock().unwrap().push(*value);
            })
            .build();
        assert!(!s.choose(&"freezer"));
        assert!(chosen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_disabled_select_rejects_everything() {
        let s = locations().disabled(true).build();
        assert!(!s.choose(&"pantry"));
    }

    #[test]
    fn test_duplicate_values_resolve_to_first_option() {
        let s: Select<u32> = select()
            .option(SelectOption::new(1, "One"))
            .option(SelectOption::new(1, "Other One").disabled())
            .build();
        // First match wins, so the duplicate's disabled flag is irrelevant.
        assert!(s.choose(&1));
    }

    #[test]
    fn test_typed_values() {
        #[derive(Clone, PartialEq, Debug)]
        enum Location {
            Pantry,
            Fridge,
        }
        let s = select()
            .option(SelectOption::new(Location::Pantry, "Pantry"))
            .option(SelectOption::new(Location::Fridge, "Fridge"))
            .value(Location::Pantry)
            .build();
        assert_eq!(s.value(), Some(&Location::Pantry));
        assert!(s.choose(&Location::Fridge));
    }
}
