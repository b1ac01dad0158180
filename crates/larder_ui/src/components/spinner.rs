//! Loading spinner contract
//!
//! Busy indicator with a screen-reader label. The label always has a value
//! so icon-only loading states stay announced.
//!
//! # Example
//!
//! ```ignore
//! use larder_ui::prelude::*;
//!
//! ui::loading_spinner().build();
//!
//! ui::loading_spinner()
//!     .size(SpinnerSize::ExtraLarge)
//!     .center()
//!     .label("Loading inventory...")
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

/// Spinner size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinnerSize {
    /// Inline with text
    #[serde(rename = "sm")]
    Small,
    /// Default size
    #[default]
    #[serde(rename = "md")]
    Medium,
    /// Large buttons and cards
    #[serde(rename = "lg")]
    Large,
    /// Page-level loading
    #[serde(rename = "xl")]
    ExtraLarge,
}

/// Validated loading spinner contract.
#[derive(Clone, Debug)]
pub struct LoadingSpinner {
    size: SpinnerSize,
    label: String,
    center: bool,
}

impl LoadingSpinner {
    /// The size
    pub fn size(&self) -> SpinnerSize {
        self.size
    }

    /// The label announced to assistive technology
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the spinner centers itself in its container
    pub fn is_centered(&self) -> bool {
        self.center
    }
}

/// Fluent constructor for [`LoadingSpinner`]
pub struct LoadingSpinnerBuilder {
    spinner: LoadingSpinner,
}

impl LoadingSpinnerBuilder {
    /// Set the size
    pub fn size(mut self, size: SpinnerSize) -> Self {
        self.spinner.size = size;
        self
    }

    /// Replace the default accessible label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.spinner.label = label.into();
        self
    }

    /// Center the spinner in its container
    pub fn center(mut self) -> Self {
        self.spinner.center = true;
        self
    }

    /// Finish the configuration
    pub fn build(self) -> LoadingSpinner {
        self.spinner
    }
}

/// Create a loading spinner
pub fn loading_spinner() -> LoadingSpinnerBuilder {
    LoadingSpinnerBuilder {
        spinner: LoadingSpinner {
            size: SpinnerSize::default(),
            label: "Loading...".to_string(),
            center: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_defaults() {
        let s = loading_spinner().build();
        assert_eq!(s.size(), SpinnerSize::Medium);
        assert_eq!(s.label(), "Loading...");
        assert!(!s.is_centered());
    }

    #[test]
    fn test_spinner_custom_label() {
        let s = loading_spinner()
            .size(SpinnerSize::ExtraLarge)
            .center()
            .label("Loading inventory...")
            .build();
        assert_eq!(s.label(), "Loading inventory...");
        assert!(s.is_centered());
    }
}
