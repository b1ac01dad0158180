//! Empty state contract
//!
//! Placeholder shown when a list or view has no data, with an optional
//! primary action and a link-style secondary action.
//!
//! # Example
//!
//! ```ignore
//! use larder_ui::prelude::*;
//!
//! let empty = ui::empty_state("No Inventory Items")
//!     .description("Add your first item to get started.")
//!     .action(EmptyStateAction::new("Add Item", || println!("add")))
//!     .secondary_action(EmptyStateAction::new("Learn More", || println!("docs")))
//!     .build();
//! ```

use larder_core::{Callback, NodeHandle};
use std::sync::Arc;

use super::button::ButtonVariant;

/// An action offered from an empty state.
///
/// Label and handler are both required; an action the user cannot trigger
/// is not an action.
#[derive(Clone)]
pub struct EmptyStateAction {
    /// Button label
    pub label: String,
    /// Button variant (only meaningful for the primary action)
    pub variant: ButtonVariant,
    on_click: Callback,
}

impl std::fmt::Debug for EmptyStateAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmptyStateAction")
            .field("label", &self.label)
            .field("variant", &self.variant)
            .finish()
    }
}

impl EmptyStateAction {
    /// Create an action with a label and click handler
    pub fn new<F>(label: impl Into<String>, on_click: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            on_click: Arc::new(on_click),
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Trigger the action
    pub fn trigger(&self) {
        (self.on_click)();
    }
}

/// Validated empty state contract.
#[derive(Clone, Debug)]
pub struct EmptyState {
    title: String,
    description: Option<String>,
    icon: Option<NodeHandle>,
    action: Option<EmptyStateAction>,
    secondary_action: Option<EmptyStateAction>,
}

impl EmptyState {
    /// The primary message title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The supporting description text
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The illustrative icon
    pub fn icon(&self) -> Option<NodeHandle> {
        self.icon
    }

    /// The primary action button
    pub fn action(&self) -> Option<&EmptyStateAction> {
        self.action.as_ref()
    }

    /// The link-style secondary action shown below the primary
    pub fn secondary_action(&self) -> Option<&EmptyStateAction> {
        self.secondary_action.as_ref()
    }
}

/// Fluent constructor for [`EmptyState`]
pub struct EmptyStateBuilder {
    state: EmptyState,
}

impl EmptyStateBuilder {
    /// Set the supporting description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.state.description = Some(description.into());
        self
    }

    /// Set the illustrative icon
    pub fn icon(mut self, icon: NodeHandle) -> Self {
        self.state.icon = Some(icon);
        self
    }

    /// Set the primary action
    pub fn action(mut self, action: EmptyStateAction) -> Self {
        self.state.action = Some(action);
        self
    }

    /// Set the secondary action
    pub fn secondary_action(mut self, action: EmptyStateAction) -> Self {
        self.state.secondary_action = Some(action);
        self
    }

    /// Finish the configuration
    pub fn build(self) -> EmptyState {
        self.state
    }
}

/// Create an empty state with its required title
pub fn empty_state(title: impl Into<String>) -> EmptyStateBuilder {
    EmptyStateBuilder {
        state: EmptyState {
            title: title.into(),
            description: None,
            icon: None,
            action: None,
            secondary_action: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_empty_state_title_only() {
        let s = empty_state("No Members Yet").build();
        assert_eq!(s.title(), "No Members Yet");
        assert!(s.description().is_none());
        assert!(s.action().is_none());
    }

    #[test]
    fn test_action_triggers_handler() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        let s = empty_state("No Inventory Items")
            .action(EmptyStateAction::new("Add Item", move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .build();
        s.action().unwrap().trigger();
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
        assert_eq!(s.action().unwrap().variant, ButtonVariant::Primary);
    }
}
