//! Button and icon button contracts
//!
//! Primary action buttons with variants for different contexts, plus the
//! icon-only form that always carries an accessible label.
//!
//! # Example
//!
//! ```ignore
//! use larder_ui::prelude::*;
//!
//! // Primary button (default)
//! let save = ui::button("Save Changes")
//!     .on_click(|| println!("saved"))
//!     .build();
//!
//! // Destructive button with a loading state
//! let delete = ui::button("Delete Item")
//!     .variant(ButtonVariant::Danger)
//!     .loading(true)
//!     .build();
//! assert!(!delete.is_interactive());
//!
//! // Icon-only button; the accessible label is mandatory
//! let edit = ui::icon_button(pencil_icon, "Edit item").build()?;
//! ```

use larder_core::{Callback, NodeHandle};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ConfigError, Result};

/// Button visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Main call-to-action, filled, high contrast
    #[default]
    Primary,
    /// Alternative actions, outlined or subtle fill
    Secondary,
    /// Destructive actions, warning color
    Danger,
}

/// Button size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonSize {
    /// Small button
    #[serde(rename = "sm")]
    Small,
    /// Default size
    #[default]
    #[serde(rename = "md")]
    Medium,
    /// Large button
    #[serde(rename = "lg")]
    Large,
}

/// Validated button contract.
///
/// A loading button is inert: it keeps its click handler but never invokes
/// it until the host rebuilds the configuration with `loading` cleared.
#[derive(Clone)]
pub struct Button {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    loading: bool,
    full_width: bool,
    disabled: bool,
    left_icon: Option<NodeHandle>,
    right_icon: Option<NodeHandle>,
    on_click: Option<Callback>,
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("variant", &self.variant)
            .field("size", &self.size)
            .field("loading", &self.loading)
            .field("full_width", &self.full_width)
            .field("disabled", &self.disabled)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl Button {
    /// The button text label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The visual variant
    pub fn variant(&self) -> ButtonVariant {
        self.variant
    }

    /// The size
    pub fn size(&self) -> ButtonSize {
        self.size
    }

    /// Whether the button shows its loading state
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the button stretches to its container width
    pub fn is_full_width(&self) -> bool {
        self.full_width
    }

    /// Whether the button is explicitly disabled
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Icon slot before the label
    pub fn left_icon(&self) -> Option<NodeHandle> {
        self.left_icon
    }

    /// Icon slot after the label
    pub fn right_icon(&self) -> Option<NodeHandle> {
        self.right_icon
    }

    /// Whether the button currently accepts presses.
    ///
    /// False while loading or disabled.
    pub fn is_interactive(&self) -> bool {
        !self.loading && !self.disabled
    }

    /// Press the button.
    ///
    /// Invokes the click handler when the button is interactive and returns
    /// whether the press was accepted. Presses on a loading or disabled
    /// button are suppressed.
    pub fn press(&self) -> bool {
        if !self.is_interactive() {
            tracing::debug!(label = %self.label, "press suppressed on inert button");
            return false;
        }
        if let Some(handler) = &self.on_click {
            handler();
        }
        true
    }
}

/// Fluent constructor for [`Button`]
pub struct ButtonBuilder {
    button: Button,
}

impl ButtonBuilder {
    /// Set the visual variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.button.variant = variant;
        self
    }

    /// Set the size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.button.size = size;
        self
    }

    /// Set the loading state (shows spinner, suppresses interaction)
    pub fn loading(mut self, loading: bool) -> Self {
        self.button.loading = loading;
        self
    }

    /// Stretch the button to its container width
    pub fn full_width(mut self) -> Self {
        self.button.full_width = true;
        self
    }

    /// Disable the button
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.button.disabled = disabled;
        self
    }

    /// Set the icon displayed before the label
    pub fn left_icon(mut self, icon: NodeHandle) -> Self {
        self.button.left_icon = Some(icon);
        self
    }

    /// Set the icon displayed after the label
    pub fn right_icon(mut self, icon: NodeHandle) -> Self {
        self.button.right_icon = Some(icon);
        self
    }

    /// Set the click handler
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.button.on_click = Some(Arc::new(handler));
        self
    }

    /// Finish the configuration
    pub fn build(self) -> Button {
        self.button
    }
}

/// Create a button with a text label
pub fn button(label: impl Into<String>) -> ButtonBuilder {
    ButtonBuilder {
        button: Button {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            loading: false,
            full_width: false,
            disabled: false,
            left_icon: None,
            right_icon: None,
            on_click: None,
        },
    }
}

// ============================================================================
// IconButton - icon-only action with a mandatory accessible label
// ============================================================================

/// Validated icon button contract.
///
/// Icon-only controls expose no visible text, so the accessible label is
/// required at construction and rejected when empty.
#[derive(Clone)]
pub struct IconButton {
    icon: NodeHandle,
    accessible_label: String,
    label: Option<String>,
    variant: ButtonVariant,
    size: ButtonSize,
    loading: bool,
    disabled: bool,
    on_click: Option<Callback>,
}

impl std::fmt::Debug for IconButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconButton")
            .field("icon", &self.icon)
            .field("accessible_label", &self.accessible_label)
            .field("label", &self.label)
            .field("variant", &self.variant)
            .field("size", &self.size)
            .field("loading", &self.loading)
            .field("disabled", &self.disabled)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl IconButton {
    /// The icon content
    pub fn icon(&self) -> NodeHandle {
        self.icon
    }

    /// The label exposed to assistive technology
    pub fn accessible_label(&self) -> &str {
        &self.accessible_label
    }

    /// The optional visual tooltip label
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The visual variant
    pub fn variant(&self) -> ButtonVariant {
        self.variant
    }

    /// The size
    pub fn size(&self) -> ButtonSize {
        self.size
    }

    /// Whether the button shows its loading state
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the button is explicitly disabled
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the button currently accepts presses
    pub fn is_interactive(&self) -> bool {
        !self.loading && !self.disabled
    }

    /// Press the button; suppressed while loading or disabled.
    pub fn press(&self) -> bool {
        if !self.is_interactive() {
            tracing::debug!(
                accessible_label = %self.accessible_label,
                "press suppressed on inert icon button"
            );
            return false;
        }
        if let Some(handler) = &self.on_click {
            handler();
        }
        true
    }
}

/// Fluent constructor for [`IconButton`]
pub struct IconButtonBuilder {
    button: IconButton,
}

impl IconButtonBuilder {
    /// Set the visual tooltip label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.button.label = Some(label.into());
        self
    }

    /// Set the visual variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.button.variant = variant;
        self
    }

    /// Set the size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.button.size = size;
        self
    }

    /// Set the loading state
    pub fn loading(mut self, loading: bool) -> Self {
        self.button.loading = loading;
        self
    }

    /// Disable the button
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.button.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.button.on_click = Some(Arc::new(handler));
        self
    }

    /// Finish the configuration.
    ///
    /// Rejects an accessible label that is empty or whitespace-only.
    pub fn build(self) -> Result<IconButton> {
        if self.button.accessible_label.trim().is_empty() {
            return Err(ConfigError::EmptyAccessibleLabel);
        }
        Ok(self.button)
    }
}

/// Create an icon-only button.
///
/// The accessible label is part of the constructor signature so no icon
/// button can be assembled without one.
pub fn icon_button(icon: NodeHandle, accessible_label: impl Into<String>) -> IconButtonBuilder {
    IconButtonBuilder {
        button: IconButton {
            icon,
            accessible_label: accessible_label.into(),
            label: None,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            loading: false,
            disabled: false,
            on_click: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn icon() -> NodeHandle {
        NodeHandle::from_raw(1)
    }

    #[test]
    fn test_button_defaults() {
        let btn = button("Save").build();
        assert_eq!(btn.label(), "Save");
        assert_eq!(btn.variant(), ButtonVariant::Primary);
        assert_eq!(btn.size(), ButtonSize::Medium);
        assert!(!btn.is_loading());
        assert!(!btn.is_full_width());
        assert!(btn.is_interactive());
    }

    #[test]
    fn test_press_invokes_handler() {
        let presses = Arc::new(AtomicUsize::new(0));
        let counter = presses.clone();
        let btn = button("Save")
            .on_click(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build();
        assert!(btn.press());
        assert_eq!(presses.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_loading_button_is_inert() {
        let presses = Arc::new(AtomicUsize::new(0));
        let counter = presses.clone();
        let btn = button("Save")
            .loading(true)
            .on_click(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build();
        assert!(!btn.is_interactive());
        assert!(!btn.press());
        assert_eq!(presses.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_disabled_button_is_inert() {
        let btn = button("Save").disabled(true).build();
        assert!(!btn.is_interactive());
        assert!(!btn.press());
    }

    #[test]
    fn test_icon_button_requires_accessible_label() {
        assert_eq!(
            icon_button(icon(), "").build().unwrap_err(),
            ConfigError::EmptyAccessibleLabel
        );
        assert_eq!(
            icon_button(icon(), "   ").build().unwrap_err(),
            ConfigError::EmptyAccessibleLabel
        );
    }

    #[test]
    fn test_icon_button_with_label_builds() {
        let btn = icon_button(icon(), "Edit item")
            .variant(ButtonVariant::Secondary)
            .label("Edit")
            .build()
            .unwrap();
        assert_eq!(btn.accessible_label(), "Edit item");
        assert_eq!(btn.label(), Some("Edit"));
        assert_eq!(btn.icon(), icon());
    }

    #[test]
    fn test_icon_button_loading_suppresses_press() {
        let presses = Arc::new(AtomicUsize::new(0));
        let counter = presses.clone();
        let btn = icon_button(icon(), "Delete item")
            .loading(true)
            .on_click(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();
        assert!(!btn.press());
        assert_eq!(presses.load(Ordering::SeqCst), 0);
    }
}
