//! Page header contract
//!
//! Page title with optional breadcrumbs, supporting description, and action
//! slots. Breadcrumbs are ordered; by convention the last one names the
//! current page and carries no href.
//!
//! # Example
//!
//! ```ignore
//! use larder_ui::prelude::*;
//!
//! let header = ui::page_header("Family Members")
//!     .breadcrumb(Breadcrumb::new("Dashboard").href("/dashboard"))
//!     .breadcrumb(Breadcrumb::new("Settings").href("/settings"))
//!     .breadcrumb(Breadcrumb::new("Members"))
//!     .action(invite_button)
//!     .build();
//! ```

use larder_core::NodeHandle;
use serde::{Deserialize, Serialize};

/// A single breadcrumb entry.
///
/// Without an href the entry renders as plain text, the convention for the
/// current page.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Visible label
    pub label: String,
    /// Destination when clickable
    #[serde(default)]
    pub href: Option<String>,
}

impl Breadcrumb {
    /// Create a plain-text breadcrumb
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }

    /// Make the breadcrumb clickable
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

/// Validated page header contract.
#[derive(Clone, Debug)]
pub struct PageHeader {
    title: String,
    description: Option<String>,
    breadcrumbs: Vec<Breadcrumb>,
    action: Option<NodeHandle>,
    secondary_actions: Vec<NodeHandle>,
}

impl PageHeader {
    /// The main heading
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The supporting subtitle text
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The breadcrumb trail, in order
    pub fn breadcrumbs(&self) -> &[Breadcrumb] {
        &self.breadcrumbs
    }

    /// The primary action slot
    pub fn action(&self) -> Option<NodeHandle> {
        self.action
    }

    /// Additional action slots shown after the primary
    pub fn secondary_actions(&self) -> &[NodeHandle] {
        &self.secondary_actions
    }
}

/// Fluent constructor for [`PageHeader`]
pub struct PageHeaderBuilder {
    header: PageHeader,
}

impl PageHeaderBuilder {
    /// Set the supporting subtitle
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.header.description = Some(description.into());
        self
    }

    /// Append a breadcrumb
    pub fn breadcrumb(mut self, breadcrumb: Breadcrumb) -> Self {
        self.header.breadcrumbs.push(breadcrumb);
        self
    }

    /// Append an ordered breadcrumb trail
    pub fn breadcrumbs(mut self, breadcrumbs: impl IntoIterator<Item = Breadcrumb>) -> Self {
        self.header.breadcrumbs.extend(breadcrumbs);
        self
    }

    /// Set the primary action slot
    pub fn action(mut self, action: NodeHandle) -> Self {
        self.header.action = Some(action);
        self
    }

    /// Append a secondary action slot
    pub fn secondary_action(mut self, action: NodeHandle) -> Self {
        self.header.secondary_actions.push(action);
        self
    }

    /// Finish the configuration
    pub fn build(self) -> PageHeader {
        if let Some(last) = self.header.breadcrumbs.last() {
            if last.href.is_some() {
                tracing::debug!(
                    label = %last.label,
                    "last breadcrumb carries an href; the current page is conventionally plain text"
                );
            }
        }
        self.header
    }
}

/// Create a page header with its required title
pub fn page_header(title: impl Into<String>) -> PageHeaderBuilder {
    PageHeaderBuilder {
        header: PageHeader {
            title: title.into(),
            description: None,
            breadcrumbs: Vec::new(),
            action: None,
            secondary_actions: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_title_only() {
        let h = page_header("Inventory").build();
        assert_eq!(h.title(), "Inventory");
        assert!(h.breadcrumbs().is_empty());
        assert!(h.action().is_none());
    }

    #[test]
    fn test_breadcrumb_trail_keeps_order() {
        let h = page_header("Members")
            .breadcrumb(Breadcrumb::new("Dashboard").href("/dashboard"))
            .breadcrumb(Breadcrumb::new("Settings").href("/settings"))
            .breadcrumb(Breadcrumb::new("Members"))
            .build();
        let labels: Vec<_> = h.breadcrumbs().iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Dashboard", "Settings", "Members"]);
        assert!(h.breadcrumbs().last().unwrap().href.is_none());
    }

    #[test]
    fn test_action_slots() {
        let h = page_header("Inventory")
            .action(NodeHandle::from_raw(1))
            .secondary_action(NodeHandle::from_raw(2))
            .secondary_action(NodeHandle::from_raw(3))
            .build();
        assert_eq!(h.action(), Some(NodeHandle::from_raw(1)));
        assert_eq!(h.secondary_actions().len(), 2);
    }
}
