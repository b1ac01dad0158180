//! Tab navigation contract
//!
//! An ordered set of tabs with one active id. The set is validated at
//! construction: ids must be unique and the active id must name one of the
//! tabs. Selection notifies the host through the change handler, and a
//! disabled tab is never selectable.
//!
//! # Example
//!
//! ```ignore
//! use larder_ui::prelude::*;
//!
//! let nav = ui::tab_navigation("inventory")
//!     .tab(Tab::new("inventory", "Inventory").icon(box_icon))
//!     .tab(Tab::new("shopping", "Shopping List").badge(5))
//!     .tab(Tab::new("members", "Members").disabled())
//!     .on_change(|id: &str| println!("switch to {id}"))
//!     .build()?;
//!
//! nav.select("shopping"); // handler runs
//! nav.select("members");  // disabled, handler does not run
//! ```

use larder_core::{Handler, NodeHandle};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{ConfigError, Result};

/// A single tab definition.
///
/// Tab sets are routinely authored as data, so the plain fields
/// (de)serialize; the icon is a live framework handle and never does.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tab {
    /// Unique tab identifier
    pub id: String,
    /// Visible label
    pub label: String,
    /// Icon shown before the label
    #[serde(skip)]
    pub icon: Option<NodeHandle>,
    /// Whether this tab can be selected
    #[serde(default)]
    pub disabled: bool,
    /// Count shown after the label
    #[serde(default)]
    pub badge: Option<u32>,
}

impl Tab {
    /// Create a tab with its id and label
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            disabled: false,
            badge: None,
        }
    }

    /// Set the icon shown before the label
    pub fn icon(mut self, icon: NodeHandle) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Mark this tab as disabled
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the badge count shown after the label
    pub fn badge(mut self, count: u32) -> Self {
        self.badge = Some(count);
        self
    }
}

/// Tab layout orientation; affects layout only, never selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabOrientation {
    /// Tabs in a row
    #[default]
    Horizontal,
    /// Tabs in a column
    Vertical,
}

/// Validated tab navigation contract.
#[derive(Clone)]
pub struct TabNavigation {
    tabs: Vec<Tab>,
    active_tab: String,
    orientation: TabOrientation,
    on_change: Handler<str>,
}

impl std::fmt::Debug for TabNavigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabNavigation")
            .field("tabs", &self.tabs)
            .field("active_tab", &self.active_tab)
            .field("orientation", &self.orientation)
            .finish()
    }
}

impl TabNavigation {
    /// The tabs, in display order
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// The id of the active tab; always names one of [`tabs`](Self::tabs)
    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    /// The layout orientation
    pub fn orientation(&self) -> TabOrientation {
        self.orientation
    }

    /// Select a tab by id.
    ///
    /// Invokes the change handler with the id and returns true. Unknown ids
    /// and disabled tabs are rejected without invoking the handler. The
    /// active tab itself does not change: selection state is host-owned and
    /// comes back through a rebuilt configuration.
    pub fn select(&self, id: &str) -> bool {
        let Some(tab) = self.tabs.iter().find(|tab| tab.id == id) else {
            tracing::debug!(id, "select rejected: unknown tab id");
            return false;
        };
        if tab.disabled {
            tracing::debug!(id, "select rejected: tab is disabled");
            return false;
        }
        (self.on_change)(id);
        true
    }
}

/// Fluent constructor for [`TabNavigation`]
pub struct TabNavigationBuilder {
    tabs: Vec<Tab>,
    active_tab: String,
    orientation: TabOrientation,
    on_change: Option<Handler<str>>,
}

impl TabNavigationBuilder {
    /// Append a tab
    pub fn tab(mut self, tab: Tab) -> Self {
        self.tabs.push(tab);
        self
    }

    /// Append an ordered set of tabs (e.g. deserialized from data)
    pub fn tabs(mut self, tabs: impl IntoIterator<Item = Tab>) -> Self {
        self.tabs.extend(tabs);
        self
    }

    /// Set the layout orientation
    pub fn orientation(mut self, orientation: TabOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the change handler; it receives the selected tab id
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(handler));
        self
    }

    /// Finish the configuration.
    ///
    /// Rejects an empty tab set, duplicate ids, an active id that names no
    /// tab, and a missing change handler.
    pub fn build(self) -> Result<TabNavigation> {
        if self.tabs.is_empty() {
            return Err(ConfigError::NoTabs);
        }
        let mut seen = HashSet::new();
        for tab in &self.tabs {
            if !seen.insert(tab.id.as_str()) {
                return Err(ConfigError::DuplicateTabId(tab.id.clone()));
            }
        }
        if !self.tabs.iter().any(|tab| tab.id == self.active_tab) {
            return Err(ConfigError::UnknownActiveTab(self.active_tab));
        }
        let Some(on_change) = self.on_change else {
            return Err(ConfigError::MissingChangeHandler);
        };
        Ok(TabNavigation {
            tabs: self.tabs,
            active_tab: self.active_tab,
            orientation: self.orientation,
            on_change,
        })
    }
}

/// Create a tab navigation with the id of the initially active tab
pub fn tab_navigation(active_tab: impl Into<String>) -> TabNavigationBuilder {
    TabNavigationBuilder {
        tabs: Vec::new(),
        active_tab: active_tab.into(),
        orientation: TabOrientation::default(),
        on_change: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn selections() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) + Send + Sync + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |id: &str| sink.lock().unwrap().push(id.to_string()))
    }

    #[test]
    fn test_builds_with_valid_active_tab() {
        let (_, on_change) = selections();
        let nav = tab_navigation("a")
            .tab(Tab::new("a", "A"))
            .tab(Tab::new("b", "B"))
            .on_change(on_change)
            .build()
            .unwrap();
        assert_eq!(nav.active_tab(), "a");
        assert_eq!(nav.tabs().len(), 2);
        assert_eq!(nav.orientation(), TabOrientation::Horizontal);
    }

    #[test]
    fn test_rejects_unknown_active_tab() {
        let (_, on_change) = selections();
        let err = tab_navigation("missing")
            .tab(Tab::new("a", "A"))
            .on_change(on_change)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::UnknownActiveTab("missing".to_string()));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let (_, on_change) = selections();
        let err = tab_navigation("a")
            .tab(Tab::new("a", "A"))
            .tab(Tab::new("a", "Again"))
            .on_change(on_change)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateTabId("a".to_string()));
    }

    #[test]
    fn test_rejects_empty_tab_set() {
        let (_, on_change) = selections();
        let err = tab_navigation("a").on_change(on_change).build().unwrap_err();
        assert_eq!(err, ConfigError::NoTabs);
    }

    #[test]
    fn test_rejects_missing_change_handler() {
        let err = tab_navigation("a").tab(Tab::new("a", "A")).build().unwrap_err();
        assert_eq!(err, ConfigError::MissingChangeHandler);
    }

    #[test]
    fn test_select_notifies_host() {
        let (seen, on_change) = selections();
        let nav = tab_navigation("a")
            .tab(Tab::new("a", "A"))
            .tab(Tab::new("b", "B"))
            .on_change(on_change)
            .build()
            .unwrap();
        assert!(nav.select("b"));
        assert_eq!(seen.lock().unwrap().as_slice(), ["b"]);
    }

    #[test]
    fn test_disabled_tab_is_never_selectable() {
        let (seen, on_change) = selections();
        let nav = tab_navigation("a")
            .tab(Tab::new("a", "A"))
            .tab(Tab::new("b", "B").disabled())
            .on_change(on_change)
            .build()
            .unwrap();
        assert!(!nav.select("b"));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        let (seen, on_change) = selections();
        let nav = tab_navigation("a")
            .tab(Tab::new("a", "A"))
            .on_change(on_change)
            .build()
            .unwrap();
        assert!(!nav.select("zzz"));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_tab_set_authored_as_data() {
        let tabs: Vec<Tab> = serde_json::from_str(
            r#"[
                {"id": "inventory", "label": "Inventory"},
                {"id": "shopping", "label": "Shopping List", "badge": 5},
                {"id": "members", "label": "Members", "disabled": true}
            ]"#,
        )
        .unwrap();

        let (seen, on_change) = selections();
        let nav = tab_navigation("inventory")
            .tabs(tabs)
            .on_change(on_change)
            .build()
            .unwrap();
        assert_eq!(nav.tabs()[1].badge, Some(5));
        assert!(nav.select("shopping"));
        assert!(!nav.select("members"));
        assert_eq!(seen.lock().unwrap().as_slice(), ["shopping"]);
    }
}
