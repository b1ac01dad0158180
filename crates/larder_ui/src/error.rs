//! Error types for larder_ui

use thiserror::Error;

/// Construction-time contract violations.
///
/// Every variant corresponds to a required field or cross-field rule a
/// caller can get wrong when assembling a component configuration. There is
/// no runtime failure mode beyond these: a configuration that builds is
/// valid for its whole lifetime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Icon-only buttons must always carry a label for assistive technology
    #[error("icon button requires a non-empty accessible label")]
    EmptyAccessibleLabel,

    /// A dismissible alert has nothing to call when the close button is used
    #[error("dismissible alert requires an on_dismiss handler")]
    MissingDismissHandler,

    /// Tab navigation cannot notify the host of selection changes
    #[error("tab navigation requires an on_change handler")]
    MissingChangeHandler,

    /// Tab navigation with no tabs to show
    #[error("tab navigation requires at least one tab")]
    NoTabs,

    /// Two tabs share an id, making selection ambiguous
    #[error("duplicate tab id `{0}`")]
    DuplicateTabId(String),

    /// The active tab id does not name any tab in the set
    #[error("active tab `{0}` is not one of the configured tabs")]
    UnknownActiveTab(String),
}

/// Result type for larder_ui contract construction.
pub type Result<T> = std::result::Result<T, ConfigError>;
