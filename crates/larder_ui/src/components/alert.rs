//! Alert contract for feedback messages
//!
//! Contextual message display for notifications and feedback. Severity
//! determines color, icon, and how assistive technology announces the
//! message.
//!
//! # Example
//!
//! ```ignore
//! use larder_ui::prelude::*;
//!
//! // Success notice
//! let added = ui::alert(AlertSeverity::Success, "Milk has been added to your inventory")
//!     .title("Item Added")
//!     .build()?;
//!
//! // Dismissible error; the dismiss handler is required
//! let failed = ui::alert(AlertSeverity::Error, "Failed to save changes. Please try again.")
//!     .dismissible()
//!     .on_dismiss(|| println!("dismissed"))
//!     .build()?;
//! ```

use larder_core::Callback;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ConfigError, Result};

/// Alert severity levels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Informational
    #[default]
    Info,
    /// Success message
    Success,
    /// Warning/caution
    Warning,
    /// Error message
    Error,
}

/// Validated alert contract.
#[derive(Clone)]
pub struct Alert {
    severity: AlertSeverity,
    message: String,
    title: Option<String>,
    dismissible: bool,
    on_dismiss: Option<Callback>,
}

impl std::fmt::Debug for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alert")
            .field("severity", &self.severity)
            .field("message", &self.message)
            .field("title", &self.title)
            .field("dismissible", &self.dismissible)
            .field("on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}

impl Alert {
    /// The severity level
    pub fn severity(&self) -> AlertSeverity {
        self.severity
    }

    /// The message body
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The optional bold title above the message
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Whether the alert shows a close button
    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    /// Dismiss the alert.
    ///
    /// Invokes the dismiss handler and returns true when the alert is
    /// dismissible; a non-dismissible alert ignores the request.
    pub fn dismiss(&self) -> bool {
        if !self.dismissible {
            tracing::debug!("dismiss requested on non-dismissible alert");
            return false;
        }
        // build() guarantees the handler is present for dismissible alerts
        if let Some(handler) = &self.on_dismiss {
            handler();
        }
        true
    }
}

/// Fluent constructor for [`Alert`]
pub struct AlertBuilder {
    alert: Alert,
}

impl AlertBuilder {
    /// Set the bold title shown above the message
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.alert.title = Some(title.into());
        self
    }

    /// Show a close button
    pub fn dismissible(mut self) -> Self {
        self.alert.dismissible = true;
        self
    }

    /// Set the handler invoked when the close button is used
    pub fn on_dismiss<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.alert.on_dismiss = Some(Arc::new(handler));
        self
    }

    /// Finish the configuration.
    ///
    /// A dismissible alert without a dismiss handler is rejected: the close
    /// button would have nothing to call.
    pub fn build(self) -> Result<Alert> {
        if self.alert.dismissible && self.alert.on_dismiss.is_none() {
            return Err(ConfigError::MissingDismissHandler);
        }
        Ok(self.alert)
    }
}

/// Create an alert with a severity and message
pub fn alert(severity: AlertSeverity, message: impl Into<String>) -> AlertBuilder {
    AlertBuilder {
        alert: Alert {
            severity,
            message: message.into(),
            title: None,
            dismissible: false,
            on_dismiss: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_alert_basic() {
        let a = alert(AlertSeverity::Success, "Saved").title("Done").build().unwrap();
        assert_eq!(a.severity(), AlertSeverity::Success);
        assert_eq!(a.message(), "Saved");
        assert_eq!(a.title(), Some("Done"));
        assert!(!a.is_dismissible());
    }

    #[test]
    fn test_dismissible_requires_handler() {
        let err = alert(AlertSeverity::Error, "Failed")
            .dismissible()
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingDismissHandler);
    }

    #[test]
    fn test_dismiss_invokes_handler() {
        let dismissals = Arc::new(AtomicUsize::new(0));
        let counter = dismissals.clone();
        let a = alert(AlertSeverity::Warning, "Careful")
            .dismissible()
            .on_dismiss(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();
        assert!(a.dismiss());
        assert_eq!(dismissals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dismiss_ignored_when_not_dismissible() {
        let a = alert(AlertSeverity::Info, "FYI").build().unwrap();
        assert!(!a.dismiss());
    }

    #[test]
    fn test_handler_without_dismissible_is_allowed() {
        // The handler is simply never reachable through dismiss().
        let a = alert(AlertSeverity::Info, "FYI")
            .on_dismiss(|| {})
            .build()
            .unwrap();
        assert!(!a.dismiss());
    }
}
