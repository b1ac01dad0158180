//! Link contract for styled navigation anchors
//!
//! A link knows whether it leaves the application. Externality can be set
//! explicitly; otherwise it is inferred from the destination host, and the
//! external icon follows the resolved value unless overridden.
//!
//! # Example
//!
//! ```ignore
//! use larder_core::AppHost;
//! use larder_ui::prelude::*;
//!
//! let host = AppHost::new("app.example.com");
//!
//! let docs = ui::link("https://docs.example.org", "View Documentation").build();
//! assert!(docs.is_external(&host));
//! assert!(docs.shows_external_icon(&host));
//!
//! let settings = ui::link("/settings", "Settings")
//!     .variant(LinkVariant::Subtle)
//!     .build();
//! assert!(!settings.is_external(&host));
//! ```

use larder_core::AppHost;
use serde::{Deserialize, Serialize};
use url::Url;

/// Link visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkVariant {
    /// Standard link, underline on hover
    #[default]
    Default,
    /// Primary color, bold
    Primary,
    /// No underline, subtle color
    Subtle,
}

/// Validated link contract.
#[derive(Clone, Debug)]
pub struct Link {
    href: String,
    text: String,
    variant: LinkVariant,
    external: Option<bool>,
    show_external_icon: Option<bool>,
}

impl Link {
    /// The destination
    pub fn href(&self) -> &str {
        &self.href
    }

    /// The link text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The visual variant
    pub fn variant(&self) -> LinkVariant {
        self.variant
    }

    /// Resolve whether the link leaves the application.
    ///
    /// An explicit `external` setting wins. Otherwise the link is external
    /// iff it is an absolute http(s) URL whose host differs from the
    /// application's own. Relative paths, same-host URLs, and other schemes
    /// resolve internal. The resolution is pure: the same link and host
    /// always produce the same answer.
    pub fn is_external(&self, app: &AppHost) -> bool {
        match self.external {
            Some(explicit) => explicit,
            None => self.infer_external(app),
        }
    }

    fn infer_external(&self, app: &AppHost) -> bool {
        let Ok(parsed) = Url::parse(&self.href) else {
            // Relative hrefs stay inside the application.
            return false;
        };
        if !matches!(parsed.scheme(), "http" | "https") {
            tracing::debug!(scheme = %parsed.scheme(), "non-http link treated as internal");
            return false;
        }
        match parsed.host_str() {
            Some(link_host) => !app.matches(link_host),
            None => false,
        }
    }

    /// Resolve whether the external icon is shown.
    ///
    /// Defaults to the resolved externality unless explicitly overridden.
    pub fn shows_external_icon(&self, app: &AppHost) -> bool {
        self.show_external_icon
            .unwrap_or_else(|| self.is_external(app))
    }
}

/// Fluent constructor for [`Link`]
pub struct LinkBuilder {
    link: Link,
}

impl LinkBuilder {
    /// Set the visual variant
    pub fn variant(mut self, variant: LinkVariant) -> Self {
        self.link.variant = variant;
        self
    }

    /// Set externality explicitly instead of inferring it from the href
    pub fn external(mut self, external: bool) -> Self {
        self.link.external = Some(external);
        self
    }

    /// Force the external icon on or off
    pub fn show_external_icon(mut self, show: bool) -> Self {
        self.link.show_external_icon = Some(show);
        self
    }

    /// Finish the configuration
    pub fn build(self) -> Link {
        self.link
    }
}

/// Create a link with its destination and text
pub fn link(href: impl Into<String>, text: impl Into<String>) -> LinkBuilder {
    LinkBuilder {
        link: Link {
            href: href.into(),
            text: text.into(),
            variant: LinkVariant::default(),
            external: None,
            show_external_icon: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppHost {
        AppHost::new("app.example.com")
    }

    #[test]
    fn test_foreign_host_is_external() {
        let l = link("https://external.example.com", "Docs").build();
        assert!(l.is_external(&app()));
        assert!(l.shows_external_icon(&app()));
    }

    #[test]
    fn test_same_host_is_internal() {
        let l = link("https://app.example.com/dashboard", "Dashboard").build();
        assert!(!l.is_external(&app()));
        assert!(!l.shows_external_icon(&app()));
    }

    #[test]
    fn test_host_comparison_ignores_case() {
        let l = link("https://APP.Example.com/dashboard", "Dashboard").build();
        assert!(!l.is_external(&app()));
    }

    #[test]
    fn test_relative_href_is_internal() {
        let l = link("/settings", "Settings").build();
        assert!(!l.is_external(&app()));
        assert!(!l.shows_external_icon(&app()));
    }

    #[test]
    fn test_non_http_scheme_is_internal() {
        let l = link("mailto:family@example.com", "Email us").build();
        assert!(!l.is_external(&app()));
    }

    #[test]
    fn test_explicit_external_wins() {
        let l = link("/settings", "Settings").external(true).build();
        assert!(l.is_external(&app()));
        assert!(l.shows_external_icon(&app()));

        let l = link("https://external.example.com", "Docs")
            .external(false)
            .build();
        assert!(!l.is_external(&app()));
    }

    #[test]
    fn test_icon_override_is_independent() {
        let l = link("https://external.example.com", "Docs")
            .show_external_icon(false)
            .build();
        assert!(l.is_external(&app()));
        assert!(!l.shows_external_icon(&app()));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let l = link("https://external.example.com", "Docs").build();
        let first = l.is_external(&app());
        let second = l.is_external(&app());
        assert_eq!(first, second);
    }
}
