//! Badge contract for status indicators
//!
//! Small labeled indicators for status, counts, or categories. A badge can
//! collapse to a plain colored dot, in which case any label content is
//! ignored.
//!
//! # Example
//!
//! ```ignore
//! use larder_ui::prelude::*;
//!
//! ui::badge("Active").variant(BadgeVariant::Success).build();
//! ui::badge("3").variant(BadgeVariant::Primary).size(BadgeSize::Small).build();
//!
//! // Dot indicator only; the label is not rendered
//! ui::badge("unsaved").variant(BadgeVariant::Warning).dot().build();
//! ```

use serde::{Deserialize, Serialize};

/// Badge visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    /// Neutral gray
    #[default]
    Default,
    /// Brand color
    Primary,
    /// Positive status
    Success,
    /// Caution status
    Warning,
    /// Negative status
    Error,
    /// Informational
    Info,
}

/// Badge size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeSize {
    /// Small badge
    #[serde(rename = "sm")]
    Small,
    /// Default size
    #[default]
    #[serde(rename = "md")]
    Medium,
    /// Large badge
    #[serde(rename = "lg")]
    Large,
}

/// Validated badge contract.
#[derive(Clone, Debug)]
pub struct Badge {
    label: String,
    variant: BadgeVariant,
    size: BadgeSize,
    dot: bool,
}

impl Badge {
    /// The visual variant
    pub fn variant(&self) -> BadgeVariant {
        self.variant
    }

    /// The size
    pub fn size(&self) -> BadgeSize {
        self.size
    }

    /// Whether the badge renders as a dot indicator only
    pub fn is_dot(&self) -> bool {
        self.dot
    }

    /// The label content to render.
    ///
    /// A dot badge carries no content regardless of the configured label.
    pub fn content(&self) -> Option<&str> {
        if self.dot {
            None
        } else {
            Some(&self.label)
        }
    }
}

/// Fluent constructor for [`Badge`]
pub struct BadgeBuilder {
    badge: Badge,
}

impl BadgeBuilder {
    /// Set the visual variant
    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.badge.variant = variant;
        self
    }

    /// Set the size
    pub fn size(mut self, size: BadgeSize) -> Self {
        self.badge.size = size;
        self
    }

    /// Collapse to a dot indicator without text
    pub fn dot(mut self) -> Self {
        self.badge.dot = true;
        self
    }

    /// Finish the configuration
    pub fn build(self) -> Badge {
        self.badge
    }
}

/// Create a badge with text content
pub fn badge(label: impl Into<String>) -> BadgeBuilder {
    BadgeBuilder {
        badge: Badge {
            label: label.into(),
            variant: BadgeVariant::default(),
            size: BadgeSize::default(),
            dot: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_defaults() {
        let b = badge("New").build();
        assert_eq!(b.variant(), BadgeVariant::Default);
        assert_eq!(b.size(), BadgeSize::Medium);
        assert_eq!(b.content(), Some("New"));
    }

    #[test]
    fn test_dot_badge_ignores_content() {
        let b = badge("ignored").variant(BadgeVariant::Warning).dot().build();
        assert!(b.is_dot());
        assert_eq!(b.content(), None);
    }
}
