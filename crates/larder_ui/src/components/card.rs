//! Card contract for content containers
//!
//! Groups related content behind an elevation and padding choice. An
//! interactive card accepts presses; a static one ignores them.
//!
//! # Example
//!
//! ```ignore
//! use larder_ui::prelude::*;
//!
//! let summary = ui::card(item_summary)
//!     .elevation(CardElevation::Low)
//!     .padding(CardPadding::Medium)
//!     .build();
//!
//! let row = ui::card(item_row)
//!     .interactive()
//!     .on_click(|| println!("open item"))
//!     .build();
//! ```

use larder_core::{Callback, NodeHandle};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Card elevation levels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardElevation {
    /// No shadow, border only
    Flat,
    /// Subtle shadow
    #[default]
    Low,
    /// Moderate shadow for elevated surfaces
    Medium,
    /// Strong shadow for modals and dropdowns
    High,
}

/// Card internal padding
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardPadding {
    /// No padding; content handles its own
    #[serde(rename = "none")]
    None,
    /// Tight padding
    #[serde(rename = "sm")]
    Small,
    /// Default padding
    #[default]
    #[serde(rename = "md")]
    Medium,
    /// Roomy padding
    #[serde(rename = "lg")]
    Large,
}

/// Validated card contract.
#[derive(Clone)]
pub struct Card {
    content: NodeHandle,
    elevation: CardElevation,
    padding: CardPadding,
    interactive: bool,
    on_click: Option<Callback>,
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Card")
            .field("content", &self.content)
            .field("elevation", &self.elevation)
            .field("padding", &self.padding)
            .field("interactive", &self.interactive)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl Card {
    /// The card content
    pub fn content(&self) -> NodeHandle {
        self.content
    }

    /// The elevation level
    pub fn elevation(&self) -> CardElevation {
        self.elevation
    }

    /// The internal padding
    pub fn padding(&self) -> CardPadding {
        self.padding
    }

    /// Whether the card reacts to pointer interaction
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Press the card; ignored unless the card is interactive.
    pub fn press(&self) -> bool {
        if !self.interactive {
            tracing::debug!("press ignored on non-interactive card");
            return false;
        }
        if let Some(handler) = &self.on_click {
            handler();
        }
        true
    }
}

/// Fluent constructor for [`Card`]
pub struct CardBuilder {
    card: Card,
}

impl CardBuilder {
    /// Set the elevation level
    pub fn elevation(mut self, elevation: CardElevation) -> Self {
        self.card.elevation = elevation;
        self
    }

    /// Set the internal padding
    pub fn padding(mut self, padding: CardPadding) -> Self {
        self.card.padding = padding;
        self
    }

    /// Make the card clickable (hover affordance, pointer cursor)
    pub fn interactive(mut self) -> Self {
        self.card.interactive = true;
        self
    }

    /// Set the click handler for an interactive card
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.card.on_click = Some(Arc::new(handler));
        self
    }

    /// Finish the configuration
    pub fn build(self) -> Card {
        self.card
    }
}

/// Create a card around framework-owned content
pub fn card(content: NodeHandle) -> CardBuilder {
    CardBuilder {
        card: Card {
            content,
            elevation: CardElevation::default(),
            padding: CardPadding::default(),
            interactive: false,
            on_click: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn content() -> NodeHandle {
        NodeHandle::from_raw(9)
    }

    #[test]
    fn test_card_defaults() {
        let c = card(content()).build();
        assert_eq!(c.elevation(), CardElevation::Low);
        assert_eq!(c.padding(), CardPadding::Medium);
        assert!(!c.is_interactive());
        assert_eq!(c.content(), content());
    }

    #[test]
    fn test_static_card_ignores_press() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        let c = card(content())
            .on_click(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build();
        assert!(!c.press());
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_interactive_card_accepts_press() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        let c = card(content())
            .interactive()
            .on_click(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build();
        assert!(c.press());
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }
}
