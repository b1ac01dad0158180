//! # Larder Component Contract Catalog (larder_ui)
//!
//! Validated prop contracts for the Larder design-system components.
//!
//! ## Philosophy
//!
//! A contract is the complete description of one component instance: its
//! variant, size, content slots, and handlers. The catalog validates each
//! configuration as it is built and resolves the few derived fields
//! (validation state, link externality), then hands the host framework an
//! immutable record to render from.
//!
//! - **Foundation**: `larder_core` provides opaque node handles, handler
//!   signatures, and the application host context
//! - **Contracts**: `larder_ui` provides one validated configuration type
//!   per component
//! - **Rendering**: owned entirely by the host framework; the catalog never
//!   draws, styles, or stores view state
//!
//! ## Example
//!
//! ```ignore
//! use larder_ui::prelude::*;
//!
//! // Button with variants
//! ui::button("Save Changes")
//!     .variant(ButtonVariant::Primary)
//!     .size(ButtonSize::Medium)
//!     .on_click(|| println!("saved"))
//!     .build()
//!
//! // Form field with a derived validation state
//! ui::input()
//!     .label("Quantity")
//!     .error("Required field")
//!     .build()
//!
//! // Tab set validated against its active id
//! ui::tab_navigation("inventory")
//!     .tab(Tab::new("inventory", "Inventory"))
//!     .tab(Tab::new("shopping", "Shopping List").badge(5))
//!     .on_change(|id: &str| println!("switch to {id}"))
//!     .build()?
//! ```

pub mod components;
pub mod error;

pub use components::*;
pub use error::{ConfigError, Result};

/// Convenience module for accessing constructors with a `ui::` prefix
pub mod ui {
    pub use crate::components::alert::alert;
    pub use crate::components::badge::badge;
    pub use crate::components::button::{button, icon_button};
    pub use crate::components::card::card;
    pub use crate::components::empty_state::empty_state;
    pub use crate::components::input::input;
    pub use crate::components::link::link;
    pub use crate::components::page_header::page_header;
    pub use crate::components::select::select;
    pub use crate::components::spinner::loading_spinner;
    pub use crate::components::tabs::tab_navigation;
    pub use crate::components::textarea::textarea;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::components::*;
    pub use crate::error::{ConfigError, Result};
    pub use crate::ui;
    // Re-export commonly needed foundation types
    pub use larder_core::{AppHost, Callback, Handler, NodeHandle};
}
