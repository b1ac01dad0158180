//! Larder Foundation Types
//!
//! This crate provides the foundational types shared by the Larder contract
//! catalog:
//!
//! - **Node Handles**: Opaque references to framework-owned rendered content
//! - **Callbacks**: Shared handler signatures for component events
//! - **Host Context**: The application's own host, used by link classification
//!
//! # Example
//!
//! ```rust
//! use larder_core::{AppHost, NodeHandle};
//!
//! let host = AppHost::new("app.example.com");
//! assert!(host.matches("App.Example.Com"));
//!
//! // Handles are minted by the host framework and carried opaquely.
//! let icon = NodeHandle::from_raw(42);
//! assert_eq!(icon.as_raw(), 42);
//! ```

pub mod callback;
pub mod host;
pub mod node;

pub use callback::{Callback, Handler};
pub use host::AppHost;
pub use node::NodeHandle;
