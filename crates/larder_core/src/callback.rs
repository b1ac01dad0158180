//! Shared handler signatures for component events.
//!
//! Handlers are invoked synchronously by the host framework in response to
//! user interaction. Contracts store them behind `Arc` so configurations
//! stay cloneable and thread-safe.

use std::sync::Arc;

/// Argument-less event handler (click, dismiss).
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Event handler receiving a borrowed payload (changed text, selected value).
pub type Handler<T: ?Sized> = Arc<dyn Fn(&T) + Send + Sync>;
