//! Browser Bindings
//!
//! Thin wrappers over the browser APIs the app touches, organized by concern.
//! Failures come back as values; callers turn them into toasts.

mod clipboard;
mod recipe;
mod speech;
mod window;

// Re-export all public items
pub use clipboard::*;
pub use recipe::*;
pub use speech::*;
pub use window::*;
