//! Browser Command Wrappers
//!
//! Frontend bindings to the character API and browser dialogs, organized by concern.

mod catalog;
mod dialog;
mod navigation;

// Re-export all public items
pub use catalog::*;
pub use dialog::*;
pub use navigation::*;
