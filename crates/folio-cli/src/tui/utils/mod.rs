//! Utilities for the TUI
//!
//! Common helper functions used throughout the TUI.

mod text;

pub use text::{align_right, center, draw_transparent, truncate_ellipsis, wrap_text};
