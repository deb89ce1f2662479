//! Input handling and frame drawing, as `impl App` blocks

pub mod keyboard;
pub mod mouse;
pub mod rendering;
