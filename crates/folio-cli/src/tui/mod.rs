//! Terminal front end for the portfolio

pub mod app;
pub mod components;
pub mod content;
pub mod handlers;
pub mod links;
pub mod sections;
pub mod state;
pub mod themes;
pub mod utils;

pub use app::App;
pub use themes::THEME_REGISTRY;
