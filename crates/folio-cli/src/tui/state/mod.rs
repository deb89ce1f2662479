//! UI state owned by the app

mod hits;
mod layout;
mod scroll;

pub use hits::{HitMap, HitTarget};
pub use layout::{PageBlock, PageLayout};
pub use scroll::PageScroll;
