//! Folio Core - Scroll-driven view state for the Folio portfolio
//!
//! This crate provides everything the front end needs besides drawing:
//! - Scroll metrics sampling with anti-overscroll correction
//! - Viewport intersection tracking over an element arena
//! - Hero mask, nav visibility, active project and one-shot reveal state
//! - The landing view coordinator tying them together
//! - Project catalogue, routing, and user configuration

pub mod config;
pub mod constants;
pub mod coordinator;
pub mod error;
pub mod intersection;
pub mod mask;
pub mod metrics;
pub mod nav;
pub mod paths;
pub mod projects;
pub mod reveal;
pub mod route;
pub mod tracker;

#[cfg(test)]
mod coordinator_tests;

// Re-exports for convenience
pub use config::Config;
pub use coordinator::{CoordinatorOptions, LandingLayout, LandingSnapshot, LandingView};
pub use error::{ConfigError, FolioError, Result};
pub use intersection::ElementBounds;
pub use mask::{DiamondGeometry, DiamondMaskState, HeroMask};
pub use metrics::{ScrollHost, ScrollMetrics};
pub use nav::{NavState, Section};
pub use projects::{Project, ProjectCatalogue, Resolution};
pub use route::{ResolvedView, Route};
pub use tracker::SidebarNode;
