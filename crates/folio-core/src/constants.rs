//! Application constants and configuration defaults
//!
//! Centralized location for thresholds and default values

use std::time::Duration;

/// Hero diamond mask policy (all positions are multiples of viewport height)
pub mod mask {
    /// Scroll position (in viewport heights) where backdrop dimming reaches its cap
    pub const DIM_END_VIEWPORTS: f64 = 1.6;

    /// Maximum backdrop dim opacity
    pub const MAX_OPACITY: f64 = 0.8;

    /// End of the hero zone - mask pins after this point
    pub const HERO_END_VIEWPORTS: f64 = 1.7;

    /// Start of the projects zone - mask disappears after this point
    pub const PROJECTS_START_VIEWPORTS: f64 = 3.0;

    /// Mask size at the very top of the page
    pub const INITIAL_SIZE: f64 = 145.0;

    /// How much size is removed per unit of opacity
    pub const SHRINK_FACTOR: f64 = 160.0;

    /// Size reported once the mask is hidden
    pub const HIDDEN_SIZE: f64 = 50.0;

    /// Diamond center, as percentages of the backdrop
    pub const CENTER_X_PCT: f64 = 80.0;
    pub const CENTER_Y_PCT: f64 = 50.0;

    /// Half extent of the diamond in percent per unit of size
    pub const EXTENT_PER_SIZE: f64 = 1.3;

    /// Backdrop zoom per unit of opacity
    pub const BACKDROP_ZOOM: f64 = 0.015;
}

/// Navigation bar policy
pub mod nav {
    use super::*;

    /// Below this scroll position the nav is always shown
    pub const ALWAYS_VISIBLE_BELOW: f64 = 100.0;

    /// Delay before the entrance animation reveals the nav
    pub const ENTRANCE_DELAY: Duration = Duration::from_millis(500);
}

/// Intersection observer configurations
pub mod observe {
    /// Per-item thresholds for the active project tracker
    pub const ITEM_THRESHOLDS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

    /// Ratio an item must exceed to become active
    pub const ACTIVE_RATIO: f64 = 0.5;

    /// Per-item band narrowing (fraction of viewport height, top and bottom)
    pub const ITEM_MARGIN: f64 = 0.2;

    /// Container visibility threshold
    pub const CONTAINER_THRESHOLD: f64 = 0.15;

    /// Container band narrowing (fraction of viewport height, top and bottom)
    pub const CONTAINER_MARGIN: f64 = 0.1;

    /// One-shot reveal threshold (text blocks and the first list item)
    pub const REVEAL_THRESHOLD: f64 = 0.5;
}

/// UI configuration
pub mod ui {
    use super::*;

    /// Config directory name
    pub const CONFIG_DIR_NAME: &str = ".folio";

    /// Config file name inside the config directory
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Logs subdirectory name
    pub const LOGS_DIR_NAME: &str = "logs";

    /// Default theme name
    pub const DEFAULT_THEME: &str = "folio";

    /// Redraw interval for the event loop
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

    /// Rows scrolled per wheel notch / arrow key
    pub const SCROLL_STEP: u16 = 3;
}
