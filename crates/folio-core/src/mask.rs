//! Hero diamond mask derivation
//!
//! Pure function of a [`ScrollMetrics`] snapshot. Three absolute scroll zones,
//! expressed in viewport heights: shrinking (hero), pinned (about), hidden.

use crate::constants::mask::*;
use crate::metrics::ScrollMetrics;

/// Decorative mask over the hero backdrop
///
/// `size` is only meaningful while `visible` is true. It is not clamped and
/// can dip below zero near the end of the hero zone; renderers draw nothing
/// for `size <= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiamondMaskState {
    pub size: f64,
    pub visible: bool,
    pub fixed: bool,
}

impl Default for DiamondMaskState {
    fn default() -> Self {
        Self {
            size: INITIAL_SIZE,
            visible: true,
            fixed: false,
        }
    }
}

/// Diamond polygon in percentages of the backdrop area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiamondGeometry {
    pub center_x_pct: f64,
    pub center_y_pct: f64,
    pub half_extent_pct: f64,
}

impl DiamondGeometry {
    /// Whether a point (in percent of the backdrop) is inside the diamond
    ///
    /// Width and height are scaled independently, matching a clip polygon
    /// whose vertices sit at `center ± extent` on each axis.
    pub fn contains(&self, x_pct: f64, y_pct: f64) -> bool {
        if self.half_extent_pct <= 0.0 {
            return false;
        }
        let dx = (x_pct - self.center_x_pct).abs();
        let dy = (y_pct - self.center_y_pct).abs();
        dx + dy <= self.half_extent_pct
    }
}

impl DiamondMaskState {
    /// Clip geometry for this state
    pub fn geometry(&self) -> DiamondGeometry {
        DiamondGeometry {
            center_x_pct: CENTER_X_PCT,
            center_y_pct: CENTER_Y_PCT,
            half_extent_pct: self.size * EXTENT_PER_SIZE,
        }
    }

    /// Whether anything should be drawn
    pub fn is_drawn(&self) -> bool {
        self.visible && self.size > 0.0
    }
}

/// Mask state plus the backdrop dimming it was derived from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroMask {
    pub state: DiamondMaskState,
    /// Backdrop dim opacity in [0, MAX_OPACITY]
    pub opacity: f64,
}

impl Default for HeroMask {
    fn default() -> Self {
        Self {
            state: DiamondMaskState::default(),
            opacity: 0.0,
        }
    }
}

impl HeroMask {
    /// Backdrop zoom that grows slightly with dimming
    pub fn backdrop_scale(&self) -> f64 {
        1.0 + self.opacity * BACKDROP_ZOOM
    }
}

/// Backdrop dimming: linear from the top of the page to 1.6 viewports, capped
pub fn dim_opacity(metrics: &ScrollMetrics) -> f64 {
    let end = metrics.viewport_height * DIM_END_VIEWPORTS;
    if end <= 0.0 {
        return if metrics.scroll_y > 0.0 { MAX_OPACITY } else { 0.0 };
    }
    (metrics.scroll_y / end).clamp(0.0, MAX_OPACITY)
}

/// Derive the mask for one snapshot
pub fn derive_mask(metrics: &ScrollMetrics) -> HeroMask {
    let opacity = dim_opacity(metrics);
    let h = metrics.viewport_height;
    let y = metrics.scroll_y;

    let state = if y < h * HERO_END_VIEWPORTS {
        DiamondMaskState {
            size: INITIAL_SIZE - opacity * SHRINK_FACTOR,
            visible: true,
            fixed: false,
        }
    } else if y < h * PROJECTS_START_VIEWPORTS {
        DiamondMaskState {
            size: 0.0,
            visible: true,
            fixed: true,
        }
    } else {
        DiamondMaskState {
            size: HIDDEN_SIZE,
            visible: false,
            fixed: false,
        }
    };

    HeroMask { state, opacity }
}
