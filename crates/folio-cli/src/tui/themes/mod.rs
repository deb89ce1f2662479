//! Color themes
//!
//! A theme is a flat set of colors. The backdrop pair is blended toward the
//! page background as the hero dims, so it should use RGB values.

mod definitions;
mod registry;

use once_cell::sync::Lazy;
use ratatui::style::Color;

pub use registry::ThemeRegistry;

/// Global theme registry
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// A named color theme
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub display_name: String,

    /// Page background
    pub bg_color: Color,
    /// Blur band and panels
    pub surface_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    /// Primary accent (links, progress, active nodes)
    pub accent_color: Color,
    pub border_color: Color,
    pub title_color: Color,
    pub success_color: Color,
    pub warning_color: Color,
    pub error_color: Color,

    /// Hero backdrop pattern, light and dark
    pub backdrop_colors: [Color; 2],
}

/// Linear blend between two colors; non-RGB colors snap at the midpoint
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_rgb() {
        let black = Color::Rgb(0, 0, 0);
        let white = Color::Rgb(200, 100, 50);
        assert_eq!(blend(black, white, 0.0), black);
        assert_eq!(blend(black, white, 1.0), white);
        assert_eq!(blend(black, white, 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(blend(black, white, f64::NAN), black);
    }

    #[test]
    fn test_blend_named_colors() {
        assert_eq!(blend(Color::Red, Color::Blue, 0.2), Color::Red);
        assert_eq!(blend(Color::Red, Color::Blue, 0.8), Color::Blue);
    }
}
