//! Built-in theme definitions

use ratatui::style::Color;

use super::Theme;

/// Warm sand on charcoal
pub fn folio() -> Theme {
    Theme {
        name: "folio".to_string(),
        display_name: "Folio".to_string(),
        bg_color: Color::Rgb(18, 18, 18),
        surface_color: Color::Rgb(30, 31, 36),
        text_color: Color::Rgb(236, 236, 236),
        dim_color: Color::Rgb(110, 110, 115),
        accent_color: Color::Rgb(225, 202, 150),
        border_color: Color::Rgb(60, 62, 70),
        title_color: Color::Rgb(255, 255, 255),
        success_color: Color::Rgb(152, 195, 121),
        warning_color: Color::Rgb(229, 192, 123),
        error_color: Color::Rgb(224, 108, 117),
        backdrop_colors: [Color::Rgb(120, 104, 82), Color::Rgb(64, 56, 46)],
    }
}

/// Ink on newsprint
pub fn paper() -> Theme {
    Theme {
        name: "paper".to_string(),
        display_name: "Paper".to_string(),
        bg_color: Color::Rgb(244, 240, 232),
        surface_color: Color::Rgb(228, 222, 210),
        text_color: Color::Rgb(34, 34, 34),
        dim_color: Color::Rgb(140, 136, 128),
        accent_color: Color::Rgb(176, 58, 46),
        border_color: Color::Rgb(200, 194, 182),
        title_color: Color::Rgb(0, 0, 0),
        success_color: Color::Rgb(46, 125, 50),
        warning_color: Color::Rgb(191, 128, 0),
        error_color: Color::Rgb(176, 58, 46),
        backdrop_colors: [Color::Rgb(196, 184, 160), Color::Rgb(160, 148, 126)],
    }
}

/// High contrast monochrome
pub fn noir() -> Theme {
    Theme {
        name: "noir".to_string(),
        display_name: "Noir".to_string(),
        bg_color: Color::Rgb(0, 0, 0),
        surface_color: Color::Rgb(24, 24, 24),
        text_color: Color::Rgb(250, 250, 250),
        dim_color: Color::Rgb(100, 100, 100),
        accent_color: Color::Rgb(255, 255, 255),
        border_color: Color::Rgb(70, 70, 70),
        title_color: Color::Rgb(255, 255, 255),
        success_color: Color::Rgb(200, 200, 200),
        warning_color: Color::Rgb(180, 180, 180),
        error_color: Color::Rgb(255, 255, 255),
        backdrop_colors: [Color::Rgb(90, 90, 90), Color::Rgb(40, 40, 40)],
    }
}

/// Native terminal colors
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        display_name: "Terminal".to_string(),
        bg_color: Color::Reset,
        surface_color: Color::DarkGray,
        text_color: Color::Reset,
        dim_color: Color::DarkGray,
        accent_color: Color::Yellow,
        border_color: Color::DarkGray,
        title_color: Color::White,
        success_color: Color::Green,
        warning_color: Color::Yellow,
        error_color: Color::Red,
        backdrop_colors: [Color::Gray, Color::DarkGray],
    }
}
