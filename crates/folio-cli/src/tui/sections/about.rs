//! About: heading and three paragraphs, shown once revealed

use ratatui::{
    buffer::Buffer,
    style::{Modifier, Style},
    text::Line,
};

use super::Viewport;
use crate::tui::content::about::{HEADING, PARAGRAPHS};
use crate::tui::state::PageLayout;
use crate::tui::themes::Theme;
use crate::tui::utils::wrap_text;

const MAX_TEXT_WIDTH: usize = 64;

/// Left margin that indents the block on wide terminals
fn left_margin(width: u16) -> u16 {
    (width / 8).clamp(4, 24)
}

/// Rows of text for a terminal width
pub fn about_lines(width: u16) -> Vec<String> {
    let margin = left_margin(width);
    let text_width = MAX_TEXT_WIDTH.min(width.saturating_sub(margin + 4) as usize);
    let mut lines = vec![HEADING.to_string(), String::new()];
    for (i, paragraph) in PARAGRAPHS.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(wrap_text(paragraph, text_width));
    }
    lines
}

pub fn render_about(
    buf: &mut Buffer,
    vp: Viewport,
    layout: &PageLayout,
    revealed: bool,
    theme: &Theme,
) {
    if !revealed {
        return;
    }
    let x = vp.area.x + left_margin(vp.area.width);
    let top = layout.about_top as usize + 2;
    let bottom = layout.projects_top as usize;

    for (i, text) in about_lines(vp.area.width).into_iter().enumerate() {
        let row = top + i;
        if row >= bottom {
            break;
        }
        let style = if i == 0 {
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_color)
        };
        vp.draw(buf, x, row, &Line::styled(text, style));
    }
}
