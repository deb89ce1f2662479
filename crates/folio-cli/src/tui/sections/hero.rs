//! Hero: the masked backdrop and the headline over it

use folio_core::constants::mask::{CENTER_X_PCT, CENTER_Y_PCT};
use folio_core::HeroMask;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{spaced, Viewport};
use crate::tui::content::hero::{BLURB, HEADLINE, KICKER, SCROLL_HINT};
use crate::tui::state::PageLayout;
use crate::tui::themes::{blend, Theme};
use crate::tui::utils::{center, wrap_text};

/// Pattern glyphs from dense to sparse
const RINGS: [char; 4] = ['█', '▓', '▒', '░'];

const BLURB_WIDTH: usize = 46;

/// Backdrop cell at a position relative to the diamond center
///
/// `du`/`dv` are in cells, already divided by the backdrop zoom.
fn pattern(du: f64, dv: f64) -> (char, usize) {
    let ring = ((du.abs() / 2.0 + dv.abs()).floor() as i64).rem_euclid(RINGS.len() as i64) as usize;
    (RINGS[ring], ring / 2)
}

/// Fixed backdrop, visible only inside the diamond
pub fn render_backdrop(buf: &mut Buffer, area: Rect, mask: &HeroMask, theme: &Theme) {
    if area.width == 0 || area.height == 0 || !mask.state.visible {
        return;
    }

    if mask.state.fixed {
        let x = area.x + (area.width as f64 * CENTER_X_PCT / 100.0) as u16;
        let y = area.y + (area.height as f64 * CENTER_Y_PCT / 100.0) as u16;
        if let Some(cell) = buf.cell_mut((x.min(area.right() - 1), y.min(area.bottom() - 1))) {
            cell.set_char('◆').set_fg(theme.accent_color);
        }
        return;
    }

    if !mask.state.is_drawn() {
        return;
    }

    let geometry = mask.state.geometry();
    let scale = mask.backdrop_scale();
    let (w, h) = (area.width as f64, area.height as f64);
    let cx = w * CENTER_X_PCT / 100.0;
    let cy = h * CENTER_Y_PCT / 100.0;

    for row in 0..area.height {
        for col in 0..area.width {
            let px = col as f64 + 0.5;
            let py = row as f64 + 0.5;
            if !geometry.contains(px / w * 100.0, py / h * 100.0) {
                continue;
            }
            let (ch, shade) = pattern((px - cx) / scale, (py - cy) / scale);
            let fg = blend(theme.backdrop_colors[shade], theme.bg_color, mask.opacity);
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_char(ch).set_fg(fg).set_bg(theme.bg_color);
            }
        }
    }
}

/// Kicker, headline and blurb in the first viewport of the page
pub fn render_hero(buf: &mut Buffer, vp: Viewport, layout: &PageLayout, theme: &Theme) {
    let h = layout.viewport as usize;
    let x = vp.area.x + 4;
    let mut row = (h / 2).saturating_sub(4);

    vp.draw(
        buf,
        x,
        row,
        &Line::styled(KICKER, Style::default().fg(theme.accent_color).add_modifier(Modifier::BOLD)),
    );
    row += 1;

    for (i, text) in HEADLINE.iter().enumerate() {
        let color = if i == 0 { theme.title_color } else { theme.accent_color };
        vp.draw(
            buf,
            x,
            row,
            &Line::styled(spaced(text), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        );
        row += 1;
    }
    row += 1;

    let width = BLURB_WIDTH.min(vp.area.width.saturating_sub(8) as usize);
    for text in wrap_text(BLURB, width) {
        vp.draw(buf, x, row, &Line::from(Span::styled(text, Style::default().fg(theme.text_color))));
        row += 1;
    }

    if h >= 4 {
        let hint_x = vp.area.x + center(SCROLL_HINT, vp.area.width);
        vp.draw(
            buf,
            hint_x,
            h - 2,
            &Line::styled(SCROLL_HINT, Style::default().fg(theme.dim_color)),
        );
    }
}
