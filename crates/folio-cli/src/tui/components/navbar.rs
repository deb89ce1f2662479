//! Navbar, blur band, and scroll progress line
//!
//! Drawn over the page content. The blur band mutes whatever scrolls under
//! the top rows; the navbar itself slides away entirely when hidden.

use folio_core::{NavState, Section};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::content::{OWNER_NAME, OWNER_ROLE};
use crate::tui::state::{HitMap, HitTarget};
use crate::tui::themes::Theme;

/// Navbar rows: title row plus progress line
pub const NAV_HEIGHT: u16 = 2;

/// Rows muted by the blur band
const BAND_HEIGHT: u16 = 3;

/// Below this width links collapse into the menu toggle
const COMPACT_WIDTH: u16 = 72;

const MENU_WIDTH: u16 = 20;
const LINK_GAP: u16 = 3;

/// Everything the navbar needs for one frame
pub struct NavbarProps<'a> {
    pub nav: NavState,
    pub blur_band_visible: bool,
    pub menu_open: bool,
    pub theme: &'a Theme,
}

pub fn render_navbar(buf: &mut Buffer, area: Rect, props: &NavbarProps<'_>, hits: &mut HitMap) {
    let theme = props.theme;

    if props.blur_band_visible {
        for y in area.y..area.y + BAND_HEIGHT.min(area.height) {
            for x in area.x..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_fg(theme.dim_color).set_bg(theme.surface_color);
                }
            }
        }
    }

    if !props.nav.visible || area.height < NAV_HEIGHT {
        return;
    }

    let y = area.y;
    let name_style = Style::default()
        .fg(theme.accent_color)
        .add_modifier(Modifier::BOLD);
    let (end, _) = buf.set_stringn(area.x + 2, y, OWNER_NAME, usize::MAX, name_style);
    let links_width = links_width();
    let compact = area.width < COMPACT_WIDTH;

    let role_x = end + 2;
    let role_fits = if compact {
        role_x + OWNER_ROLE.width() as u16 + 10 < area.right()
    } else {
        role_x + OWNER_ROLE.width() as u16 + links_width + 4 < area.right()
    };
    if role_fits {
        buf.set_string(role_x, y, OWNER_ROLE, Style::default().fg(theme.dim_color));
    }

    if compact {
        let label = "≡ MENU";
        let x = area.right().saturating_sub(label.width() as u16 + 2);
        let style = if props.menu_open {
            Style::default().fg(theme.accent_color)
        } else {
            Style::default().fg(theme.text_color)
        };
        buf.set_string(x, y, label, style);
        hits.push(Rect::new(x, y, label.width() as u16, 1), HitTarget::MenuToggle);
    } else {
        let mut x = area.right().saturating_sub(links_width + 2);
        for (i, section) in Section::ALL.into_iter().enumerate() {
            let start = x;
            let (after_num, _) = buf.set_stringn(
                x,
                y,
                format!("{} ", i + 1),
                usize::MAX,
                Style::default().fg(theme.dim_color),
            );
            let (after_label, _) = buf.set_stringn(
                after_num,
                y,
                section.label(),
                usize::MAX,
                Style::default().fg(theme.text_color),
            );
            hits.push(
                Rect::new(start, y, after_label - start, 1),
                HitTarget::NavLink(section),
            );
            x = after_label + LINK_GAP;
        }
    }

    render_progress(buf, Rect::new(area.x, y + 1, area.width, 1), props.nav.progress_percent, theme);

    if props.menu_open {
        render_menu(buf, area, theme, hits);
    }
}

fn links_width() -> u16 {
    let labels: usize = Section::ALL.iter().map(|s| s.label().width() + 2).sum();
    labels as u16 + LINK_GAP * (Section::ALL.len() as u16 - 1)
}

/// Filled share of the line tracks page progress
fn render_progress(buf: &mut Buffer, area: Rect, percent: f64, theme: &Theme) {
    let filled = progress_cells(area.width, percent);
    for (i, x) in (area.x..area.right()).enumerate() {
        let (ch, color) = if (i as u16) < filled {
            ('━', theme.accent_color)
        } else {
            ('─', theme.border_color)
        };
        if let Some(cell) = buf.cell_mut((x, area.y)) {
            cell.set_char(ch).set_fg(color);
        }
    }
}

fn progress_cells(width: u16, percent: f64) -> u16 {
    if !percent.is_finite() {
        return 0;
    }
    ((width as f64) * percent.clamp(0.0, 100.0) / 100.0).round() as u16
}

fn render_menu(buf: &mut Buffer, area: Rect, theme: &Theme, hits: &mut HitMap) {
    let height = Section::ALL.len() as u16 + 2;
    if area.width < MENU_WIDTH + 2 || area.height < NAV_HEIGHT + height {
        return;
    }
    let menu = Rect::new(
        area.right() - MENU_WIDTH - 2,
        area.y + NAV_HEIGHT,
        MENU_WIDTH,
        height,
    );
    Clear.render(menu, buf);
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent_color))
        .style(Style::default().bg(theme.bg_color))
        .render(menu, buf);

    for (i, section) in Section::ALL.into_iter().enumerate() {
        let y = menu.y + 1 + i as u16;
        buf.set_string(menu.x + 2, y, format!("{}", i + 1), Style::default().fg(theme.dim_color));
        buf.set_string(
            menu.x + 5,
            y,
            section.label().to_uppercase(),
            Style::default().fg(theme.text_color),
        );
        hits.push(Rect::new(menu.x + 1, y, MENU_WIDTH - 2, 1), HitTarget::NavLink(section));
    }
}
