//! Project progress sidebar
//!
//! A vertical rail of nodes pinned to the left edge while the project list
//! is on screen. Connectors up to the active project are lit.

use folio_core::SidebarNode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::tui::state::{HitMap, HitTarget};
use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

/// Columns reserved for the sidebar
pub const SIDEBAR_WIDTH: u16 = 26;

/// Narrower terminals skip the sidebar
pub const MIN_TERMINAL_WIDTH: u16 = 90;

const CONNECTOR_ROWS: u16 = 2;

/// One node on the rail
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarItem<'a> {
    pub title: &'a str,
    pub node: SidebarNode,
    /// Connector leading into this node
    pub lit: bool,
}

/// Whether the sidebar fits in this width
pub fn fits(width: u16) -> bool {
    width >= MIN_TERMINAL_WIDTH
}

pub fn render_sidebar(
    buf: &mut Buffer,
    area: Rect,
    items: &[SidebarItem<'_>],
    theme: &Theme,
    hits: &mut HitMap,
) {
    if items.is_empty() || !fits(area.width) {
        return;
    }
    let count = items.len() as u16;
    let total = count + (count - 1) * CONNECTOR_ROWS;
    if total > area.height {
        return;
    }

    let x = area.x + 2;
    let mut y = area.y + (area.height - total) / 2;
    let title_width = (SIDEBAR_WIDTH - 6) as usize;

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            let color = if item.lit {
                theme.accent_color
            } else {
                theme.border_color
            };
            for _ in 0..CONNECTOR_ROWS {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char('│').set_fg(color);
                }
                y += 1;
            }
        }

        let (glyph, glyph_color, title_style) = match item.node {
            SidebarNode::Active => (
                '◆',
                theme.accent_color,
                Style::default()
                    .fg(theme.accent_color)
                    .add_modifier(Modifier::BOLD),
            ),
            SidebarNode::Passed => ('●', theme.accent_color, Style::default().fg(theme.dim_color)),
            SidebarNode::Upcoming => ('○', theme.text_color, Style::default().fg(theme.dim_color)),
        };
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(glyph).set_fg(glyph_color);
        }
        let title = truncate_ellipsis(&item.title.to_uppercase(), title_width);
        buf.set_string(x + 2, y, &title, title_style);
        hits.push(Rect::new(x, y, SIDEBAR_WIDTH - 2, 1), HitTarget::SidebarNode(i));
        y += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::THEME_REGISTRY;

    fn items() -> Vec<SidebarItem<'static>> {
        vec![
            SidebarItem { title: "Krumbz", node: SidebarNode::Passed, lit: true },
            SidebarItem { title: "Algo", node: SidebarNode::Active, lit: true },
            SidebarItem { title: "Claw", node: SidebarNode::Upcoming, lit: false },
        ]
    }

    #[test]
    fn test_rail_layout() {
        let theme = THEME_REGISTRY.get_or_default("folio");
        let area = Rect::new(0, 0, 100, 11);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::default();
        render_sidebar(&mut buf, area, &items(), theme, &mut hits);

        // 7 rows centered in 11: nodes at 2, 5, 8
        assert_eq!(buf[(2, 2)].symbol(), "●");
        assert_eq!(buf[(2, 3)].fg, theme.accent_color);
        assert_eq!(buf[(2, 5)].symbol(), "◆");
        assert_eq!(buf[(2, 6)].fg, theme.border_color);
        assert_eq!(buf[(2, 8)].symbol(), "○");
        assert_eq!(hits.at(5, 8), Some(HitTarget::SidebarNode(2)));
    }

    #[test]
    fn test_narrow_terminal_skips_sidebar() {
        let theme = THEME_REGISTRY.get_or_default("folio");
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::default();
        render_sidebar(&mut buf, area, &items(), theme, &mut hits);
        assert_eq!(hits.len(), 0);
    }
}
