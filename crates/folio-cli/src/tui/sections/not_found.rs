//! Unknown project page

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::content::detail::{BACK_HOME, NOT_FOUND};
use crate::tui::state::{HitMap, HitTarget};
use crate::tui::themes::Theme;
use crate::tui::utils::{center, truncate_ellipsis};

/// Centered message with the requested path, shown as given, and a way home
pub fn render_not_found(
    buf: &mut Buffer,
    area: Rect,
    requested: &str,
    theme: &Theme,
    hits: &mut HitMap,
) {
    if area.height < 5 {
        return;
    }
    let y = area.y + area.height / 2 - 2;
    let path = truncate_ellipsis(requested, area.width.saturating_sub(4) as usize);
    let home = format!("[ {} ]", BACK_HOME);

    buf.set_string(
        area.x + center(NOT_FOUND, area.width),
        y,
        NOT_FOUND,
        Style::default()
            .fg(theme.title_color)
            .add_modifier(Modifier::BOLD),
    );
    buf.set_string(
        area.x + center(&path, area.width),
        y + 1,
        &path,
        Style::default().fg(theme.warning_color),
    );

    let x = area.x + center(&home, area.width);
    buf.set_string(x, y + 3, &home, Style::default().fg(theme.accent_color));
    hits.push(Rect::new(x, y + 3, home.width() as u16, 1), HitTarget::Back);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::THEME_REGISTRY;

    #[test]
    fn test_not_found_page() {
        let theme = THEME_REGISTRY.get_or_default("folio");
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::default();
        render_not_found(&mut buf, area, "/project/nope", theme, &mut hits);

        let row = |y: u16| -> String { (0..40).map(|x| buf[(x, y)].symbol().to_string()).collect() };
        assert_eq!(row(3).trim(), NOT_FOUND);
        assert_eq!(row(4).trim(), "/project/nope");
        assert_eq!(hits.at(20, 6), Some(HitTarget::Back));
    }
}
