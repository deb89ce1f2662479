//! Contact: headline, link buttons, footer

use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::{spaced, Viewport};
use crate::tui::content::contact::{FOOTER_SUFFIX, HEADLINE};
use crate::tui::links::ContactLink;
use crate::tui::state::{HitMap, HitTarget, PageLayout};
use crate::tui::themes::Theme;
use crate::tui::utils::{align_right, center};

fn footer() -> String {
    format!("© {} • {}", chrono::Local::now().year(), FOOTER_SUFFIX)
}

fn button_label(link: ContactLink) -> String {
    format!("[{}]  {}", link.key(), link.label())
}

pub fn render_contact(
    buf: &mut Buffer,
    vp: Viewport,
    layout: &PageLayout,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let top = layout.contact_top as usize;
    let h = layout.viewport as usize;
    if h == 0 {
        return;
    }
    let width = vp.area.width;
    let title = Style::default()
        .fg(theme.title_color)
        .add_modifier(Modifier::BOLD);

    let first = top + (h / 2).saturating_sub(4);
    for (i, link) in ContactLink::ALL.into_iter().enumerate() {
        let label = button_label(link);
        let x = vp.area.x + align_right(&label, width, 4);
        let row = first + i * 2;
        vp.draw(
            buf,
            x,
            row,
            &Line::from(vec![
                Span::styled(format!("[{}]", link.key()), Style::default().fg(theme.dim_color)),
                Span::raw("  "),
                Span::styled(link.label(), title),
            ]),
        );
        vp.hit(hits, x, row, label.width() as u16, HitTarget::Contact(link));
    }

    if h >= 6 {
        let x = vp.area.x + 4;
        vp.draw(buf, x, top + h - 5, &Line::styled(spaced(HEADLINE[0]), title));
        let (touch, rest) = HEADLINE[1].split_once(' ').unwrap_or((HEADLINE[1], ""));
        vp.draw(
            buf,
            x,
            top + h - 4,
            &Line::from(vec![
                Span::styled(
                    spaced(touch),
                    Style::default()
                        .fg(theme.accent_color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled(spaced(rest), title),
            ]),
        );
    }

    let footer = footer();
    vp.draw(
        buf,
        vp.area.x + center(&footer, width),
        top + h - 1,
        &Line::styled(footer, Style::default().fg(theme.dim_color)),
    );
}
