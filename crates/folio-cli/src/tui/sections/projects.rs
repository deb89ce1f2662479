//! Project showcase: one block per project, the active one in full color

use folio_core::Project;
use ratatui::{
    buffer::Buffer,
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::{LandingProps, Viewport};
use crate::tui::content::projects::{COMING_SOON, HEADING, VIEW_PROJECT};
use crate::tui::state::{HitMap, HitTarget};
use crate::tui::themes::Theme;
use crate::tui::utils::wrap_text;

const MAX_TEXT_WIDTH: usize = 70;

/// Per-item drawing options
struct ItemStyle {
    active: bool,
    coming_soon: bool,
}

/// Lines of one item and the index of its "view project" line
fn item_lines(
    project: &Project,
    width: usize,
    style: &ItemStyle,
    theme: &Theme,
) -> (Vec<Line<'static>>, usize) {
    let (accent, title, body) = if style.active {
        (theme.accent_color, theme.title_color, theme.text_color)
    } else {
        (theme.dim_color, theme.dim_color, theme.dim_color)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("──── ", Style::default().fg(accent)),
            Span::styled(project.subtitle.to_uppercase(), Style::default().fg(accent)),
        ]),
        Line::styled(
            project.title.to_uppercase(),
            Style::default().fg(title).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
    ];
    for text in wrap_text(&project.description, width) {
        lines.push(Line::styled(text, Style::default().fg(body)));
    }
    lines.push(Line::default());

    if !project.technologies.is_empty() {
        let techs = project.technologies.join(" · ");
        for text in wrap_text(&techs, width) {
            lines.push(Line::styled(text, Style::default().fg(theme.dim_color)));
        }
        lines.push(Line::default());
    }

    let link_row = lines.len();
    lines.push(Line::styled(VIEW_PROJECT, Style::default().fg(body).add_modifier(Modifier::BOLD)));

    if style.coming_soon {
        lines.push(Line::default());
        lines.push(Line::styled(COMING_SOON, Style::default().fg(theme.accent_color)));
    }
    (lines, link_row)
}

pub fn render_projects(
    buf: &mut Buffer,
    vp: Viewport,
    props: &LandingProps<'_>,
    hits: &mut HitMap,
) {
    let layout = props.layout;
    let theme = props.theme;
    let x = props.content_x;
    let width = MAX_TEXT_WIDTH.min(vp.area.right().saturating_sub(x + 4) as usize);
    if width == 0 {
        return;
    }

    if layout.projects_padding >= 2 {
        vp.draw(
            buf,
            x,
            layout.projects_top as usize + layout.projects_padding as usize / 2,
            &Line::styled(HEADING, Style::default().fg(theme.dim_color).add_modifier(Modifier::BOLD)),
        );
    }

    let snapshot = props.snapshot;
    for (i, (project, &top)) in props
        .catalogue
        .projects()
        .iter()
        .zip(&layout.item_tops)
        .enumerate()
    {
        let top = top as usize;
        let height = layout.item_height;
        if vp.clip(x, top, 1, height).is_none() {
            continue;
        }

        let style = ItemStyle {
            active: snapshot.active_project == Some(i),
            coming_soon: i == 0 && snapshot.first_item_revealed,
        };
        let (lines, link_row) = item_lines(project, width, &style, theme);

        if let Some(area) = vp.clip(x, top, width as u16, height) {
            hits.push(area, HitTarget::OpenProject(i));
        }
        for (offset, line) in lines.iter().enumerate().take(height as usize) {
            vp.draw(buf, x, top + offset, line);
        }
        if link_row < height as usize {
            vp.hit(hits, x, top + link_row, VIEW_PROJECT.width() as u16, HitTarget::OpenProject(i));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::PageLayout;
    use crate::tui::THEME_REGISTRY;
    use folio_core::{LandingSnapshot, ProjectCatalogue};
    use ratatui::layout::Rect;

    fn row_text(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        (area.x..area.right()).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn test_item_lines_layout() {
        let theme = THEME_REGISTRY.get_or_default("folio");
        let project = &ProjectCatalogue::builtin().projects()[0];
        let style = ItemStyle { active: true, coming_soon: true };
        let (lines, link_row) = item_lines(project, 40, &style, theme);

        assert_eq!(lines[1].spans[0].content, project.title.to_uppercase());
        assert_eq!(lines[link_row].spans[0].content, VIEW_PROJECT);
        assert_eq!(lines.last().map(|l| l.spans[0].content.as_ref()), Some(COMING_SOON));
    }

    #[test]
    fn test_inactive_items_are_dimmed() {
        let theme = THEME_REGISTRY.get_or_default("folio");
        let project = &ProjectCatalogue::builtin().projects()[1];
        let style = ItemStyle { active: false, coming_soon: false };
        let (lines, _) = item_lines(project, 40, &style, theme);
        let title = &lines[1];
        assert_eq!(title.style.patch(title.spans[0].style).fg, Some(theme.dim_color));
    }

    #[test]
    fn test_render_visible_items_and_hits() {
        let theme = THEME_REGISTRY.get_or_default("folio");
        let catalogue = ProjectCatalogue::builtin();
        let layout = PageLayout::compute(40, catalogue.len());
        let snapshot = LandingSnapshot {
            active_project: Some(0),
            ..view_snapshot()
        };
        let props = LandingProps {
            snapshot: &snapshot,
            layout: &layout,
            catalogue,
            content_x: 4,
            theme,
        };
        let area = Rect::new(0, 0, 100, 40);
        let top = layout.item_tops[0] as usize;
        let vp = Viewport::new(area, top);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::default();
        render_projects(&mut buf, vp, &props, &mut hits);

        let title = catalogue.projects()[0].title.to_uppercase();
        assert!(row_text(&buf, 1).contains(&title));
        assert_eq!(hits.at(10, 1), Some(HitTarget::OpenProject(0)));
    }

    fn view_snapshot() -> LandingSnapshot {
        use folio_core::{HeroMask, NavState, ScrollMetrics};
        LandingSnapshot {
            metrics: ScrollMetrics::new(0.0, 40.0, 400.0),
            mask: HeroMask::default(),
            nav: NavState {
                visible: false,
                progress_percent: 0.0,
            },
            blur_band_visible: true,
            menu_open: false,
            active_project: None,
            list_visible: false,
            about_revealed: false,
            first_item_revealed: false,
        }
    }
}
