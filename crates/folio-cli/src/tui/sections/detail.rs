//! Project detail page

use folio_core::Project;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::content::detail::{BACK, GITHUB, OVERVIEW, SHOWCASE, TECHNOLOGIES, VISIT};
use crate::tui::state::{HitMap, HitTarget};
use crate::tui::themes::Theme;
use crate::tui::utils::wrap_text;

const MARGIN: u16 = 4;
const MAX_TEXT_WIDTH: usize = 76;

/// Pre-wrapped detail page with the rows of its links
#[derive(Debug, Clone)]
pub struct DetailPage {
    pub lines: Vec<Line<'static>>,
    pub back_row: usize,
    pub visit_row: Option<usize>,
    pub github_row: Option<usize>,
}

impl DetailPage {
    pub fn build(project: &Project, width: u16, theme: &Theme) -> Self {
        let text_width = MAX_TEXT_WIDTH.min(width.saturating_sub(MARGIN * 2) as usize).max(1);
        let heading = Style::default()
            .fg(theme.title_color)
            .add_modifier(Modifier::BOLD);
        let body = Style::default().fg(theme.text_color);
        let link = Style::default()
            .fg(theme.accent_color)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::styled(BACK, Style::default().fg(theme.dim_color)),
            Line::default(),
            Line::from(vec![
                Span::styled("──── ", Style::default().fg(theme.accent_color)),
                Span::styled(
                    project.subtitle.to_uppercase(),
                    Style::default().fg(theme.accent_color),
                ),
            ]),
            Line::styled(project.title.to_uppercase(), heading),
            Line::default(),
        ];

        let mut visit_row = None;
        if project.unique_url.is_some() {
            visit_row = Some(lines.len());
            lines.push(Line::styled(VISIT, link));
            lines.push(Line::default());
        }

        let paragraph = |lines: &mut Vec<Line<'static>>, text: &str| {
            for row in wrap_text(text, text_width) {
                lines.push(Line::styled(row, body));
            }
            lines.push(Line::default());
        };

        paragraph(&mut lines, &project.description);

        lines.push(Line::styled(OVERVIEW, heading));
        lines.push(Line::default());
        paragraph(&mut lines, &project.overview);

        lines.push(Line::styled(TECHNOLOGIES, heading));
        lines.push(Line::default());
        for tech in &project.technologies {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(theme.accent_color)),
                Span::styled(tech.clone(), body),
            ]));
        }
        lines.push(Line::default());

        let media: Vec<&str> = project
            .youtube_url
            .iter()
            .map(String::as_str)
            .chain(project.screenshots.iter().map(String::as_str))
            .collect();
        if !media.is_empty() {
            lines.push(Line::styled(SHOWCASE, heading));
            lines.push(Line::default());
            for item in media {
                lines.push(Line::styled(item.to_string(), Style::default().fg(theme.dim_color)));
            }
            lines.push(Line::default());
        }

        let mut github_row = None;
        if project.github_url.is_some() {
            github_row = Some(lines.len());
            lines.push(Line::styled(GITHUB, link));
        }

        Self {
            lines,
            back_row: 0,
            visit_row,
            github_row,
        }
    }

    pub fn height(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }
}

/// Draw the page scrolled to `top`
pub fn render_detail(buf: &mut Buffer, area: Rect, page: &DetailPage, top: usize, hits: &mut HitMap) {
    let x = area.x + MARGIN;
    let width = area.width.saturating_sub(MARGIN);
    for (i, line) in page.lines.iter().enumerate().skip(top) {
        let dy = i - top;
        if dy >= area.height as usize {
            break;
        }
        buf.set_line(x, area.y + dy as u16, line, width);
    }

    let links = [
        (Some(page.back_row), BACK, HitTarget::Back),
        (page.visit_row, VISIT, HitTarget::VisitProject),
        (page.github_row, GITHUB, HitTarget::ProjectGithub),
    ];
    for (row, label, target) in links {
        let Some(row) = row else { continue };
        if row >= top && row - top < area.height as usize {
            hits.push(
                Rect::new(x, area.y + (row - top) as u16, label.width() as u16, 1),
                target,
            );
        }
    }
}
