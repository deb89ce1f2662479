//! Page sections
//!
//! Landing sections are laid out in page rows (see [`PageLayout`]) and drawn
//! through a [`Viewport`] that maps page rows to screen rows. The hero
//! backdrop is the exception: it stays fixed to the screen.

mod about;
mod contact;
mod detail;
mod hero;
mod not_found;
mod projects;

pub use detail::{render_detail, DetailPage};
pub use not_found::render_not_found;

use folio_core::{LandingSnapshot, ProjectCatalogue};
use ratatui::{buffer::Buffer, layout::Rect, text::Line};

use crate::tui::state::{HitMap, HitTarget, PageLayout};
use crate::tui::themes::Theme;
use crate::tui::utils::draw_transparent;

/// Visible window onto the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub area: Rect,
    /// First visible page row
    pub top: usize,
}

impl Viewport {
    pub fn new(area: Rect, top: usize) -> Self {
        Self { area, top }
    }

    /// Screen row for a page row, if on screen
    pub fn screen_y(&self, page_row: usize) -> Option<u16> {
        let dy = page_row.checked_sub(self.top)?;
        (dy < self.area.height as usize).then(|| self.area.y + dy as u16)
    }

    /// Screen rectangle for a page-space box, clipped to the viewport
    pub fn clip(&self, x: u16, page_top: usize, width: u16, height: u16) -> Option<Rect> {
        let top = page_top.max(self.top);
        let bottom = (page_top + height as usize).min(self.top + self.area.height as usize);
        if top >= bottom || width == 0 {
            return None;
        }
        let y = self.screen_y(top)?;
        let width = width.min(self.area.right().saturating_sub(x));
        Some(Rect::new(x, y, width, (bottom - top) as u16))
    }

    /// Draw a line at a page row; spaces leave the backdrop visible
    pub fn draw(&self, buf: &mut Buffer, x: u16, page_row: usize, line: &Line<'_>) {
        if let Some(y) = self.screen_y(page_row) {
            draw_transparent(buf, self.area, x, y, line);
        }
    }

    /// Record a clickable one-row region at a page row
    pub fn hit(&self, hits: &mut HitMap, x: u16, page_row: usize, width: u16, target: HitTarget) {
        if let Some(area) = self.clip(x, page_row, width, 1) {
            hits.push(area, target);
        }
    }
}

/// Everything the landing sections read for one frame
pub struct LandingProps<'a> {
    pub snapshot: &'a LandingSnapshot,
    pub layout: &'a PageLayout,
    pub catalogue: &'a ProjectCatalogue,
    /// Left edge of the project column
    pub content_x: u16,
    pub theme: &'a Theme,
}

/// Backdrop, then the scrolled page content
pub fn render_landing(
    buf: &mut Buffer,
    viewport: Viewport,
    props: &LandingProps<'_>,
    hits: &mut HitMap,
) {
    hero::render_backdrop(buf, viewport.area, &props.snapshot.mask, props.theme);
    hero::render_hero(buf, viewport, props.layout, props.theme);
    about::render_about(
        buf,
        viewport,
        props.layout,
        props.snapshot.about_revealed,
        props.theme,
    );
    projects::render_projects(buf, viewport, props, hits);
    contact::render_contact(buf, viewport, props.layout, props.theme, hits);
}

/// Spread letters apart for display headings
pub(crate) fn spaced(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_mapping() {
        let vp = Viewport::new(Rect::new(0, 0, 40, 10), 100);
        assert_eq!(vp.screen_y(99), None);
        assert_eq!(vp.screen_y(100), Some(0));
        assert_eq!(vp.screen_y(109), Some(9));
        assert_eq!(vp.screen_y(110), None);
    }

    #[test]
    fn test_viewport_clip() {
        let vp = Viewport::new(Rect::new(0, 0, 40, 10), 100);
        assert_eq!(vp.clip(2, 95, 10, 8), Some(Rect::new(2, 0, 10, 3)));
        assert_eq!(vp.clip(2, 108, 10, 8), Some(Rect::new(2, 8, 10, 2)));
        assert_eq!(vp.clip(35, 104, 10, 1), Some(Rect::new(35, 4, 5, 1)));
        assert_eq!(vp.clip(2, 80, 10, 5), None);
    }

    #[test]
    fn test_spaced() {
        assert_eq!(spaced("ABC"), "A B C");
        assert_eq!(spaced(""), "");
    }
}
