//! Frame drawing

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::tui::app::{App, View};
use crate::tui::components::{
    render_navbar, render_scrollbar, render_sidebar, render_toasts, sidebar, NavbarProps,
    SidebarItem, NAV_HEIGHT, SIDEBAR_WIDTH,
};
use crate::tui::sections::{
    render_detail, render_landing, render_not_found, DetailPage, LandingProps, Viewport,
};
use crate::tui::themes::Theme;
use crate::tui::THEME_REGISTRY;

impl App {
    pub fn ui(&mut self, f: &mut Frame) {
        let area = f.area();
        let theme = THEME_REGISTRY.get_or_default(&self.theme_name);
        let buf = f.buffer_mut();
        self.draw(buf, area, theme);
    }

    /// Draw the current page into a buffer
    pub fn draw(&mut self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        self.hits.clear();
        Block::default()
            .style(Style::default().bg(theme.bg_color).fg(theme.text_color))
            .render(area, buf);

        match self.view.clone() {
            View::Landing => self.draw_landing(buf, area, theme),
            View::Detail(index) => self.draw_detail(buf, area, index, theme),
            View::NotFound(requested) => render_not_found(buf, area, &requested, theme, &mut self.hits),
        }

        render_toasts(buf, area, &self.toasts, theme);
    }

    fn draw_landing(&mut self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        let Some(landing) = self.landing.as_ref() else {
            return;
        };
        let snapshot = landing.snapshot();
        let show_sidebar = sidebar::fits(area.width);
        let content_x = area.x + if show_sidebar { SIDEBAR_WIDTH } else { 4 };

        let viewport = Viewport::new(area, self.scroll.row());
        let props = LandingProps {
            snapshot: &snapshot,
            layout: &self.layout,
            catalogue: &self.catalogue,
            content_x,
            theme,
        };
        render_landing(buf, viewport, &props, &mut self.hits);

        if snapshot.list_visible && show_sidebar {
            let items: Vec<SidebarItem<'_>> = self
                .catalogue
                .projects()
                .iter()
                .enumerate()
                .map(|(i, project)| SidebarItem {
                    title: &project.title,
                    node: landing.sidebar_node(i),
                    lit: landing.connector_lit(i),
                })
                .collect();
            let below_nav = Rect::new(
                area.x,
                area.y + NAV_HEIGHT,
                area.width,
                area.height.saturating_sub(NAV_HEIGHT),
            );
            render_sidebar(buf, below_nav, &items, theme, &mut self.hits);
        }

        render_navbar(
            buf,
            area,
            &NavbarProps {
                nav: snapshot.nav,
                blur_band_visible: snapshot.blur_band_visible,
                menu_open: snapshot.menu_open,
                theme,
            },
            &mut self.hits,
        );

        if area.width > 0 && area.height > NAV_HEIGHT {
            render_scrollbar(
                buf,
                Rect::new(area.right() - 1, area.y + NAV_HEIGHT, 1, area.height - NAV_HEIGHT),
                self.scroll.row(),
                self.layout.document as usize,
                area.height as usize,
                theme.accent_color,
                theme.border_color,
            );
        }
    }

    fn draw_detail(&mut self, buf: &mut Buffer, area: Rect, index: usize, theme: &Theme) {
        let Some(project) = self.catalogue.get(index) else {
            return;
        };
        let page = DetailPage::build(project, area.width, theme);
        self.detail_scroll.resize(area.height, page.height());
        render_detail(buf, area, &page, self.detail_scroll.row(), &mut self.hits);

        render_scrollbar(
            buf,
            Rect::new(area.right().saturating_sub(1), area.y, 1, area.height),
            self.detail_scroll.row(),
            page.height() as usize,
            area.height as usize,
            theme.accent_color,
            theme.border_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::HitTarget;
    use folio_core::{Config, ProjectCatalogue, Route, Section};
    use std::time::{Duration, Instant};

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    fn app(route: Route) -> App {
        let mut app = App::new(Config::default(), ProjectCatalogue::builtin().clone(), Route::Landing);
        app.size = (100, 40);
        app.navigate(&route, Instant::now());
        app
    }

    #[test]
    fn test_landing_frame_after_entrance() {
        let mut app = app(Route::Landing);
        app.tick(Instant::now() + Duration::from_secs(1));
        let theme = THEME_REGISTRY.get_or_default("folio");
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        app.draw(&mut buf, area, theme);

        assert!(row(&buf, 0).contains("LUKE EDWARDS"));
        let link = (0..area.width)
            .find(|&x| app.hits.at(x, 0) == Some(HitTarget::NavLink(Section::Projects)));
        assert!(link.is_some());
    }

    #[test]
    fn test_sidebar_appears_with_project_list() {
        let mut app = app(Route::Landing);
        app.scroll_landing_to(app.layout.item_focus_row(1).unwrap());
        let theme = THEME_REGISTRY.get_or_default("folio");
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        app.draw(&mut buf, area, theme);

        let nodes = (0..area.height)
            .filter(|&y| matches!(app.hits.at(3, y), Some(HitTarget::SidebarNode(_))))
            .count();
        assert_eq!(nodes, 4);
    }

    #[test]
    fn test_detail_and_not_found_frames() {
        let theme = THEME_REGISTRY.get_or_default("folio");
        let area = Rect::new(0, 0, 80, 30);

        let mut detail = app(Route::Project("algo-visual".to_string()));
        let mut buf = Buffer::empty(area);
        detail.draw(&mut buf, area, theme);
        assert!(row(&buf, 0).contains("BACK"));
        assert_eq!(detail.hits.at(4, 0), Some(HitTarget::Back));

        let mut missing = app(Route::Project("missing".to_string()));
        let mut buf = Buffer::empty(area);
        missing.draw(&mut buf, area, theme);
        assert!(row(&buf, 13).contains("Project Not Found"));
        assert_eq!(row(&buf, 14).trim(), "/project/missing");
    }
}
