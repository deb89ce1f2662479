//! Mouse input: wheel scrolling and clicks on recorded hit regions

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::app::App;
use crate::tui::handlers::keyboard::Action;
use crate::tui::state::HitTarget;

impl App {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.apply_action(Action::Scroll(1), Instant::now()),
            MouseEventKind::ScrollUp => self.apply_action(Action::Scroll(-1), Instant::now()),
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(target) = self.hits.at(mouse.column, mouse.row) {
                    self.click(target, Instant::now());
                }
            }
            _ => {}
        }
    }

    pub fn click(&mut self, target: HitTarget, now: Instant) {
        tracing::debug!(?target, "Click");
        match target {
            HitTarget::NavLink(section) => self.apply_action(Action::Section(section), now),
            HitTarget::MenuToggle => self.apply_action(Action::ToggleMenu, now),
            HitTarget::SidebarNode(index) => self.focus_project(index),
            HitTarget::OpenProject(index) => self.open_project(index, now),
            HitTarget::Contact(link) => self.apply_action(Action::Contact(link), now),
            HitTarget::Back => self.apply_action(Action::Back, now),
            HitTarget::VisitProject => self.apply_action(Action::Visit, now),
            HitTarget::ProjectGithub => self.apply_action(Action::Github, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::View;
    use folio_core::{Config, ProjectCatalogue, Route};
    use ratatui::layout::Rect;

    fn landing_app() -> App {
        let mut app = App::new(Config::default(), ProjectCatalogue::builtin().clone(), Route::Landing);
        app.size = (100, 40);
        app.navigate(&Route::Landing, Instant::now());
        app
    }

    #[test]
    fn test_click_opens_project_and_back() {
        let mut app = landing_app();
        app.hits.push(Rect::new(0, 0, 10, 1), HitTarget::OpenProject(2));
        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 0,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        assert_eq!(app.view, View::Detail(2));

        app.click(HitTarget::Back, Instant::now());
        assert_eq!(app.view, View::Landing);
    }

    #[test]
    fn test_wheel_scrolls_by_step() {
        let mut app = landing_app();
        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        assert_eq!(app.scroll.row(), app.config.scroll_step() as usize);
    }

    #[test]
    fn test_sidebar_click_targets_item() {
        let mut app = landing_app();
        app.click(HitTarget::SidebarNode(3), Instant::now());
        assert_eq!(app.scroll_target, app.layout.item_focus_row(3));
    }
}
