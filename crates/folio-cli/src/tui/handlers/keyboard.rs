//! Keyboard input
//!
//! Keys are first mapped to an [`Action`] for the current page, then applied.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_core::{Route, Section};

use crate::tui::app::{App, View};
use crate::tui::components::Toast;
use crate::tui::links::{self, ContactLink, LinkAction, LinkError};
use crate::tui::state::PageBlock;

/// Which key set applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Landing,
    Detail,
    NotFound,
}

impl From<&View> for KeyContext {
    fn from(view: &View) -> Self {
        match view {
            View::Landing => KeyContext::Landing,
            View::Detail(_) => KeyContext::Detail,
            View::NotFound(_) => KeyContext::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Rows; negative is up
    Scroll(i32),
    /// Viewports; negative is up
    Page(i32),
    Top,
    Bottom,
    Section(Section),
    ToggleMenu,
    /// Escape: closes the menu, otherwise goes back
    Dismiss,
    PrevProject,
    NextProject,
    OpenActive,
    Back,
    Visit,
    Github,
    Contact(ContactLink),
    CycleTheme,
    Quit,
}

/// Key to action for a page; `None` for unbound keys
pub fn map_key(context: KeyContext, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('d') => Some(Action::Page(1)),
            KeyCode::Char('u') => Some(Action::Page(-1)),
            _ => None,
        };
    }

    let common = match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('t') => Some(Action::CycleTheme),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Scroll(1)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Scroll(-1)),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::Page(1)),
        KeyCode::PageUp => Some(Action::Page(-1)),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::Top),
        KeyCode::End | KeyCode::Char('G') => Some(Action::Bottom),
        KeyCode::Esc => Some(Action::Dismiss),
        KeyCode::Backspace | KeyCode::Char('b') => Some(Action::Back),
        _ => None,
    };
    if common.is_some() {
        return common;
    }

    match context {
        KeyContext::Landing => match code {
            KeyCode::Char('1') => Some(Action::Section(Section::About)),
            KeyCode::Char('2') => Some(Action::Section(Section::Projects)),
            KeyCode::Char('3') => Some(Action::Section(Section::Contact)),
            KeyCode::Char('m') => Some(Action::ToggleMenu),
            KeyCode::Char('[') | KeyCode::Char('p') => Some(Action::PrevProject),
            KeyCode::Char(']') | KeyCode::Char('n') => Some(Action::NextProject),
            KeyCode::Enter => Some(Action::OpenActive),
            KeyCode::Char('o') => Some(Action::Visit),
            KeyCode::Char(c) => ContactLink::from_key(c).map(Action::Contact),
            _ => None,
        },
        KeyContext::Detail => match code {
            KeyCode::Char('o') | KeyCode::Enter => Some(Action::Visit),
            KeyCode::Char('h') => Some(Action::Github),
            _ => None,
        },
        KeyContext::NotFound => match code {
            KeyCode::Enter => Some(Action::Back),
            _ => None,
        },
    }
}

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        let is_press =
            key_event.kind == KeyEventKind::Press || key_event.kind == KeyEventKind::Repeat;
        if !is_press {
            return;
        }
        let context = KeyContext::from(&self.view);
        if let Some(action) = map_key(context, key_event.code, key_event.modifiers) {
            self.apply_action(action, Instant::now());
        }
    }

    pub fn apply_action(&mut self, action: Action, now: Instant) {
        let step = self.config.scroll_step() as i32;
        let page = (self.size.1 as i32 - 2).max(1);

        match action {
            Action::Quit => self.should_quit = true,
            Action::CycleTheme => self.cycle_theme(),
            Action::Scroll(rows) => self.scroll_by(rows * step),
            Action::Page(pages) => self.scroll_by(pages * page),
            Action::Top => match self.view {
                View::Landing => self.scroll_smoothly_to(0),
                _ => self.detail_scroll.scroll_to_line(0),
            },
            Action::Bottom => match self.view {
                View::Landing => self.scroll_smoothly_to(self.layout.document),
                _ => self.detail_scroll.scroll_to_end(),
            },
            Action::Section(section) => self.follow_section(section),
            Action::ToggleMenu => {
                if let Some(landing) = self.landing.as_mut() {
                    landing.toggle_menu();
                }
            }
            Action::Dismiss => {
                let menu_open = self
                    .landing
                    .as_ref()
                    .is_some_and(|landing| landing.snapshot().menu_open);
                if menu_open {
                    self.apply_action(Action::ToggleMenu, now);
                } else {
                    self.apply_action(Action::Back, now);
                }
            }
            Action::PrevProject => self.step_project(false),
            Action::NextProject => self.step_project(true),
            Action::OpenActive => {
                let middle = (self.scroll.row() + self.size.1 as usize / 2).min(u16::MAX as usize);
                if self.layout.block_at(middle as u16) != PageBlock::Projects {
                    return;
                }
                let active = self
                    .landing
                    .as_ref()
                    .and_then(|landing| landing.snapshot().active_project);
                if let Some(index) = active {
                    self.open_project(index, now);
                }
            }
            Action::Back => {
                if self.view != View::Landing {
                    self.navigate(&Route::Landing, now);
                }
            }
            Action::Visit => {
                let Some(project) = self.current_project() else {
                    return;
                };
                let result = links::project_action(project);
                self.follow(result);
            }
            Action::Github => {
                let Some(project) = self.current_project() else {
                    return;
                };
                let result = links::github_action(project);
                self.follow(result);
            }
            Action::Contact(link) => {
                let result = link.action(&self.config);
                self.follow(result);
            }
        }
    }

    fn scroll_by(&mut self, rows: i32) {
        match self.view {
            View::Landing => self.scroll_landing(rows),
            _ => self.scroll_detail(rows),
        }
    }

    /// Project on the detail page, or the active one on the landing page
    fn current_project(&self) -> Option<&folio_core::Project> {
        match &self.view {
            View::Detail(index) => self.catalogue.get(*index),
            View::Landing => self
                .landing
                .as_ref()
                .and_then(|landing| landing.snapshot().active_project)
                .and_then(|index| self.catalogue.get(index)),
            View::NotFound(_) => None,
        }
    }

    /// Perform a resolved link and report the outcome as a toast
    pub fn follow(&mut self, action: Result<LinkAction, LinkError>) {
        let outcome = action.and_then(|action| links::perform(&action));
        match outcome {
            Ok(message) => self.show_toast(Toast::success(message)),
            Err(e) => {
                tracing::warn!("Link failed: {}", e);
                self.show_toast(Toast::error(e.to_string()));
            }
        }
    }
}
