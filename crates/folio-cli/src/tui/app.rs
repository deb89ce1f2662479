//! Main application state and event loop

use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::{
    Config, CoordinatorOptions, LandingView, ProjectCatalogue, ResolvedView, Route, ScrollHost,
    Section,
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use crate::tui::components::{Toast, ToastQueue};
use crate::tui::state::{HitMap, PageLayout, PageScroll};
use crate::tui::THEME_REGISTRY;

/// Which page is on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Landing,
    /// Index into the catalogue
    Detail(usize),
    /// Requested path, e.g. `/project/nope`
    NotFound(String),
}

pub struct App {
    pub config: Config,
    pub catalogue: ProjectCatalogue,
    pub theme_name: String,
    pub view: View,

    /// Live while the landing page is mounted
    pub landing: Option<LandingView>,
    pub layout: PageLayout,
    pub scroll: PageScroll,
    /// Smooth scroll destination for link jumps
    pub scroll_target: Option<u16>,
    pub detail_scroll: PageScroll,

    pub hits: HitMap,
    pub toasts: ToastQueue,
    /// Terminal size as (width, height)
    pub size: (u16, u16),

    pending_route: Option<Route>,
    pub should_quit: bool,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(config: Config, catalogue: ProjectCatalogue, route: Route) -> Self {
        let theme_name = THEME_REGISTRY.get_or_default(&config.theme).name.clone();
        Self {
            config,
            catalogue,
            theme_name,
            view: View::Landing,
            landing: None,
            layout: PageLayout::compute(0, 0),
            scroll: PageScroll::new(0, 0),
            scroll_target: None,
            detail_scroll: PageScroll::new(0, 0),
            hits: HitMap::default(),
            toasts: ToastQueue::new(),
            size: (0, 0),
            pending_route: Some(route),
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let size = terminal.size()?;
        self.size = (size.width, size.height);
        if let Some(route) = self.pending_route.take() {
            self.navigate(&route, Instant::now());
        }

        let result = self.main_loop(&mut terminal).await;

        // Unmount before leaving so timers and observers are released
        self.landing = None;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    async fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let mut event_stream = EventStream::new();
        let frame_interval = self.config.frame_interval();

        loop {
            let now = Instant::now();
            if self.tick(now) {
                self.needs_redraw = true;
            }

            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            Event::Key(key) => {
                                self.handle_key(key);
                                self.needs_redraw = true;
                            }
                            Event::Mouse(mouse) => {
                                self.handle_mouse_event(mouse);
                                self.needs_redraw = true;
                            }
                            Event::Resize(width, height) => {
                                self.resize(width, height);
                                self.needs_redraw = true;
                            }
                            _ => {}
                        }
                    }
                }
                _ = tokio::time::sleep(frame_interval) => {}
            }

            if self.should_quit {
                info!("Quitting");
                break;
            }
        }
        Ok(())
    }

    /// Timers and animations; true when something changed on screen
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if let Some(landing) = self.landing.as_mut() {
            changed |= landing.tick(now);
        }
        changed |= self.step_smooth_scroll();
        changed |= self.toasts.tick(now);
        changed
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
        self.needs_redraw = true;
    }

    /// Switch pages; the landing page is mounted fresh each time it is entered
    pub fn navigate(&mut self, route: &Route, now: Instant) {
        info!("Navigating to {}", route.path());
        let next = match route.resolve(&self.catalogue) {
            ResolvedView::Landing => View::Landing,
            ResolvedView::Detail(project) => match self.catalogue.index_of(&project.name) {
                Some(index) => View::Detail(index),
                None => View::NotFound(project.name.clone()),
            },
            ResolvedView::NotFound { requested } => View::NotFound(requested),
        };

        self.landing = None;
        self.scroll_target = None;
        self.detail_scroll = PageScroll::new(self.size.1, 0);
        if next == View::Landing {
            self.mount_landing(now);
        }
        self.view = next;
        self.needs_redraw = true;
    }

    fn mount_landing(&mut self, now: Instant) {
        let (_, height) = self.size;
        self.layout = PageLayout::compute(height, self.catalogue.len());
        self.scroll = PageScroll::new(height, self.layout.document);
        let options = CoordinatorOptions {
            entrance_delay: self.config.entrance_delay(),
        };
        self.landing = Some(LandingView::mount(
            &self.layout.to_landing_layout(),
            &mut self.scroll,
            now,
            options,
        ));
        debug!(document = self.layout.document, "Landing mounted");
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        if let Some(landing) = self.landing.as_mut() {
            self.layout = PageLayout::compute(height, self.catalogue.len());
            self.scroll.resize(height, self.layout.document);
            landing.on_resize(&mut self.scroll, &self.layout.to_landing_layout());
        }
    }

    /// Scroll the landing page by a signed number of rows
    pub fn scroll_landing(&mut self, delta: i32) {
        self.scroll_target = None;
        let amount = delta.unsigned_abs().min(u16::MAX as u32) as u16;
        if delta < 0 {
            self.scroll.scroll_up(amount);
        } else {
            self.scroll.scroll_down(amount);
        }
        if let Some(landing) = self.landing.as_mut() {
            landing.on_scroll(&mut self.scroll);
        }
    }

    /// Jump the landing page to a row and report it
    pub fn scroll_landing_to(&mut self, row: u16) {
        self.scroll_target = None;
        self.scroll.scroll_to_line(row);
        if let Some(landing) = self.landing.as_mut() {
            landing.on_scroll(&mut self.scroll);
        }
    }

    /// Detail pages have no coordinator, so the top is clamped here
    pub fn scroll_detail(&mut self, delta: i32) {
        let amount = delta.unsigned_abs().min(u16::MAX as u32) as u16;
        if delta < 0 {
            self.detail_scroll.scroll_up(amount);
            if self.detail_scroll.scroll_y() < 0.0 {
                self.detail_scroll.scroll_to(0.0);
            }
        } else {
            self.detail_scroll.scroll_down(amount);
        }
    }

    /// Start a smooth scroll toward a row
    pub fn scroll_smoothly_to(&mut self, row: u16) {
        self.scroll_target = Some(row);
    }

    /// One frame of smooth scrolling; every step is a real scroll tick
    fn step_smooth_scroll(&mut self) -> bool {
        let Some(target) = self.scroll_target else {
            return false;
        };
        let Some(landing) = self.landing.as_mut() else {
            self.scroll_target = None;
            return false;
        };
        let current = self.scroll.scroll_y();
        let goal = (target as f64).min(self.scroll.max_scroll());
        let diff = goal - current;
        if diff.abs() < 1.0 {
            self.scroll.scroll_to(goal);
            self.scroll_target = None;
        } else {
            let step = (diff / 3.0).abs().max(1.0).min(diff.abs()).copysign(diff);
            self.scroll.scroll_to(current + step);
        }
        landing.on_scroll(&mut self.scroll);
        true
    }

    /// Nav link: close the menu, then glide to the section
    pub fn follow_section(&mut self, section: Section) {
        if let Some(landing) = self.landing.as_mut() {
            let section = landing.follow_link(section);
            self.scroll_smoothly_to(self.layout.section_top(section));
        }
    }

    /// Center a project item in the viewport
    pub fn focus_project(&mut self, index: usize) {
        if let Some(row) = self.layout.item_focus_row(index) {
            self.scroll_smoothly_to(row);
        }
    }

    /// Step through projects relative to the active one
    pub fn step_project(&mut self, forward: bool) {
        let Some(landing) = self.landing.as_ref() else {
            return;
        };
        let last = self.catalogue.len().saturating_sub(1);
        let next = match landing.snapshot().active_project {
            None => 0,
            Some(i) if forward => (i + 1).min(last),
            Some(i) => i.saturating_sub(1),
        };
        self.focus_project(next);
    }

    pub fn open_project(&mut self, index: usize, now: Instant) {
        if let Some(project) = self.catalogue.get(index) {
            let route = Route::Project(project.name.clone());
            self.navigate(&route, now);
        }
    }

    pub fn cycle_theme(&mut self) {
        self.theme_name = THEME_REGISTRY.next_name(&self.theme_name).to_string();
        let display = THEME_REGISTRY.get_or_default(&self.theme_name).display_name.clone();
        info!("Theme switched to {}", self.theme_name);
        self.show_toast(Toast::info(format!("Theme: {}", display)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app(route: Route) -> App {
        let mut app = App::new(Config::default(), ProjectCatalogue::builtin().clone(), route);
        app.size = (100, 40);
        let route = app.pending_route.take().unwrap();
        app.navigate(&route, Instant::now());
        app
    }

    fn settle(app: &mut App) {
        let now = Instant::now();
        for _ in 0..200 {
            app.tick(now);
        }
    }

    #[test]
    fn test_landing_mounts_with_layout() {
        let app = app(Route::Landing);
        assert_eq!(app.view, View::Landing);
        assert!(app.landing.is_some());
        assert_eq!(app.layout.item_tops.len(), 4);
        assert_eq!(app.scroll.document(), app.layout.document);
    }

    #[test]
    fn test_entrance_fires_on_tick() {
        let mut app = app(Route::Landing);
        let later = Instant::now() + Duration::from_secs(1);
        assert!(app.tick(later));
        assert!(app.landing.as_ref().unwrap().snapshot().nav.visible);
    }

    #[test]
    fn test_scrolling_updates_coordinator() {
        let mut app = app(Route::Landing);
        app.scroll_landing(10);
        let snap = app.landing.as_ref().unwrap().snapshot();
        assert_eq!(snap.metrics.scroll_y, 10.0);

        app.scroll_landing(-50);
        let snap = app.landing.as_ref().unwrap().snapshot();
        assert_eq!(snap.metrics.scroll_y, 0.0);
        assert_eq!(app.scroll.scroll_y(), 0.0);
    }

    #[test]
    fn test_section_link_glides_to_section() {
        let mut app = app(Route::Landing);
        app.landing.as_mut().unwrap().toggle_menu();
        app.follow_section(Section::Projects);
        assert!(!app.landing.as_ref().unwrap().snapshot().menu_open);

        settle(&mut app);
        assert_eq!(app.scroll.row(), app.layout.projects_top as usize);
        assert!(app.scroll_target.is_none());
    }

    #[test]
    fn test_step_project_tracks_active() {
        let mut app = app(Route::Landing);
        app.step_project(true);
        settle(&mut app);
        assert_eq!(app.landing.as_ref().unwrap().snapshot().active_project, Some(0));

        app.step_project(true);
        settle(&mut app);
        assert_eq!(app.landing.as_ref().unwrap().snapshot().active_project, Some(1));
    }

    #[test]
    fn test_open_project_unmounts_landing() {
        let mut app = app(Route::Landing);
        app.open_project(1, Instant::now());
        assert_eq!(app.view, View::Detail(1));
        assert!(app.landing.is_none());

        app.navigate(&Route::Landing, Instant::now());
        assert!(app.landing.is_some());
        assert_eq!(app.scroll.row(), 0);
    }

    #[test]
    fn test_unknown_project_route() {
        let app = app(Route::Project("nope".to_string()));
        assert_eq!(app.view, View::NotFound("/project/nope".to_string()));
        assert!(app.landing.is_none());
    }

    #[test]
    fn test_resize_relayouts() {
        let mut app = app(Route::Landing);
        app.resize(100, 20);
        assert_eq!(app.layout.viewport, 20);
        assert_eq!(app.scroll.viewport(), 20);
        let snap = app.landing.as_ref().unwrap().snapshot();
        assert_eq!(snap.metrics.viewport_height, 20.0);
    }

    #[test]
    fn test_detail_scroll_clamps_top() {
        let mut app = app(Route::Project("krumbz".to_string()));
        app.detail_scroll.resize(10, 50);
        app.scroll_detail(5);
        app.scroll_detail(-20);
        assert_eq!(app.detail_scroll.scroll_y(), 0.0);
    }

    #[test]
    fn test_cycle_theme() {
        let mut app = app(Route::Landing);
        let before = app.theme_name.clone();
        app.cycle_theme();
        assert_ne!(app.theme_name, before);
        assert_eq!(app.toasts.len(), 1);
    }
}
