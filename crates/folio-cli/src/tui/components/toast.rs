//! Toasts - short-lived notices in the top-right corner
//!
//! Used for link feedback: opened in browser, email copied, or why a link
//! could not be followed.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use unicode_width::UnicodeWidthChar;

use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

const MAX_VISIBLE: usize = 3;
const LIFETIME: Duration = Duration::from_secs(4);
const MAX_WIDTH: u16 = 44;
const HEIGHT: u16 = 3;
/// Rows left free above the first toast (navbar)
const TOP_OFFSET: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    fn color(self, theme: &Theme) -> Color {
        match self {
            ToastKind::Success => theme.success_color,
            ToastKind::Info => theme.accent_color,
            ToastKind::Error => theme.error_color,
        }
    }

    fn icon(self) -> char {
        match self {
            ToastKind::Success => '✓',
            ToastKind::Info => '→',
            ToastKind::Error => '✗',
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    created_at: Instant,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= LIFETIME
    }

    /// Remaining lifetime in [0, 1]
    fn remaining(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.created_at).as_secs_f32();
        (1.0 - elapsed / LIFETIME.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast; an identical message already on screen is not repeated
    pub fn push(&mut self, toast: Toast) {
        if self.toasts.iter().any(|t| t.message == toast.message) {
            return;
        }
        if self.toasts.len() >= MAX_VISIBLE {
            self.toasts.remove(0);
        }
        self.toasts.push(toast);
    }

    /// Drop expired toasts; true when the queue changed
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired(now));
        self.toasts.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Newest first
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev()
    }
}

/// Draw the queue below the navbar, right-aligned
pub fn render_toasts(buf: &mut Buffer, area: Rect, queue: &ToastQueue, theme: &Theme) {
    let width = MAX_WIDTH.min(area.width.saturating_sub(2));
    if queue.is_empty() || width < 8 {
        return;
    }
    let now = Instant::now();
    let x = area.right().saturating_sub(width + 1);

    for (i, toast) in queue.visible().enumerate() {
        let y = area.y + TOP_OFFSET + i as u16 * (HEIGHT + 1);
        if y + HEIGHT > area.bottom() {
            break;
        }
        render_toast(buf, Rect::new(x, y, width, HEIGHT), toast, theme, now);
    }
}

fn render_toast(buf: &mut Buffer, area: Rect, toast: &Toast, theme: &Theme, now: Instant) {
    let color = toast.kind.color(theme);
    let border = Style::default().fg(color).bg(theme.bg_color);
    let right = area.right() - 1;
    let bottom = area.bottom() - 1;
    let mid = area.y + 1;

    for x in area.x..=right {
        let (top_ch, mid_ch) = if x == area.x {
            ('╭', '│')
        } else if x == right {
            ('╮', '│')
        } else {
            ('─', ' ')
        };
        if let Some(cell) = buf.cell_mut((x, area.y)) {
            cell.set_char(top_ch).set_style(border);
        }
        if let Some(cell) = buf.cell_mut((x, mid)) {
            cell.set_char(mid_ch).set_style(border);
        }
    }

    // Bottom edge doubles as a countdown
    let filled = ((area.width - 2) as f32 * toast.remaining(now)) as u16;
    for (i, x) in (area.x..=right).enumerate() {
        let (ch, fg) = if x == area.x {
            ('╰', color)
        } else if x == right {
            ('╯', color)
        } else if (i as u16) <= filled {
            ('━', color)
        } else {
            ('─', theme.dim_color)
        };
        if let Some(cell) = buf.cell_mut((x, bottom)) {
            cell.set_char(ch).set_fg(fg).set_bg(theme.bg_color);
        }
    }

    let mut cx = area.x + 2;
    if let Some(cell) = buf.cell_mut((cx, mid)) {
        cell.set_char(toast.kind.icon()).set_fg(color);
    }
    cx += 2;

    let message = truncate_ellipsis(&toast.message, (area.width - 6) as usize);
    for ch in message.chars() {
        if cx >= right - 1 {
            break;
        }
        if let Some(cell) = buf.cell_mut((cx, mid)) {
            cell.set_char(ch).set_fg(theme.text_color);
        }
        cx += UnicodeWidthChar::width(ch).unwrap_or(1) as u16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::THEME_REGISTRY;

    #[test]
    fn test_duplicates_ignored() {
        let mut queue = ToastQueue::new();
        queue.push(Toast::success("Copied"));
        queue.push(Toast::success("Copied"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_oldest_dropped_at_capacity() {
        let mut queue = ToastQueue::new();
        for msg in ["a", "b", "c", "d"] {
            queue.push(Toast::info(msg));
        }
        let messages: Vec<_> = queue.visible().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["d", "c", "b"]);
    }

    #[test]
    fn test_tick_expires() {
        let mut queue = ToastQueue::new();
        queue.push(Toast::error("boom"));
        assert!(!queue.tick(Instant::now()));
        assert!(queue.tick(Instant::now() + LIFETIME));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_render_draws_message() {
        let theme = THEME_REGISTRY.get_or_default("folio");
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        let mut queue = ToastQueue::new();
        queue.push(Toast::success("hello"));
        render_toasts(&mut buf, area, &queue, theme);

        let row: String = (0..area.width).map(|x| buf[(x, TOP_OFFSET + 1)].symbol().to_string()).collect();
        assert!(row.contains("✓ hello"));
    }
}
