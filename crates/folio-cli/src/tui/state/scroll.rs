//! Page Scroll - the terminal's stand-in for a window scroll position
//!
//! One row is one unit of scroll distance. The offset is kept as `f64` and
//! may briefly go negative when scrolling up past the top; the coordinator
//! samples it and writes it back to zero.

use folio_core::ScrollHost;

/// Scroll position and dimensions of the landing page
#[derive(Debug, Clone, PartialEq)]
pub struct PageScroll {
    /// Current scroll offset in rows (0 = top)
    offset: f64,
    /// Visible rows
    viewport: u16,
    /// Total rows of the page
    document: u16,
}

impl PageScroll {
    pub fn new(viewport: u16, document: u16) -> Self {
        Self {
            offset: 0.0,
            viewport,
            document,
        }
    }

    /// Largest offset that still fills the viewport
    pub fn max_scroll(&self) -> f64 {
        (self.document as f64 - self.viewport as f64).max(0.0)
    }

    /// First visible row
    pub fn row(&self) -> usize {
        if self.offset.is_finite() && self.offset > 0.0 {
            self.offset.floor() as usize
        } else {
            0
        }
    }

    pub fn viewport(&self) -> u16 {
        self.viewport
    }

    pub fn document(&self) -> u16 {
        self.document
    }

    /// Scroll up; overshooting the top leaves a negative offset
    pub fn scroll_up(&mut self, amount: u16) {
        self.offset -= amount as f64;
    }

    /// Scroll down, stopping at the bottom
    pub fn scroll_down(&mut self, amount: u16) {
        self.offset = (self.offset + amount as f64).min(self.max_scroll());
    }

    /// Jump to a row, clamped to the page
    pub fn scroll_to_line(&mut self, line: u16) {
        self.offset = (line as f64).min(self.max_scroll());
    }

    pub fn scroll_to_end(&mut self) {
        self.offset = self.max_scroll();
    }

    /// New dimensions; the offset is clamped to the new page
    pub fn resize(&mut self, viewport: u16, document: u16) {
        self.viewport = viewport;
        self.document = document;
        self.offset = self.offset.min(self.max_scroll());
    }
}

impl ScrollHost for PageScroll {
    fn scroll_y(&self) -> f64 {
        self.offset
    }

    fn viewport_height(&self) -> f64 {
        self.viewport as f64
    }

    fn document_height(&self) -> f64 {
        self.document as f64
    }

    fn scroll_to(&mut self, y: f64) {
        self.offset = y;
    }
}
