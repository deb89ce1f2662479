//! Text measuring, wrapping and drawing helpers

use ratatui::{buffer::Buffer, layout::Rect, text::Line};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to a display width, ending with `…` when cut
pub fn truncate_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

/// Wrap text to a width, returning owned lines
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    textwrap::wrap(text, width)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Left padding that centers `text` in `width` columns
pub fn center(text: &str, width: u16) -> u16 {
    (width as usize).saturating_sub(text.width()) as u16 / 2
}

/// Left padding that right-aligns `text` in `width` columns with a margin
pub fn align_right(text: &str, width: u16, margin: u16) -> u16 {
    (width as usize)
        .saturating_sub(text.width() + margin as usize) as u16
}

/// Draw a line at `(x, y)` leaving spaces untouched, so whatever is
/// underneath shows through
pub fn draw_transparent(buf: &mut Buffer, area: Rect, x: u16, y: u16, line: &Line<'_>) {
    if y < area.y || y >= area.bottom() {
        return;
    }
    let mut cx = x;
    for span in &line.spans {
        let style = line.style.patch(span.style);
        for ch in span.content.chars() {
            let w = ch.width().unwrap_or(0) as u16;
            if cx >= area.right() {
                return;
            }
            if ch != ' ' && cx >= area.x {
                if let Some(cell) = buf.cell_mut((cx, y)) {
                    cell.set_char(ch).set_style(style);
                }
            }
            cx += w.max(1);
        }
    }
}
