//! Page scrollbar along the right edge

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

/// One column: `░` track with a `█` thumb
///
/// Nothing is drawn when the content fits.
pub fn render_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    offset: usize,
    total: usize,
    visible: usize,
    thumb_color: Color,
    track_color: Color,
) {
    if total <= visible || area.height == 0 || area.width == 0 {
        return;
    }
    let height = area.height as usize;

    let thumb = ((visible as f32 / total as f32) * height as f32)
        .round()
        .clamp(1.0, height as f32) as usize;
    let max_offset = total - visible;
    let pos = ((offset.min(max_offset) as f32 / max_offset as f32)
        * height.saturating_sub(thumb) as f32)
        .round() as usize;

    for row in 0..height {
        let (ch, color) = if row >= pos && row < pos + thumb {
            ('█', thumb_color)
        } else {
            ('░', track_color)
        };
        if let Some(cell) = buf.cell_mut((area.x, area.y + row as u16)) {
            cell.set_char(ch).set_fg(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(buf: &Buffer, height: u16) -> String {
        (0..height).map(|y| buf[(0, y)].symbol().to_string()).collect()
    }

    #[test]
    fn test_thumb_tracks_offset() {
        let area = Rect::new(0, 0, 1, 10);

        let mut buf = Buffer::empty(area);
        render_scrollbar(&mut buf, area, 0, 100, 20, Color::White, Color::Gray);
        assert_eq!(column(&buf, 10), "██░░░░░░░░");

        let mut buf = Buffer::empty(area);
        render_scrollbar(&mut buf, area, 80, 100, 20, Color::White, Color::Gray);
        assert_eq!(column(&buf, 10), "░░░░░░░░██");
    }

    #[test]
    fn test_no_bar_when_content_fits() {
        let area = Rect::new(0, 0, 1, 5);
        let mut buf = Buffer::empty(area);
        render_scrollbar(&mut buf, area, 0, 5, 10, Color::White, Color::Gray);
        assert_eq!(column(&buf, 5), "     ");
    }
}
