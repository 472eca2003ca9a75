//! Scrollbar component - draws the thumb of the overlay inside its track.
//!
//! The track itself is transparent. When the overlay is hidden nothing is
//! drawn, but the thumb still registers its hit region so it can be grabbed.

use ratatui::{Frame, layout::Rect, style::Style, text::Line, widgets::Paragraph};

use crate::app::App;
use crate::events::Action;
use crate::tui::interaction::{ClickRegion, InteractiveRegion};
use crate::tui::theme::*;

const THUMB_SYMBOL: &str = "┃";

/// Convert thumb geometry in pixels to (first row, row count) within a track.
pub fn thumb_rows(top: f64, height: f64, cell_height: f64, track_rows: u16) -> (u16, u16) {
    if track_rows == 0 || cell_height <= 0.0 {
        return (0, 0);
    }
    let max_start = f64::from(track_rows - 1);
    let start = (top / cell_height).round().clamp(0.0, max_start) as u16;
    let len = (height / cell_height).round().max(1.0) as u16;
    (start, len.min(track_rows - start))
}

/// Render the scrollbar thumb in the one-column `track` area.
pub fn render_scrollbar(frame: &mut Frame, track: Rect, app: &mut App) {
    let scrollbar = &app.scrollbar;
    let (start, len) = thumb_rows(
        scrollbar.rendered_top(),
        scrollbar.thumb_height(),
        app.cell_height(),
        track.height,
    );
    if len == 0 {
        return;
    }

    let thumb = Rect::new(track.x, track.y + start, track.width, len);

    if scrollbar.is_visible() {
        let color = if scrollbar.is_dragging() {
            LOGO_LIGHT_BLUE
        } else {
            THUMB_IDLE
        };
        let lines = vec![Line::styled(THUMB_SYMBOL, Style::new().fg(color)); len as usize];
        frame.render_widget(Paragraph::new(lines), thumb);
    }

    app.interactions.register(
        InteractiveRegion::clickable(
            "scrollbar_thumb",
            ClickRegion::from(thumb),
            Action::BeginThumbDrag { row: 0 },
        )
        .with_priority(10),
    );
}
