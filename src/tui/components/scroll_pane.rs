//! Scroll pane component - the text viewport the scrollbar is layered on.

use ratatui::{Frame, layout::Rect, style::Style, text::Line, widgets::Paragraph};

use crate::app::App;
use crate::events::Action;
use crate::tui::theme::*;

use super::truncate_to_width;

/// Render the visible lines of the pane and register it as a wheel target.
pub fn render_scroll_pane(frame: &mut Frame, area: Rect, app: &mut App) {
    let width = area.width as usize;
    let lines: Vec<Line> = app
        .pane
        .with(|pane| {
            pane.visible_lines()
                .iter()
                .map(|line| {
                    Line::styled(truncate_to_width(line, width), Style::new().fg(TEXT_WHITE))
                })
                .collect()
        })
        .unwrap_or_default();

    frame.render_widget(Paragraph::new(lines), area);

    let wheel_lines = i32::from(app.config.wheel_lines());
    let bounds = app.areas.pane;
    app.interactions.register_scroll(
        "scroll_pane",
        bounds,
        Action::Wheel(-wheel_lines),
        Action::Wheel(wheel_lines),
    );
}
