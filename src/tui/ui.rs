use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::app::App;
use super::components::{render_scroll_pane, render_scrollbar, render_status_bar};

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Interactive regions are rebuilt every frame
    app.interactions.clear();

    // Main vertical layout: pane, status bar
    let main_layout = Layout::vertical([
        Constraint::Min(0),    // Pane
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let pane_area = main_layout[0];
    app.set_pane_area(pane_area);

    // The track overlays the pane's last column; text stops short of it
    let text_area = Rect {
        width: pane_area.width.saturating_sub(1),
        ..pane_area
    };
    let track = app.areas.track;
    let track = Rect::new(track.x, track.y, track.width, track.height);

    render_scroll_pane(frame, text_area, app);
    render_scrollbar(frame, track, app);
    render_status_bar(frame, main_layout[1], app);
}
