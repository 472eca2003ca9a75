//! Status bar component - scroll activity, thumb geometry and hotkeys.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::scrollbar::ScrollTarget;
use crate::tui::theme::*;

/// Render the single-line status bar.
pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (indicator, color) = if app.is_scrolling() {
        ("● scrolling", LOGO_MINT)
    } else {
        ("○ idle", TEXT_DIM)
    };

    let position = app
        .pane
        .with(|pane| {
            let max = (pane.scroll_height() - pane.client_height()).max(0.0);
            if max > 0.0 {
                format!("{:>3.0}%", pane.scroll_top() / max * 100.0)
            } else {
                "all".to_string()
            }
        })
        .unwrap_or_default();

    let geometry = format!(
        "thumb {:.0}px @ {:.0}px",
        app.scrollbar.thumb_height(),
        app.scrollbar.thumb_top()
    );

    let always = if app.always_active { "on" } else { "off" };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.title),
            Style::new().fg(LOGO_GOLD).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {} ", indicator), Style::new().fg(color)),
        Span::styled(format!(" {} ", position), Style::new().fg(TEXT_WHITE)),
        Span::styled(format!(" {} ", geometry), Style::new().fg(TEXT_DIM)),
        Span::styled(
            format!(" [a] always visible: {}  [q] quit", always),
            Style::new().fg(TEXT_DIM),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
