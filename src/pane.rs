//! Scrollable text pane, the scroll target of the terminal host.
//!
//! Terminal rows are mapped to pixels with a fixed cell height so the
//! scrollbar math works in the same units a browser element would report.

use std::path::Path;

use crate::error::Result;
use crate::scrollbar::ScrollTarget;

const SAMPLE_TEXT: &str = include_str!("sample.txt");

#[derive(Debug, Clone)]
pub struct ScrollPane {
    lines: Vec<String>,
    /// Scroll offset in pixels, may be fractional while the thumb is dragged
    scroll_top: f64,
    viewport_rows: u16,
    cell_height: f64,
}

impl ScrollPane {
    pub fn new(lines: Vec<String>, cell_height: f64) -> Self {
        Self {
            lines,
            scroll_top: 0.0,
            viewport_rows: 0,
            cell_height: if cell_height > 0.0 { cell_height } else { 1.0 },
        }
    }

    /// Pane showing the built-in sample text.
    pub fn sample(cell_height: f64) -> Self {
        Self::new(SAMPLE_TEXT.lines().map(str::to_string).collect(), cell_height)
    }

    /// Pane showing the contents of `path`.
    pub fn from_file(path: &Path, cell_height: f64) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::new(
            contents.lines().map(str::to_string).collect(),
            cell_height,
        ))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    /// Resize the viewport. Returns true if the size changed.
    pub fn set_viewport_rows(&mut self, rows: u16) -> bool {
        if rows == self.viewport_rows {
            return false;
        }
        self.viewport_rows = rows;
        // Re-clamp: a taller viewport may leave the old offset past the end
        let top = self.scroll_top;
        self.set_scroll_top(top);
        true
    }

    /// Index of the first visible line.
    pub fn first_visible_line(&self) -> usize {
        (self.scroll_top / self.cell_height).floor() as usize
    }

    /// Lines currently inside the viewport.
    pub fn visible_lines(&self) -> &[String] {
        let start = self.first_visible_line().min(self.lines.len());
        let end = (start + self.viewport_rows as usize).min(self.lines.len());
        &self.lines[start..end]
    }

    /// Scroll by whole rows (negative scrolls up). Returns true if the offset changed.
    pub fn scroll_rows(&mut self, rows: i32) -> bool {
        let before = self.scroll_top;
        let top = self.scroll_top + f64::from(rows) * self.cell_height;
        self.set_scroll_top(top);
        before != self.scroll_top
    }

    pub fn page_rows(&self) -> i32 {
        i32::from(self.viewport_rows.saturating_sub(1).max(1))
    }

    pub fn scroll_to_top(&mut self) -> bool {
        let before = self.scroll_top;
        self.set_scroll_top(0.0);
        before != self.scroll_top
    }

    pub fn scroll_to_bottom(&mut self) -> bool {
        let before = self.scroll_top;
        self.set_scroll_top(self.max_scroll_top());
        before != self.scroll_top
    }

    fn max_scroll_top(&self) -> f64 {
        (self.scroll_height() - self.client_height()).max(0.0)
    }
}

impl ScrollTarget for ScrollPane {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Content height, never smaller than the viewport.
    fn scroll_height(&self) -> f64 {
        let rows = self.lines.len().max(self.viewport_rows as usize);
        rows as f64 * self.cell_height
    }

    fn client_height(&self) -> f64 {
        f64::from(self.viewport_rows) * self.cell_height
    }

    fn offset_height(&self) -> f64 {
        self.client_height()
    }

    fn set_scroll_top(&mut self, top: f64) {
        self.scroll_top = if top.is_finite() {
            top.clamp(0.0, self.max_scroll_top())
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pane(lines: usize, rows: u16) -> ScrollPane {
        let mut pane = ScrollPane::new((0..lines).map(|i| format!("line {i}")).collect(), 16.0);
        pane.set_viewport_rows(rows);
        pane
    }

    #[test]
    fn test_dimensions_in_pixels() {
        let pane = pane(100, 20);
        assert_eq!(pane.client_height(), 320.0);
        assert_eq!(pane.offset_height(), 320.0);
        assert_eq!(pane.scroll_height(), 1600.0);
    }

    #[test]
    fn test_short_content_has_no_overflow() {
        let pane = pane(5, 20);
        assert_eq!(pane.scroll_height(), pane.client_height());
    }

    #[test]
    fn test_scroll_top_is_clamped() {
        let mut pane = pane(100, 20);
        pane.set_scroll_top(-50.0);
        assert_eq!(pane.scroll_top(), 0.0);
        pane.set_scroll_top(10_000.0);
        assert_eq!(pane.scroll_top(), 1280.0);
        pane.set_scroll_top(f64::NAN);
        assert_eq!(pane.scroll_top(), 0.0);
    }

    #[test]
    fn test_scroll_rows_and_visible_lines() {
        let mut pane = pane(100, 20);
        assert!(pane.scroll_rows(3));
        assert_eq!(pane.first_visible_line(), 3);
        assert_eq!(pane.visible_lines().len(), 20);
        assert_eq!(pane.visible_lines()[0], "line 3");

        assert!(pane.scroll_rows(-10));
        assert_eq!(pane.first_visible_line(), 0);
        assert!(!pane.scroll_rows(-1));
    }

    #[test]
    fn test_top_and_bottom() {
        let mut pane = pane(100, 20);
        assert!(pane.scroll_to_bottom());
        assert_eq!(pane.first_visible_line(), 80);
        assert!(!pane.scroll_to_bottom());
        assert!(pane.scroll_to_top());
        assert_eq!(pane.first_visible_line(), 0);
    }

    #[test]
    fn test_growing_viewport_reclamps() {
        let mut pane = pane(100, 20);
        pane.scroll_to_bottom();
        assert!(pane.set_viewport_rows(50));
        assert_eq!(pane.scroll_top(), 800.0);
        assert!(!pane.set_viewport_rows(50));
    }

    #[test]
    fn test_fractional_offset_floors_to_row() {
        let mut pane = pane(100, 20);
        pane.set_scroll_top(40.0);
        assert_eq!(pane.first_visible_line(), 2);
    }

    #[test]
    fn test_sample_has_overflowing_content() {
        let mut pane = ScrollPane::sample(16.0);
        pane.set_viewport_rows(10);
        assert!(pane.lines().len() > 10);
        assert!(pane.scroll_height() > pane.client_height());
    }
}
