//! Scrollbar overlay and scroll activity detection for terminal UIs.
//!
//! [`scrollbar`] holds the host-independent widgets; the remaining modules
//! are the terminal host used by the `scrollthumb` binary.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod log;
pub mod pane;
pub mod scrollbar;
pub mod tui;
