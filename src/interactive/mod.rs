//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, LINES_PER_ENTRY, Message, MessageStyle, Palette, Statistics, Theme, run_tui};
