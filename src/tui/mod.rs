//! Terminal UI components using ratatui

mod figure;
mod terminal;
mod ui;

pub use terminal::Tui;
pub use ui::render;
