//! Application state and the driver loop's logic

pub mod command;
pub mod screen;
pub mod state;

pub use screen::{Screen, Tone};
pub use state::App;
