//! Views module
//!
//! Text rendering of dashboard and scanner view models, plus the terminal
//! implementation of both rendering contracts.

pub mod render;
pub mod terminal;

pub use terminal::TerminalView;
