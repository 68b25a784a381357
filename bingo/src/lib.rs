//! Phrase bingo — a 5x5 bingo board for the terminal.

pub mod colors;
pub mod config;
pub mod model;

pub use model::{BingoModel, UI_HEIGHT, UI_WIDTH};
