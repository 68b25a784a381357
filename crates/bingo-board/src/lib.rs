//! **bingo-board** — core game logic for phrase bingo.
//!
//! This crate owns the rules of the game and nothing else: the board of
//! phrase tiles with its free space, mark/unmark toggling behind a freeze
//! flag, win detection over rows, columns and diagonals, and the flash
//! celebration as an explicit tick-driven state machine. Rendering and
//! input live in separate crates; everything here is plain in-memory
//! state that a front end queries and repaints from.

pub mod board;
pub mod celebrate;
pub mod error;
pub mod phrases;
pub mod state;
pub mod win;

pub use board::{Board, Coord, Tile, COLS, ROWS};
pub use celebrate::{Celebration, CelebrationFrame, FlashTone, FLASH_INTERVAL, FLASH_STEPS};
pub use error::Error;
pub use phrases::{PhraseSet, DEFAULT_PHRASES};
pub use state::{GameState, Toggle};
pub use win::{check_win, LineKind, WinLine};
