//! Error taxonomy: the two ways board operations can fail.

use std::fmt;

use crate::board::Coord;

/// Errors produced by board creation and tile toggling.
///
/// Both are terminal conditions rather than things to retry:
/// [`InsufficientPhrases`](Error::InsufficientPhrases) is a configuration
/// problem that should stop the application from starting, and
/// [`OutOfBounds`](Error::OutOfBounds) indicates a front-end routed
/// coordinates the board never exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The phrase pool holds fewer distinct phrases than the board needs.
    InsufficientPhrases { available: usize, required: usize },
    /// A coordinate outside the board reached the core.
    OutOfBounds { coord: Coord, rows: i32, cols: i32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientPhrases {
                available,
                required,
            } => write!(
                f,
                "phrase pool has {available} distinct phrases, the board needs {required}"
            ),
            Self::OutOfBounds { coord, rows, cols } => {
                write!(f, "tile {coord} is outside the {rows}x{cols} board")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_counts() {
        let e = Error::InsufficientPhrases {
            available: 20,
            required: 24,
        };
        let s = e.to_string();
        assert!(s.contains("20"));
        assert!(s.contains("24"));
    }

    #[test]
    fn display_mentions_coordinate() {
        let e = Error::OutOfBounds {
            coord: Coord::new(7, 1),
            rows: 5,
            cols: 5,
        };
        assert!(e.to_string().contains("(7, 1)"));
    }
}
