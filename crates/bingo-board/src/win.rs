//! Win detection over rows, columns and diagonals.

use std::fmt;

use crate::board::{Board, Coord};

/// Which line a win landed on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    Row(i32),
    Column(i32),
    Diagonal,
    AntiDiagonal,
}

impl LineKind {
    /// The coordinates of this line on a rows x cols board, in reading
    /// order (left-to-right for rows, top-to-bottom otherwise).
    pub fn coords(self, rows: i32, cols: i32) -> Vec<Coord> {
        match self {
            Self::Row(row) => (0..cols).map(|col| Coord::new(row, col)).collect(),
            Self::Column(col) => (0..rows).map(|row| Coord::new(row, col)).collect(),
            Self::Diagonal => (0..rows).map(|i| Coord::new(i, i)).collect(),
            Self::AntiDiagonal => (0..rows).map(|i| Coord::new(i, cols - 1 - i)).collect(),
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(row) => write!(f, "row {row}"),
            Self::Column(col) => write!(f, "column {col}"),
            Self::Diagonal => f.write_str("the diagonal"),
            Self::AntiDiagonal => f.write_str("the anti-diagonal"),
        }
    }
}

/// A completed line: its kind plus the ordered winning coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinLine {
    pub kind: LineKind,
    pub tiles: Vec<Coord>,
}

/// Scan the board for a fully marked line.
///
/// Pure: reads the board, mutates nothing. Lines are tried in a fixed
/// priority (rows top-to-bottom, then columns left-to-right, then the
/// main diagonal, then the anti-diagonal) and only the first match is
/// reported, even when one toggle completes several lines at once.
pub fn check_win(board: &Board) -> Option<WinLine> {
    let rows = board.rows();
    let cols = board.cols();

    let candidates = (0..rows)
        .map(LineKind::Row)
        .chain((0..cols).map(LineKind::Column))
        .chain([LineKind::Diagonal, LineKind::AntiDiagonal]);

    for kind in candidates {
        let tiles = kind.coords(rows, cols);
        if tiles.iter().all(|&c| board.marked(c)) {
            log::info!("bingo on {kind}");
            return Some(WinLine { kind, tiles });
        }
    }
    None
}
