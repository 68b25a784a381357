//! The [`Board`] type — a grid of phrase [`Tile`]s with a free center.

use std::fmt;

use rand::Rng;

use crate::error::Error;
use crate::phrases::PhraseSet;

/// Rows on a standard board.
pub const ROWS: i32 = 5;
/// Columns on a standard board.
pub const COLS: i32 = 5;

/// Sentinel phrase assigned to the free-space tile.
pub const FREE_PHRASE: &str = "Free Space";

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A board position. Row grows down, column grows right, both from 0.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// One grid position: a phrase and a marked flag.
///
/// The phrase never changes after board generation; `marked` flips on
/// toggle. `free` identifies the center tile, which stays marked for the
/// whole life of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub phrase: String,
    pub marked: bool,
    pub free: bool,
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A rows x cols grid of tiles, row-major.
#[derive(Debug, Clone)]
pub struct Board {
    rows: i32,
    cols: i32,
    tiles: Vec<Tile>,
}

impl Board {
    /// Generate a standard 5x5 board from the pool.
    pub fn standard(pool: &PhraseSet, rng: &mut impl Rng) -> Result<Self, Error> {
        Self::generate(pool, ROWS, COLS, rng)
    }

    /// Generate a fresh board: rows*cols−1 phrases drawn without
    /// repetition, assigned row-major around the free center.
    ///
    /// Only odd dimensions have a well-defined center; even boards are
    /// unsupported.
    pub fn generate(
        pool: &PhraseSet,
        rows: i32,
        cols: i32,
        rng: &mut impl Rng,
    ) -> Result<Self, Error> {
        debug_assert!(
            rows > 0 && cols > 0 && rows % 2 == 1 && cols % 2 == 1,
            "free space requires odd board dimensions"
        );

        let need = (rows * cols - 1) as usize;
        let mut drawn = pool.draw(need, rng)?.into_iter();
        let center = Coord::new(rows / 2, cols / 2);

        let mut tiles = Vec::with_capacity((rows * cols) as usize);
        for row in 0..rows {
            for col in 0..cols {
                if Coord::new(row, col) == center {
                    tiles.push(Tile {
                        phrase: FREE_PHRASE.to_string(),
                        marked: true,
                        free: true,
                    });
                } else {
                    // draw() returned exactly `need` phrases.
                    let phrase = drawn.next().expect("phrase draw exhausted");
                    tiles.push(Tile {
                        phrase: phrase.to_string(),
                        marked: false,
                        free: false,
                    });
                }
            }
        }

        log::debug!("generated {rows}x{cols} board, free tile at {center}");
        Ok(Self { rows, cols, tiles })
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// The free-space position.
    #[inline]
    pub fn center(&self) -> Coord {
        Coord::new(self.rows / 2, self.cols / 2)
    }

    /// Whether `coord` lies on the board.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row >= 0 && coord.row < self.rows && coord.col >= 0 && coord.col < self.cols
    }

    #[inline]
    fn index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some((coord.row * self.cols + coord.col) as usize)
        } else {
            None
        }
    }

    /// The tile at `coord`, if on the board.
    pub fn tile(&self, coord: Coord) -> Option<&Tile> {
        self.index(coord).map(|i| &self.tiles[i])
    }

    pub(crate) fn tile_mut(&mut self, coord: Coord) -> Option<&mut Tile> {
        self.index(coord).map(|i| &mut self.tiles[i])
    }

    /// Whether the tile at `coord` is marked. Off-board positions read
    /// as unmarked.
    #[inline]
    pub fn marked(&self, coord: Coord) -> bool {
        self.tile(coord).is_some_and(|t| t.marked)
    }

    /// Row-major iterator over `(Coord, &Tile)`.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Tile)> {
        self.tiles.iter().enumerate().map(|(i, t)| {
            let i = i as i32;
            (Coord::new(i / self.cols, i % self.cols), t)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn standard_board_shape() {
        let board = Board::standard(&PhraseSet::default(), &mut rng()).unwrap();
        assert_eq!(board.rows(), 5);
        assert_eq!(board.cols(), 5);
        assert_eq!(board.center(), Coord::new(2, 2));
        assert_eq!(board.iter().count(), 25);
    }

    #[test]
    fn exactly_one_free_tile_marked_at_center() {
        let board = Board::standard(&PhraseSet::default(), &mut rng()).unwrap();
        let free: Vec<_> = board.iter().filter(|(_, t)| t.free).collect();
        assert_eq!(free.len(), 1);
        let (coord, tile) = free[0];
        assert_eq!(coord, Coord::new(2, 2));
        assert!(tile.marked);
        assert_eq!(tile.phrase, FREE_PHRASE);
    }

    #[test]
    fn non_free_tiles_distinct_and_unmarked() {
        let pool = PhraseSet::default();
        let board = Board::standard(&pool, &mut rng()).unwrap();
        let mut phrases = HashSet::new();
        for (_, tile) in board.iter().filter(|(_, t)| !t.free) {
            assert!(!tile.marked);
            assert!(pool.phrases().contains(&tile.phrase));
            assert!(phrases.insert(tile.phrase.clone()), "repeated phrase");
        }
        assert_eq!(phrases.len(), 24);
    }

    #[test]
    fn small_pool_is_rejected() {
        let pool = PhraseSet::new((0..20).map(|i| format!("phrase {i}")));
        let err = Board::standard(&pool, &mut rng()).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientPhrases {
                available: 20,
                required: 24
            }
        );
    }

    #[test]
    fn contains_and_lookup() {
        let board = Board::standard(&PhraseSet::default(), &mut rng()).unwrap();
        assert!(board.contains(Coord::new(0, 0)));
        assert!(board.contains(Coord::new(4, 4)));
        assert!(!board.contains(Coord::new(5, 0)));
        assert!(!board.contains(Coord::new(0, -1)));
        assert!(board.tile(Coord::new(5, 0)).is_none());
        assert!(!board.marked(Coord::new(-1, -1)));
    }
}
