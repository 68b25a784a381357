//! Game state: the board plus the freeze flag.

use rand::Rng;

use crate::board::{Board, Coord};
use crate::error::Error;
use crate::phrases::PhraseSet;

/// Outcome of a toggle request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Toggle {
    /// The tile flipped; `marked` is its new state. The caller should
    /// repaint the tile and run win detection.
    Flipped { marked: bool },
    /// Frozen game or free-space tile: nothing changed.
    Ignored,
}

/// The board together with the frozen flag.
///
/// `frozen` flips to true the moment a win is detected and stays set
/// until [`reset`](GameState::reset); while set, every toggle is a
/// no-op, so clicks during (and after) the celebration cannot alter an
/// already-decided game.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    frozen: bool,
}

impl GameState {
    /// Start a game on a fresh standard board.
    pub fn new(pool: &PhraseSet, rng: &mut impl Rng) -> Result<Self, Error> {
        Ok(Self {
            board: Board::standard(pool, rng)?,
            frozen: false,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn frozen(&self) -> bool {
        self.frozen
    }

    /// Stop accepting toggles. Called when a win is detected.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Flip the marked flag of the tile at `coord`.
    ///
    /// Returns [`Toggle::Ignored`] without touching anything when the
    /// game is frozen or the tile is the free space. A coordinate off
    /// the board is a caller bug and comes back as
    /// [`Error::OutOfBounds`].
    pub fn toggle(&mut self, coord: Coord) -> Result<Toggle, Error> {
        if !self.board.contains(coord) {
            return Err(Error::OutOfBounds {
                coord,
                rows: self.board.rows(),
                cols: self.board.cols(),
            });
        }
        if self.frozen {
            return Ok(Toggle::Ignored);
        }
        let tile = self.board.tile_mut(coord).expect("checked bounds");
        if tile.free {
            return Ok(Toggle::Ignored);
        }
        tile.marked = !tile.marked;
        Ok(Toggle::Flipped {
            marked: tile.marked,
        })
    }

    /// Replace the board with a freshly generated one and unfreeze.
    ///
    /// Keeps the current dimensions. On a pool error the old board is
    /// left untouched.
    pub fn reset(&mut self, pool: &PhraseSet, rng: &mut impl Rng) -> Result<(), Error> {
        self.board = Board::generate(pool, self.board.rows(), self.board.cols(), rng)?;
        self.frozen = false;
        log::debug!("game reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    fn fresh() -> GameState {
        GameState::new(&PhraseSet::default(), &mut rng()).unwrap()
    }

    #[test]
    fn toggle_twice_is_involution() {
        let mut state = fresh();
        let coords: Vec<Coord> = state.board().iter().map(|(c, _)| c).collect();
        for coord in coords {
            if coord == state.board().center() {
                continue;
            }
            let before = state.board().marked(coord);
            state.toggle(coord).unwrap();
            state.toggle(coord).unwrap();
            assert_eq!(state.board().marked(coord), before);
        }
    }

    #[test]
    fn toggle_reports_new_state() {
        let mut state = fresh();
        let c = Coord::new(0, 0);
        assert_eq!(state.toggle(c).unwrap(), Toggle::Flipped { marked: true });
        assert_eq!(state.toggle(c).unwrap(), Toggle::Flipped { marked: false });
    }

    #[test]
    fn free_space_never_toggles() {
        let mut state = fresh();
        let center = state.board().center();
        for _ in 0..3 {
            assert_eq!(state.toggle(center).unwrap(), Toggle::Ignored);
            assert!(state.board().marked(center));
        }
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let mut state = fresh();
        let err = state.toggle(Coord::new(5, 2)).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { .. }));
        let err = state.toggle(Coord::new(0, -1)).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { .. }));
    }

    #[test]
    fn frozen_ignores_every_toggle() {
        let mut state = fresh();
        state.toggle(Coord::new(1, 1)).unwrap();
        state.freeze();
        for row in 0..5 {
            for col in 0..5 {
                assert_eq!(state.toggle(Coord::new(row, col)).unwrap(), Toggle::Ignored);
            }
        }
        // The mark made before the freeze is untouched.
        assert!(state.board().marked(Coord::new(1, 1)));
    }

    #[test]
    fn reset_unfreezes_and_rebuilds() {
        let mut state = fresh();
        state.toggle(Coord::new(0, 0)).unwrap();
        state.freeze();
        state.reset(&PhraseSet::default(), &mut rng()).unwrap();
        assert!(!state.frozen());
        assert!(!state.board().marked(Coord::new(0, 0)));
        assert!(state.board().marked(state.board().center()));
        assert_eq!(state.toggle(Coord::new(0, 0)).unwrap(), Toggle::Flipped { marked: true });
    }

    #[test]
    fn failed_reset_keeps_old_board() {
        let mut state = fresh();
        state.toggle(Coord::new(3, 4)).unwrap();
        let tiny = PhraseSet::new(["only", "a", "few"]);
        let err = state.reset(&tiny, &mut rng()).unwrap_err();
        assert!(matches!(err, Error::InsufficientPhrases { .. }));
        assert!(state.board().marked(Coord::new(3, 4)));
    }
}
