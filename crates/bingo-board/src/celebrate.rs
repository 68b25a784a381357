//! The win celebration — a tick-driven flash state machine.
//!
//! The front end owns the clock: it calls [`Celebration::tick`] once per
//! scheduled interval and repaints from whatever [`Celebration::wash`]
//! reports. Four whole-board washes with alternating tones, then one
//! settle step that returns every tile to its semantic color and carries
//! the win notification. The game is already frozen by the time a
//! `Celebration` exists, so the machine only sequences visuals.

use std::time::Duration;

use crate::win::WinLine;

/// Number of flash steps before the settle step.
pub const FLASH_STEPS: u32 = 4;

/// Delay between celebration ticks.
pub const FLASH_INTERVAL: Duration = Duration::from_millis(180);

/// Wash tone for one flash step. Tones alternate, light first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlashTone {
    Light,
    Dark,
}

/// What the front end should display after a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CelebrationFrame {
    /// Paint every tile with the given tone.
    Wash(FlashTone),
    /// Restore semantic tile colors and present the win notification.
    Settle,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Flashing(u32),
    Settled,
}

/// Sequencer for the flash animation of one win.
#[derive(Debug, Clone)]
pub struct Celebration {
    win: WinLine,
    phase: Phase,
}

impl Celebration {
    pub fn new(win: WinLine) -> Self {
        Self {
            win,
            phase: Phase::Flashing(0),
        }
    }

    /// The line being celebrated.
    pub fn win(&self) -> &WinLine {
        &self.win
    }

    /// Advance one step. The first [`FLASH_STEPS`] calls yield washes,
    /// the next yields [`CelebrationFrame::Settle`]; further calls keep
    /// yielding `Settle` without changing anything.
    pub fn tick(&mut self) -> CelebrationFrame {
        match self.phase {
            Phase::Flashing(step) if step < FLASH_STEPS => {
                self.phase = Phase::Flashing(step + 1);
                CelebrationFrame::Wash(tone(step))
            }
            _ => {
                self.phase = Phase::Settled;
                CelebrationFrame::Settle
            }
        }
    }

    /// Tone currently covering the board, or `None` when no wash is up
    /// (before the first tick and after settling).
    pub fn wash(&self) -> Option<FlashTone> {
        match self.phase {
            Phase::Flashing(step) if step > 0 => Some(tone(step - 1)),
            _ => None,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Settled
    }
}

fn tone(step: u32) -> FlashTone {
    if step % 2 == 0 {
        FlashTone::Light
    } else {
        FlashTone::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;
    use crate::win::LineKind;

    fn celebration() -> Celebration {
        let kind = LineKind::Row(0);
        Celebration::new(WinLine {
            kind,
            tiles: kind.coords(5, 5),
        })
    }

    #[test]
    fn four_alternating_washes_then_settle() {
        let mut c = celebration();
        assert_eq!(c.tick(), CelebrationFrame::Wash(FlashTone::Light));
        assert_eq!(c.tick(), CelebrationFrame::Wash(FlashTone::Dark));
        assert_eq!(c.tick(), CelebrationFrame::Wash(FlashTone::Light));
        assert_eq!(c.tick(), CelebrationFrame::Wash(FlashTone::Dark));
        assert_eq!(c.tick(), CelebrationFrame::Settle);
        assert!(c.is_settled());
    }

    #[test]
    fn wash_tracks_current_tone() {
        let mut c = celebration();
        assert_eq!(c.wash(), None);
        c.tick();
        assert_eq!(c.wash(), Some(FlashTone::Light));
        c.tick();
        assert_eq!(c.wash(), Some(FlashTone::Dark));
        c.tick();
        c.tick();
        c.tick();
        assert_eq!(c.wash(), None);
    }

    #[test]
    fn settle_is_sticky() {
        let mut c = celebration();
        for _ in 0..5 {
            c.tick();
        }
        assert_eq!(c.tick(), CelebrationFrame::Settle);
        assert!(c.is_settled());
    }

    #[test]
    fn keeps_the_winning_line() {
        let c = celebration();
        assert_eq!(c.win().kind, LineKind::Row(0));
        assert_eq!(c.win().tiles[4], Coord::new(0, 4));
    }
}
