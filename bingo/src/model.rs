//! The application model: board state wired to the screen runtime.
//!
//! Clicks (or cursor + invoke) route into [`GameState::toggle`]; every
//! flip runs win detection; a win freezes the game on the spot and
//! starts the tick-driven celebration. Drawing repaints the whole
//! screen from state: header, the 5x5 tile grid, and a status line
//! that doubles as the win notification.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use bingo_board::{
    check_win, Celebration, CelebrationFrame, Coord, Error, GameState, PhraseSet, Toggle,
    FLASH_INTERVAL,
};
use bingo_screen::{
    app::{tick_after, Effect, Model},
    AttrMask, Cell, Key, Msg, MouseAction, Point, Rect, Screen, Style,
};

use crate::colors;

/// Tile pitch: 15 painted columns plus a 1-column gap.
const TILE_W: i32 = 16;
const TILE_FILL_W: i32 = 15;
const TILE_H: i32 = 4;
/// Header rows above the board.
const HEADER_H: i32 = 2;
/// Wrapped-phrase width inside a tile (one space of padding per side).
const TEXT_W: usize = (TILE_FILL_W - 2) as usize;

pub const UI_WIDTH: i32 = TILE_W * bingo_board::COLS;
pub const UI_HEIGHT: i32 = HEADER_H + TILE_H * bingo_board::ROWS + 1;

const TITLE_TEXT: &str = "Click the tiles that apply to your Python journey.";
const SUBTITLE_TEXT: &str = "Get five in a row to win bingo.";
const HINTS_TEXT: &str = "space/click mark · arrows move · r reset · f fullscreen · q quit";

/// The bingo application model.
pub struct BingoModel {
    state: GameState,
    pool: PhraseSet,
    rng: SmallRng,
    celebration: Option<Celebration>,
    cursor: Coord,
    notice: Option<String>,
    /// Current tick schedule; ticks carrying an older value are stale.
    tick_seq: u64,
    fullscreen: bool,
}

impl BingoModel {
    /// Build a model on a fresh board. Fails when the pool cannot fill
    /// a board; `main` treats that as fatal.
    pub fn new(pool: PhraseSet) -> Result<Self, Error> {
        let rng = SmallRng::from_os_rng();
        Self::with_rng(pool, rng)
    }

    /// Like [`new`](Self::new) with a caller-supplied rng.
    pub fn with_rng(pool: PhraseSet, mut rng: SmallRng) -> Result<Self, Error> {
        let state = GameState::new(&pool, &mut rng)?;
        Ok(Self {
            state,
            pool,
            rng,
            celebration: None,
            cursor: Coord::new(0, 0),
            notice: None,
            tick_seq: 0,
            fullscreen: false,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    // -------------------------------------------------------------------
    // Update
    // -------------------------------------------------------------------

    fn handle_key(&mut self, key: Key) -> Option<Effect> {
        match key {
            Key::ArrowUp => self.move_cursor(-1, 0),
            Key::ArrowDown => self.move_cursor(1, 0),
            Key::ArrowLeft => self.move_cursor(0, -1),
            Key::ArrowRight => self.move_cursor(0, 1),
            Key::Enter | Key::Char(' ') => return self.invoke(self.cursor),
            Key::Char('r') | Key::Char('R') => self.reset(),
            Key::Char('f') | Key::Char('F') => {
                self.fullscreen = !self.fullscreen;
                return Some(Effect::Fullscreen(self.fullscreen));
            }
            Key::Char('q') | Key::Char('Q') | Key::Escape => return Some(Effect::End),
            _ => {}
        }
        None
    }

    fn move_cursor(&mut self, drow: i32, dcol: i32) {
        let board = self.state.board();
        self.cursor = Coord::new(
            (self.cursor.row + drow).clamp(0, board.rows() - 1),
            (self.cursor.col + dcol).clamp(0, board.cols() - 1),
        );
    }

    /// A tile was clicked or invoked: toggle it and run win detection.
    fn invoke(&mut self, coord: Coord) -> Option<Effect> {
        match self.state.toggle(coord) {
            Ok(Toggle::Flipped { .. }) => {
                if let Some(win) = check_win(self.state.board()) {
                    // The game is decided now; the flashing is only a
                    // visual acknowledgment.
                    self.state.freeze();
                    let mut celebration = Celebration::new(win);
                    celebration.tick();
                    self.celebration = Some(celebration);
                    self.tick_seq += 1;
                    return Some(tick_after(FLASH_INTERVAL, self.tick_seq));
                }
                None
            }
            Ok(Toggle::Ignored) => None,
            Err(e) => {
                debug_assert!(false, "toggle contract violation: {e}");
                log::error!("rejected toggle: {e}");
                None
            }
        }
    }

    fn handle_tick(&mut self, seq: u64) -> Option<Effect> {
        if seq != self.tick_seq {
            return None; // stale schedule, e.g. reset mid-celebration
        }
        let celebration = self.celebration.as_mut()?;
        match celebration.tick() {
            CelebrationFrame::Wash(_) => Some(tick_after(FLASH_INTERVAL, self.tick_seq)),
            CelebrationFrame::Settle => {
                self.notice = Some(format!(
                    "Bingo! Five in a row on {}. Press r to play again.",
                    celebration.win().kind
                ));
                self.celebration = None;
                None
            }
        }
    }

    fn reset(&mut self) {
        match self.state.reset(&self.pool, &mut self.rng) {
            Ok(()) => {
                self.celebration = None;
                self.notice = None;
                self.tick_seq += 1;
            }
            Err(e) => {
                log::error!("reset failed: {e}");
                self.notice = Some(format!("Reset failed: {e}"));
            }
        }
    }

    // -------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------

    fn draw_header(&self, screen: &mut Screen) {
        let bold = Style::default().with_attrs(AttrMask::BOLD);
        screen.put_str(Point::new(1, 0), TITLE_TEXT, bold);
        screen.put_str(Point::new(1, 1), SUBTITLE_TEXT, Style::default());
    }

    fn draw_board(&self, screen: &mut Screen) {
        let wash = self
            .celebration
            .as_ref()
            .and_then(|c| c.wash())
            .map(colors::flash);

        for (coord, tile) in self.state.board().iter() {
            let bg = match wash {
                Some(color) => color,
                None if tile.marked => colors::MARKED,
                None => colors::row_base(coord.row),
            };
            let mut style = Style::default().with_fg(colors::INK).with_bg(bg);
            if coord == self.cursor {
                style = style.with_attrs(style.attrs | AttrMask::REVERSE);
            }
            if tile.free {
                style = style.with_attrs(style.attrs | AttrMask::BOLD);
            }

            let rect = tile_rect(coord);
            screen.fill_rect(rect, Cell::blank(style));

            let lines = if tile.free {
                vec![
                    "☆ ☆ ☆ ☆".to_string(),
                    tile.phrase.clone(),
                    "☆ ☆ ☆ ☆".to_string(),
                ]
            } else {
                wrap(&tile.phrase, TEXT_W, TILE_H as usize)
            };

            let start_y = rect.min.y + (TILE_H - lines.len() as i32).max(0) / 2;
            for (i, line) in lines.iter().enumerate() {
                let len = line.chars().count() as i32;
                let x = rect.min.x + (TILE_FILL_W - len).max(0) / 2;
                screen.put_str(Point::new(x, start_y + i as i32), line, style);
            }
        }
    }

    fn draw_status(&self, screen: &mut Screen) {
        let y = UI_HEIGHT - 1;
        match &self.notice {
            Some(notice) => {
                let style = Style::default()
                    .with_fg(colors::INK)
                    .with_bg(colors::MARKED)
                    .with_attrs(AttrMask::BOLD);
                screen.fill_rect(Rect::new(0, y, UI_WIDTH, y + 1), Cell::blank(style));
                screen.put_str(Point::new(1, y), notice, style);
            }
            None => {
                let style = Style::default().with_attrs(AttrMask::DIM);
                screen.put_str(Point::new(1, y), HINTS_TEXT, style);
            }
        }
    }
}

impl Model for BingoModel {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init => None,
            Msg::KeyDown(key) => self.handle_key(key),
            Msg::Mouse {
                action: MouseAction::Main,
                pos,
            } => match hit_test(pos) {
                Some(coord) => {
                    self.cursor = coord;
                    self.invoke(coord)
                }
                None => None,
            },
            Msg::Mouse { .. } => None,
            Msg::Tick { seq } => self.handle_tick(seq),
            Msg::Resize { .. } => None,
            Msg::Quit => Some(Effect::End),
        }
    }

    fn draw(&self, screen: &mut Screen) {
        screen.fill(Cell::default());
        self.draw_header(screen);
        self.draw_board(screen);
        self.draw_status(screen);
    }
}

// -----------------------------------------------------------------------
// Layout
// -----------------------------------------------------------------------

/// Painted rectangle of the tile at `coord` (gap column excluded).
fn tile_rect(coord: Coord) -> Rect {
    let x0 = coord.col * TILE_W;
    let y0 = HEADER_H + coord.row * TILE_H;
    Rect::new(x0, y0, x0 + TILE_FILL_W, y0 + TILE_H)
}

/// Map a screen position to the tile under it, if any.
fn hit_test(pos: Point) -> Option<Coord> {
    if pos.y < HEADER_H || pos.x < 0 {
        return None;
    }
    if pos.x % TILE_W >= TILE_FILL_W {
        return None; // gap between columns
    }
    let coord = Coord::new((pos.y - HEADER_H) / TILE_H, pos.x / TILE_W);
    if coord.row < bingo_board::ROWS && coord.col < bingo_board::COLS {
        Some(coord)
    } else {
        None
    }
}

/// Word-wrap `text` to `width` columns, at most `max_lines` lines.
/// Overlong words are clipped to the width.
fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word: String = word.chars().take(width).collect();
        let wlen = word.chars().count();
        if current_len > 0 && current_len + 1 + wlen > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
            if lines.len() == max_lines {
                return lines;
            }
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(&word);
        current_len += wlen;
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}
