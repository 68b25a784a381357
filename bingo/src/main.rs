//! Phrase bingo — terminal entry point.
//!
//! Run: `cargo run --bin bingo [phrases.json]`

use std::path::Path;

use bingo_crossterm::CrosstermDriver;
use bingo_lib::{config, BingoModel, UI_HEIGHT, UI_WIDTH};
use bingo_screen::{App, AppConfig};

use bingo_board::PhraseSet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Optional phrase file; otherwise the built-in pool. A pool too
    // small for a board aborts startup here.
    let pool = match std::env::args().nth(1) {
        Some(path) => config::load_phrases(Path::new(&path))?,
        None => PhraseSet::default(),
    };

    let model = BingoModel::new(pool)?;
    let driver = CrosstermDriver::new();
    let mut app = App::new(AppConfig {
        model,
        driver,
        width: UI_WIDTH,
        height: UI_HEIGHT,
    });
    app.run()?;
    Ok(())
}
