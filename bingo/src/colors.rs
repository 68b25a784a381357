//! The board's pastel color palette.

use bingo_board::FlashTone;
use bingo_screen::Color;

/// Per-row base colors, light to deeper periwinkle.
pub const ROW_BASE: [Color; 5] = [
    Color::rgb(0xE0, 0xE3, 0xFF),
    Color::rgb(0xCA, 0xCF, 0xFF),
    Color::rgb(0xB6, 0xBD, 0xFF),
    Color::rgb(0xA1, 0xAA, 0xFF),
    Color::rgb(0x95, 0x9F, 0xFD),
];

/// Background of a marked tile (and the free space).
pub const MARKED: Color = Color::rgb(0xFF, 0xBC, 0x6A);

/// Celebration wash tones.
pub const FLASH_LIGHT: Color = Color::rgb(0xAB, 0xEC, 0xB1);
pub const FLASH_DARK: Color = Color::rgb(0x7C, 0xD3, 0x84);

/// Dark ink used for tile text.
pub const INK: Color = Color::rgb(0x00, 0x07, 0x45);

/// Base color for an unmarked tile on the given row.
pub fn row_base(row: i32) -> Color {
    ROW_BASE[row.rem_euclid(ROW_BASE.len() as i32) as usize]
}

/// Wash color for a flash tone.
pub fn flash(tone: FlashTone) -> Color {
    match tone {
        FlashTone::Light => FLASH_LIGHT,
        FlashTone::Dark => FLASH_DARK,
    }
}
