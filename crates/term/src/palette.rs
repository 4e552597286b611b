//! Tile colors. Pure lookups keyed by tile value.

use crate::fb::Rgb;
use crate::types::Tile;

/// Background behind the tiles.
pub const BOARD_BG: Rgb = Rgb::new(187, 173, 160);

/// Fill of an empty slot.
pub const EMPTY_TILE: Rgb = Rgb::new(205, 193, 180);

/// Fill for values past 2048.
pub const HIGH_TILE: Rgb = Rgb::new(60, 58, 50);

const DARK_TEXT: Rgb = Rgb::new(0, 0, 0);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Fill color of a tile; 0 gives the empty-slot color.
pub fn tile_color(value: Tile) -> Rgb {
    match value {
        0 => EMPTY_TILE,
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        _ => HIGH_TILE,
    }
}

/// Text color for the number on a tile.
pub fn text_color(value: Tile) -> Rgb {
    if tile_color(value) == HIGH_TILE {
        LIGHT_TEXT
    } else {
        DARK_TEXT
    }
}
