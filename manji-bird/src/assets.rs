//! Bitmaps drawn by the game. Every byte is an RGB332 color and every byte
//! is drawn; there is no transparent key.

pub const BIRD_WIDTH: i32 = 5;
pub const BIRD_HEIGHT: i32 = 4;

#[rustfmt::skip]
pub static BIRD: [u8; (BIRD_WIDTH * BIRD_HEIGHT) as usize] = [
    0x13, 0xfc, 0xfc, 0xfc, 0x13,
    0xfc, 0xfc, 0xff, 0x00, 0x13,
    0xfc, 0xfc, 0xfc, 0xe0, 0xe0,
    0x13, 0xfc, 0xfc, 0xfc, 0x13,
];

pub const GLYPH_WIDTH: i32 = 3;
pub const GLYPH_HEIGHT: i32 = 5;

/// Index of the first digit glyph; letters come before it.
pub const FIRST_DIGIT: usize = 5;

/// White-on-black 3×5 glyphs: S, C, O, R, E, then 0 through 9.
#[rustfmt::skip]
pub static FONT: [[u8; (GLYPH_WIDTH * GLYPH_HEIGHT) as usize]; 15] = [
    [0xff, 0xff, 0xff,  0xff, 0x00, 0x00,  0xff, 0xff, 0xff,  0x00, 0x00, 0xff,  0xff, 0xff, 0xff], // S
    [0xff, 0xff, 0xff,  0xff, 0x00, 0x00,  0xff, 0x00, 0x00,  0xff, 0x00, 0x00,  0xff, 0xff, 0xff], // C
    [0xff, 0xff, 0xff,  0xff, 0x00, 0xff,  0xff, 0x00, 0xff,  0xff, 0x00, 0xff,  0xff, 0xff, 0xff], // O
    [0xff, 0xff, 0x00,  0xff, 0x00, 0xff,  0xff, 0xff, 0x00,  0xff, 0x00, 0xff,  0xff, 0x00, 0xff], // R
    [0xff, 0xff, 0xff,  0xff, 0x00, 0x00,  0xff, 0xff, 0x00,  0xff, 0x00, 0x00,  0xff, 0xff, 0xff], // E
    [0xff, 0xff, 0xff,  0xff, 0x00, 0xff,  0xff, 0x00, 0xff,  0xff, 0x00, 0xff,  0xff, 0xff, 0xff], // 0
    [0x00, 0xff, 0x00,  0xff, 0xff, 0x00,  0x00, 0xff, 0x00,  0x00, 0xff, 0x00,  0xff, 0xff, 0xff], // 1
    [0xff, 0xff, 0xff,  0x00, 0x00, 0xff,  0xff, 0xff, 0xff,  0xff, 0x00, 0x00,  0xff, 0xff, 0xff], // 2
    [0xff, 0xff, 0xff,  0x00, 0x00, 0xff,  0xff, 0xff, 0xff,  0x00, 0x00, 0xff,  0xff, 0xff, 0xff], // 3
    [0xff, 0x00, 0xff,  0xff, 0x00, 0xff,  0xff, 0xff, 0xff,  0x00, 0x00, 0xff,  0x00, 0x00, 0xff], // 4
    [0xff, 0xff, 0xff,  0xff, 0x00, 0x00,  0xff, 0xff, 0xff,  0x00, 0x00, 0xff,  0xff, 0xff, 0xff], // 5
    [0xff, 0xff, 0xff,  0xff, 0x00, 0x00,  0xff, 0xff, 0xff,  0xff, 0x00, 0xff,  0xff, 0xff, 0xff], // 6
    [0xff, 0xff, 0xff,  0x00, 0x00, 0xff,  0x00, 0x00, 0xff,  0x00, 0x00, 0xff,  0x00, 0x00, 0xff], // 7
    [0xff, 0xff, 0xff,  0xff, 0x00, 0xff,  0xff, 0xff, 0xff,  0xff, 0x00, 0xff,  0xff, 0xff, 0xff], // 8
    [0xff, 0xff, 0xff,  0xff, 0x00, 0xff,  0xff, 0xff, 0xff,  0x00, 0x00, 0xff,  0xff, 0xff, 0xff], // 9
];

/// The word "SCORE" is the first five glyphs.
pub const SCORE_LABEL: core::ops::Range<usize> = 0..5;
