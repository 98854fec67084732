//! # Software Rasterizer
//!
//! Every frame is redrawn from scratch into the pixel buffer: sky, pipes,
//! bird, then the score bar on top.
//!
//! ## Clipping
//!
//! Only some primitives clip:
//!
//! | Primitive                  | Clips? |
//! |----------------------------|--------|
//! | [`Screen::draw_pixel`]     | no     |
//! | [`Screen::draw_rect`]      | no     |
//! | [`Screen::draw_sprite`]    | yes    |
//! | [`Screen::draw_pipe`]      | yes    |
//! | [`Screen::draw_digit`]     | yes    |
//!
//! Callers of the unclipped primitives pass on-screen coordinates.

use cpulator::pixel_buffer::{self, Framebuffer, HEIGHT, WIDTH};

use crate::{
    assets::{self, BIRD, BIRD_HEIGHT, BIRD_WIDTH, FONT, GLYPH_HEIGHT, GLYPH_WIDTH},
    world::{PIPE_GAP, PIPE_WIDTH, PLAYER_X, World},
};

pub const SKY: u8 = 0x13;
pub const PIPE: u8 = 0x1C;
pub const HUD_BACKGROUND: u8 = 0x00;
pub const HUD_TEXT: u8 = 0xFF;

/// Rows covered by the score bar.
pub const HUD_HEIGHT: i32 = 7;
const LABEL_X: i32 = 1;
const TEXT_Y: i32 = 1;
/// Horizontal distance between consecutive glyphs.
const GLYPH_ADVANCE: i32 = GLYPH_WIDTH + 1;
const COLON_X: i32 = 21;
const TENS_X: i32 = 26;
const UNITS_X: i32 = 30;

/// Drawing operations over a [`Framebuffer`].
pub struct Screen<'a, F: Framebuffer> {
    fb: &'a mut F,
}

impl<'a, F: Framebuffer> Screen<'a, F> {
    pub fn new(fb: &'a mut F) -> Self {
        Self { fb }
    }

    #[inline(always)]
    pub fn draw_pixel(&mut self, color: u8, x: i32, y: i32) {
        debug_assert!((0..WIDTH).contains(&x) && (0..HEIGHT).contains(&y), "pixel ({x}, {y}) off screen");
        self.fb.write(pixel_buffer::offset(x, y), color);
    }

    /// Fill `[x1, x2) × [y1, y2)`.
    pub fn draw_rect(&mut self, color: u8, x1: i32, y1: i32, x2: i32, y2: i32) {
        for y in y1..y2 {
            for x in x1..x2 {
                self.draw_pixel(color, x, y);
            }
        }
    }

    /// Blit a row-major `w × h` bitmap with its top-left at `(x, y)`,
    /// skipping whatever falls off screen.
    pub fn draw_sprite(&mut self, bitmap: &[u8], x: i32, y: i32, w: i32, h: i32) {
        debug_assert!(bitmap.len() >= (w * h) as usize);

        for j in 0..h {
            let row = y + j;
            if !(0..HEIGHT).contains(&row) {
                continue;
            }
            for i in 0..w {
                let col = x + i;
                if !(0..WIDTH).contains(&col) {
                    continue;
                }
                self.draw_pixel(bitmap[(i + j * w) as usize], col, row);
            }
        }
    }

    /// One top and bottom pipe pair with its left edge at column `x`.
    ///
    /// The body is clipped to the screen. A one-pixel lip sits just outside
    /// each side, on the last row of the top pipe and the first row of the
    /// bottom pipe.
    pub fn draw_pipe(&mut self, x: i32, height: i32) {
        if x >= -PIPE_WIDTH && x < WIDTH {
            let min_x = x.max(0);
            let max_x = (x + PIPE_WIDTH).min(WIDTH);

            self.draw_rect(PIPE, min_x, 0, max_x, height);
            self.draw_rect(PIPE, min_x, height + PIPE_GAP, max_x, HEIGHT);
        }

        for lip_x in [x - 1, x + PIPE_WIDTH] {
            if (0..WIDTH).contains(&lip_x) {
                self.draw_pixel(PIPE, lip_x, height - 1);
                self.draw_pixel(PIPE, lip_x, height + PIPE_GAP);
            }
        }
    }

    /// Font glyph `index` (see [`assets::FONT`]).
    pub fn draw_glyph(&mut self, index: usize, x: i32, y: i32) {
        self.draw_sprite(&FONT[index], x, y, GLYPH_WIDTH, GLYPH_HEIGHT);
    }

    /// Decimal digit `d` in `0..=9`.
    pub fn draw_digit(&mut self, d: u32, x: i32, y: i32) {
        debug_assert!(d < 10);
        self.draw_glyph(assets::FIRST_DIGIT + d as usize, x, y);
    }

    /// Redraw the whole frame for `world`.
    pub fn draw_world(&mut self, world: &World) {
        self.draw_rect(SKY, 0, 0, WIDTH, HEIGHT);

        for (i, &height) in world.pipes.heights.iter().enumerate() {
            self.draw_pipe(world.pipes.column(i), height);
        }

        self.draw_sprite(&BIRD, PLAYER_X, world.player_y, BIRD_WIDTH, BIRD_HEIGHT);
        self.draw_hud(world.score);
    }

    /// Black bar reading `SCORE:nn`.
    ///
    /// Only the last two digits fit; 123 shows as `23`.
    pub fn draw_hud(&mut self, score: u32) {
        self.draw_rect(HUD_BACKGROUND, 0, 0, WIDTH, HUD_HEIGHT);

        for (n, glyph) in assets::SCORE_LABEL.enumerate() {
            self.draw_glyph(glyph, LABEL_X + n as i32 * GLYPH_ADVANCE, TEXT_Y);
        }
        self.draw_pixel(HUD_TEXT, COLON_X, TEXT_Y + 1);
        self.draw_pixel(HUD_TEXT, COLON_X, TEXT_Y + 3);

        let shown = score % 100;
        self.draw_digit(shown / 10, TENS_X, TEXT_Y);
        self.draw_digit(shown % 10, UNITS_X, TEXT_Y);
    }
}
