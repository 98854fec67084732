//! Turning a simulated pixel buffer into something a person can look at.

use std::io::{self, Write};

use cpulator::pixel_buffer::{HEIGHT, WIDTH};
use manji_bird::{assets, raster, sim::MemoryFramebuffer};

/// Expand an RGB332 byte to 8 bits per channel.
pub fn rgb332(color: u8) -> [u8; 3] {
    let scale = |level: u8, max: u16| (level as u16 * 255 / max) as u8;
    [scale(color >> 5, 7), scale((color >> 2) & 0x7, 7), scale(color & 0x3, 3)]
}

/// Binary (P6) PPM of the visible area.
pub fn write_ppm(out: &mut impl Write, fb: &MemoryFramebuffer) -> io::Result<()> {
    write!(out, "P6\n{WIDTH} {HEIGHT}\n255\n")?;
    for row in fb.rows() {
        for &color in row {
            out.write_all(&rgb332(color))?;
        }
    }
    out.flush()
}

fn glyph(color: u8) -> char {
    match color {
        raster::SKY => '.',
        raster::PIPE => '#',
        raster::HUD_TEXT => '@',
        raster::HUD_BACKGROUND => ' ',
        c if c == assets::BIRD[1] => 'o',
        c if c == assets::BIRD[13] => '>',
        _ => '?',
    }
}

/// One character per pixel, one line per row.
pub fn ascii(fb: &MemoryFramebuffer) -> String {
    let mut art = String::with_capacity(((WIDTH + 1) * HEIGHT) as usize);
    for row in fb.rows() {
        art.extend(row.iter().map(|&c| glyph(c)));
        art.push('\n');
    }
    art
}
