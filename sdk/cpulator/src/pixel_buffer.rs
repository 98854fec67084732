//! # VGA Pixel Buffer
//!
//! The pixel buffer is an 80×60 image of 8-bit colors living at `0x08000000`.
//! The display scans it out continuously, so a store is visible on the next
//! refresh without any flip or commit.
//!
//! ## Layout
//!
//! Rows are **128 bytes apart**, not 80. The byte for `(x, y)` sits at
//! `(y << 7) | x`; the 48 bytes past column 79 on each row are never shown.
//!
//! ```text
//!  offset 0       79   127
//!         ┌────────┬────┐
//!  y = 0  │visible │pad │
//!  y = 1  │visible │pad │   row stride = 128
//!   ...   │        │    │
//!  y = 59 │visible │pad │
//!         └────────┴────┘
//! ```
//!
//! Colors are RGB332: `0bRRR_GGG_BB`.

/// Physical base of the pixel buffer.
pub const BASE: usize = 0x0800_0000;

pub const WIDTH: i32 = 80;
pub const HEIGHT: i32 = 60;
/// Distance in bytes between the starts of two rows.
pub const STRIDE: usize = 128;
/// Bytes spanned by the buffer, padding included.
pub const SIZE: usize = STRIDE * HEIGHT as usize;

/// Byte offset of pixel `(x, y)`.
///
/// No clipping happens here; `x` and `y` must already be on screen.
#[inline(always)]
pub const fn offset(x: i32, y: i32) -> usize {
    ((y << 7) | x) as usize
}

/// Inverse of [`offset`], for checking where a store landed.
#[inline]
pub const fn coords(offset: usize) -> (i32, i32) {
    ((offset % STRIDE) as i32, (offset / STRIDE) as i32)
}

/// Anything a frame can be rasterized into.
pub trait Framebuffer {
    /// Store one color byte at `offset` (see [`offset`]).
    fn write(&mut self, offset: usize, color: u8);
}

/// The memory-mapped pixel buffer.
pub struct PixelBuffer {
    base: *mut u8,
}

impl PixelBuffer {
    /// # Safety
    ///
    /// The pixel buffer must be mapped at [`BASE`].
    pub const unsafe fn new() -> Self {
        unsafe { Self::from_ptr(BASE as *mut u8) }
    }

    /// # Safety
    ///
    /// `base` must be valid for writes of [`SIZE`] bytes for as long as the
    /// returned value is used.
    pub const unsafe fn from_ptr(base: *mut u8) -> Self {
        Self { base }
    }
}

impl Framebuffer for PixelBuffer {
    #[inline(always)]
    fn write(&mut self, offset: usize, color: u8) {
        debug_assert!(offset < SIZE, "pixel offset {offset:#x} out of range");
        unsafe { core::ptr::write_volatile(self.base.add(offset), color) }
    }
}
