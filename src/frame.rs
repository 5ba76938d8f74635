//! In-memory 1-bit frame and the screen collaborator that shows it.
//!
//! All drawing happens on a [`Frame`] with `embedded-graphics`, which cannot
//! fail. Only [`Screen::present`], the commit to real hardware, can.

use core::convert::Infallible;

use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::*,
};

use crate::config::{
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
};

pub const WIDTH: usize = SCREEN_WIDTH as usize;
pub const HEIGHT: usize = SCREEN_HEIGHT as usize;
const BYTES: usize = WIDTH * HEIGHT / 8;

/// 128×64 monochrome frame, one bit per pixel, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    bits: [u8; BYTES],
}

impl Frame {
    #[must_use]
    pub const fn new() -> Self {
        Self { bits: [0; BYTES] }
    }

    /// Whether the pixel at (`x`, `y`) is lit. Off-screen reads are dark.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        Self::locate(x, y).is_some_and(|(byte, mask)| self.bits[byte] & mask != 0)
    }

    /// Number of lit pixels.
    #[must_use]
    pub fn lit(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Iterate `(x, y, on)` for every pixel in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32, bool)> + '_ {
        (0..HEIGHT as i32).flat_map(move |y| (0..WIDTH as i32).map(move |x| (x, y, self.pixel(x, y))))
    }

    fn locate(x: i32, y: i32) -> Option<(usize, u8)> {
        let x = usize::try_from(x).ok().filter(|&x| x < WIDTH)?;
        let y = usize::try_from(y).ok().filter(|&y| y < HEIGHT)?;
        let index = y * WIDTH + x;
        Some((index / 8, 1 << (index % 8)))
    }

    fn set(&mut self, point: Point, on: bool) {
        if let Some((byte, mask)) = Self::locate(point.x, point.y) {
            if on {
                self.bits[byte] |= mask;
            } else {
                self.bits[byte] &= !mask;
            }
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Frame {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Frame").field("lit", &self.lit()).finish()
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(u32::from(SCREEN_WIDTH), u32::from(SCREEN_HEIGHT))
    }
}

impl DrawTarget for Frame {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set(point, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.bits.fill(if color.is_on() { 0xff } else { 0 });
        Ok(())
    }
}

/// The physical display: commits a finished frame.
pub trait Screen {
    type Error;

    fn present(&mut self, frame: &Frame) -> Result<(), Self::Error>;
}
