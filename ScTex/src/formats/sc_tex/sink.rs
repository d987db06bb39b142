//! Output targets for decoded pixels

use image::{Rgba, RgbaImage};

/// A 2D RGBA pixel grid the decoder writes into.
///
/// The decoder holds the sink exclusively for the duration of a decode and
/// writes every coordinate of the texture exactly once.
pub trait PixelSink {
    /// Width and height of the grid.
    fn dimensions(&self) -> (u32, u32);

    /// Store one pixel. `x` and `y` are always within [`PixelSink::dimensions`].
    fn put_rgba(&mut self, x: u32, y: u32, rgba: [u8; 4]);
}

impl PixelSink for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn put_rgba(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        self.put_pixel(x, y, Rgba(rgba));
    }
}
