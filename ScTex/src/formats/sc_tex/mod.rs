//! SuperCell texture (`_tex.sc`) decoding
//!
//! An SC texture is a 26-byte container preamble followed by an LZMA stream
//! with a truncated header. The decompressed data holds a small header and
//! one fixed-width record per pixel, stored in 32×32 block order.
//!
//! ```no_run
//! use sctex::formats::sc_tex::read_sc_tex;
//!
//! let texture = read_sc_tex("ui_tex.sc")?;
//! println!("{}x{} {}", texture.width(), texture.height(), texture.header.pixel_format.as_str());
//! # Ok::<(), sctex::Error>(())
//! ```

mod header;
mod options;
mod pixel;
mod reader;
mod sink;
pub mod tiling;

pub use header::{FileType, HEADER_SIZE, ScTexHeader};
pub use options::DecodeOptions;
pub use pixel::{DecodedPixel, PixelFormat, decode_pixel};
pub use reader::{
    decode_decompressed, decode_into, decode_sc_tex, decode_sc_tex_bytes, read_pixels,
    read_sc_tex, read_sc_tex_with_options, reconstruct,
};
pub use sink::PixelSink;
pub use tiling::{BLOCK_SIZE, TileLayout, TileSequence, tile_sequence};

use image::RgbaImage;

/// Magic bytes at the start of every SC file
pub const SC_MAGIC: [u8; 4] = *b"SC\0\0";

/// File name suffix used for SC textures
pub const SC_TEX_SUFFIX: &str = "_tex.sc";

/// A decoded SC texture
#[derive(Debug, Clone)]
pub struct ScTexture {
    pub header: ScTexHeader,
    pub image: RgbaImage,
}

impl ScTexture {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Block layout the pixels were stored in.
    #[must_use]
    pub fn layout(&self) -> TileLayout {
        TileLayout::new(self.width(), self.height())
    }

    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
