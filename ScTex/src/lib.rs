//! # ScTex
//!
//! A pure-Rust decoder for SuperCell texture files (`_tex.sc`).
//!
//! ## Pipeline
//!
//! - **Header repair** - the LZMA stream's 4-byte size field is widened so a
//!   standard LZMA-alone decoder accepts it
//! - **Header parsing** - file type, declared size, pixel format, dimensions
//! - **Pixel decoding** - RGBA8888, RGBA4444, RGB565, LA88 and L8 records
//! - **Untiling** - pixels are stored in 32×32 blocks and moved back to
//!   their (x, y) positions
//!
//! ## Quick Start
//!
//! ```no_run
//! use sctex::formats::sc_tex::read_sc_tex;
//!
//! let texture = read_sc_tex("ui_tex.sc")?;
//! println!("{}x{}", texture.width(), texture.height());
//! # Ok::<(), sctex::Error>(())
//! ```
//!
//! ### Converting to PNG
//!
//! ```no_run
//! use sctex::converter::convert_sc_tex_to_png;
//!
//! convert_sc_tex_to_png("ui_tex.sc", "ui_tex.png")?;
//! # Ok::<(), sctex::Error>(())
//! ```
//!
//! ### Using the Prelude
//!
//! ```
//! use sctex::prelude::*;
//!
//! let registry = FormatRegistry::with_defaults();
//! assert!(registry.detect(b"SC\0\0").is_some());
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `sctex` command-line binary

pub mod error;
pub mod compression;
pub mod converter;
pub mod formats;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::registry::{FormatRegistry, TextureFormat};
    pub use crate::formats::sc_tex::{
        DecodeOptions, DecodedPixel, FileType, PixelFormat, PixelSink, ScTexHeader, ScTexture,
        decode_sc_tex, decode_sc_tex_bytes, read_sc_tex, tile_sequence,
    };

    pub use crate::converter::{
        BatchConvertResult, batch_convert, convert_sc_tex_to_png, find_sc_tex_files,
        sc_tex_bytes_to_png_bytes,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
