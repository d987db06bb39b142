//! Texture conversion
//!
//! Converts decoded SC textures to PNG, singly or in batches.

mod batch;
mod sc_tex_png;
mod types;

pub use batch::{BatchConvertResult, batch_convert, find_sc_tex_files, png_output_path};
pub use sc_tex_png::{
    convert_sc_tex_to_png, convert_sc_tex_to_png_with_options, image_to_png_bytes,
    sc_tex_bytes_to_png_bytes,
};
pub use types::{ConvertPhase, ConvertProgress};
