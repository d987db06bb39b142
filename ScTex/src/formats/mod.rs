//! Texture file format handlers

pub mod registry;
pub mod sc_tex;

// Re-export main texture types
pub use registry::{FormatRegistry, TextureFormat};
pub use sc_tex::{PixelFormat, ScTexHeader, ScTexture, read_sc_tex};
