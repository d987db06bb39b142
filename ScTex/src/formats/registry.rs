//! Texture format registry
//!
//! Maps format identifiers to decoder functions, with lookup by magic bytes
//! or file name suffix. Populated once by the caller and consulted before
//! decoding.

use super::sc_tex::{SC_MAGIC, SC_TEX_SUFFIX, ScTexture, decode_sc_tex_bytes};
use crate::error::{Error, Result};
use image::RgbaImage;
use std::path::Path;

/// Decoder entry point: whole file bytes in, RGBA image out.
pub type DecodeFn = fn(&[u8]) -> Result<RgbaImage>;

/// A registered texture format
#[derive(Debug, Clone, Copy)]
pub struct TextureFormat {
    /// Short identifier, e.g. `SCTEX`
    pub name: &'static str,
    pub description: &'static str,
    /// Leading bytes identifying the format
    pub magic: &'static [u8],
    /// File name suffix, matched case-insensitively
    pub suffix: &'static str,
    pub decode: DecodeFn,
}

impl TextureFormat {
    /// Whether `prefix` starts with this format's magic.
    #[must_use]
    pub fn matches_magic(&self, prefix: &[u8]) -> bool {
        prefix.starts_with(self.magic)
    }

    /// Whether the file name of `path` ends with this format's suffix.
    #[must_use]
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.to_ascii_lowercase().ends_with(self.suffix))
    }
}

/// The SuperCell texture format
pub const SC_TEXTURE: TextureFormat = TextureFormat {
    name: "SCTEX",
    description: "SuperCell Texture",
    magic: &SC_MAGIC,
    suffix: SC_TEX_SUFFIX,
    decode: decode_sc_image,
};

fn decode_sc_image(data: &[u8]) -> Result<RgbaImage> {
    decode_sc_tex_bytes(data).map(ScTexture::into_image)
}

/// Registry of known texture formats
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    formats: Vec<TextureFormat>,
}

impl FormatRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in format.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(SC_TEXTURE);
        registry
    }

    /// Add a format, replacing any format with the same name.
    pub fn register(&mut self, format: TextureFormat) {
        if let Some(existing) = self.formats.iter_mut().find(|f| f.name == format.name) {
            *existing = format;
        } else {
            self.formats.push(format);
        }
    }

    /// Look up a format by name (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TextureFormat> {
        self.formats.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Find the format whose magic matches the start of `prefix`.
    #[must_use]
    pub fn detect(&self, prefix: &[u8]) -> Option<&TextureFormat> {
        self.formats.iter().find(|f| f.matches_magic(prefix))
    }

    /// Find the format for a file name.
    #[must_use]
    pub fn for_path(&self, path: &Path) -> Option<&TextureFormat> {
        self.formats.iter().find(|f| f.matches_path(path))
    }

    /// Detect the format of `data` by magic and decode it.
    ///
    /// # Errors
    /// Returns [`Error::UnrecognizedFormat`] if no format matches, or the
    /// decoder's error.
    pub fn decode(&self, data: &[u8]) -> Result<RgbaImage> {
        let format = self.detect(data).ok_or(Error::UnrecognizedFormat)?;
        tracing::debug!("Detected format {} ({})", format.name, format.description);
        (format.decode)(data)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}
