//! SC texture → PNG conversion
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use crate::error::{Error, Result};
use crate::formats::sc_tex::{DecodeOptions, decode_sc_tex};
use image::RgbaImage;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Convert an SC texture file to PNG
///
/// # Errors
/// Returns an error if the file cannot be read, decoded or written.
pub fn convert_sc_tex_to_png<P: AsRef<Path>, Q: AsRef<Path>>(sc_path: P, png_path: Q) -> Result<()> {
    convert_sc_tex_to_png_with_options(sc_path, png_path, &DecodeOptions::default())
}

/// Convert an SC texture file to PNG with explicit decode options
///
/// # Errors
/// Returns an error if the file cannot be read, decoded or written.
pub fn convert_sc_tex_to_png_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    sc_path: P,
    png_path: Q,
    options: &DecodeOptions,
) -> Result<()> {
    tracing::info!(
        "Converting SC→PNG: {:?} → {:?}",
        sc_path.as_ref(),
        png_path.as_ref()
    );

    let mut reader = BufReader::new(File::open(sc_path.as_ref())?);
    let texture = decode_sc_tex(&mut reader, options)?;
    let png_data = image_to_png_bytes(&texture.image)?;

    let mut output = BufWriter::new(File::create(png_path.as_ref())?);
    output.write_all(&png_data)?;
    output.flush()?;

    tracing::info!("Conversion complete");
    Ok(())
}

/// Convert SC texture bytes to PNG bytes
///
/// # Errors
/// Returns an error if the texture cannot be decoded or encoded.
pub fn sc_tex_bytes_to_png_bytes(sc_data: &[u8]) -> Result<Vec<u8>> {
    let texture = decode_sc_tex(&mut Cursor::new(sc_data), &DecodeOptions::default())?;
    image_to_png_bytes(&texture.image)
}

/// Encode an RGBA image as PNG
///
/// # Errors
/// Returns [`Error::EmptyImage`] for an image with a zero dimension, or
/// [`Error::PngEncodeFailed`].
pub fn image_to_png_bytes(img: &RgbaImage) -> Result<Vec<u8>> {
    if img.width() == 0 || img.height() == 0 {
        return Err(Error::EmptyImage {
            width: img.width(),
            height: img.height(),
        });
    }

    let mut png_data = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_data);
    img.write_with_encoder(encoder)
        .map_err(|e| Error::PngEncodeFailed {
            message: e.to_string(),
        })?;

    Ok(png_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_png_round_trip() {
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(2, 1, Rgba([10, 20, 30, 40]));

        let png = image_to_png_bytes(&img).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_png_rejects_empty_image() {
        let img = RgbaImage::new(0, 4);
        let err = image_to_png_bytes(&img).unwrap_err();
        assert!(matches!(err, Error::EmptyImage { width: 0, height: 4 }));
        assert_eq!(err.to_string(), "cannot encode empty 0x4 image as PNG");
    }
}
