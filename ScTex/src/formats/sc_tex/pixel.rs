//! Pixel record decoding
//!
//! Each SC pixel format stores one fixed-width record per pixel. Decoding is
//! pure bit unpacking: channels are shifted into the high bits of a byte and
//! the low bits are left at zero (a 4-bit `0xF` becomes `0xF0`, not `0xFF`).
//! Missing channels are filled in by [`DecodedPixel::to_rgba`] when writing
//! to an RGBA sink.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use crate::error::{Error, Result};

/// SC texture pixel formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 8 bits per channel RGBA
    Rgba8888,
    /// 4 bits per channel RGBA, packed in a little-endian u16
    Rgba4444,
    /// 5-6-5 RGB, packed in a little-endian u16
    Rgb565,
    /// 8-bit luminance + 8-bit alpha
    LuminanceAlpha,
    /// 8-bit luminance
    Luminance,
}

impl PixelFormat {
    /// Map a raw header tag to a pixel format.
    ///
    /// # Errors
    /// Returns [`Error::UnknownPixelFormat`] for tags outside 0, 2, 4, 6, 10.
    pub fn from_tag(tag: i8) -> Result<Self> {
        match tag {
            0 => Ok(Self::Rgba8888),
            2 => Ok(Self::Rgba4444),
            4 => Ok(Self::Rgb565),
            6 => Ok(Self::LuminanceAlpha),
            10 => Ok(Self::Luminance),
            _ => Err(Error::UnknownPixelFormat { pixel_format: tag }),
        }
    }

    /// The raw tag value.
    #[must_use]
    pub const fn tag(self) -> i8 {
        match self {
            Self::Rgba8888 => 0,
            Self::Rgba4444 => 2,
            Self::Rgb565 => 4,
            Self::LuminanceAlpha => 6,
            Self::Luminance => 10,
        }
    }

    /// Record width in bytes
    #[must_use]
    pub const fn record_size(self) -> usize {
        match self {
            Self::Rgba8888 => 4,
            Self::Rgba4444 | Self::Rgb565 | Self::LuminanceAlpha => 2,
            Self::Luminance => 1,
        }
    }

    /// Short mode name, e.g. `RGB;16`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rgba8888 => "RGBA",
            Self::Rgba4444 => "RGBA;4B",
            Self::Rgb565 => "RGB;16",
            Self::LuminanceAlpha => "LA",
            Self::Luminance => "L",
        }
    }
}

/// A decoded pixel, holding only the channels its format stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodedPixel {
    Rgba(u8, u8, u8, u8),
    Rgb(u8, u8, u8),
    La(u8, u8),
}

impl DecodedPixel {
    /// Expand to RGBA for an RGBA sink.
    ///
    /// RGB gets opaque alpha; luminance is replicated into R, G and B.
    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        match self {
            Self::Rgba(r, g, b, a) => [r, g, b, a],
            Self::Rgb(r, g, b) => [r, g, b, 0xFF],
            Self::La(l, a) => [l, l, l, a],
        }
    }
}

/// Decode one pixel record.
///
/// `record` must be exactly [`PixelFormat::record_size`] bytes long.
#[must_use]
pub fn decode_pixel(format: PixelFormat, record: &[u8]) -> DecodedPixel {
    debug_assert_eq!(record.len(), format.record_size());

    match format {
        PixelFormat::Rgba8888 => DecodedPixel::Rgba(record[0], record[1], record[2], record[3]),
        PixelFormat::Rgba4444 => {
            let v = u16::from_le_bytes([record[0], record[1]]);
            DecodedPixel::Rgba(
                (((v >> 12) & 0xF) << 4) as u8,
                (((v >> 8) & 0xF) << 4) as u8,
                (((v >> 4) & 0xF) << 4) as u8,
                ((v & 0xF) << 4) as u8,
            )
        }
        PixelFormat::Rgb565 => {
            let v = u16::from_le_bytes([record[0], record[1]]);
            DecodedPixel::Rgb(
                (((v >> 11) & 0x1F) << 3) as u8,
                (((v >> 5) & 0x3F) << 2) as u8,
                ((v & 0x1F) << 3) as u8,
            )
        }
        PixelFormat::LuminanceAlpha => {
            let v = u16::from_le_bytes([record[0], record[1]]);
            DecodedPixel::La((v >> 8) as u8, (v & 0xFF) as u8)
        }
        PixelFormat::Luminance => DecodedPixel::Rgb(record[0], record[0], record[0]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for tag in [0, 2, 4, 6, 10] {
            assert_eq!(PixelFormat::from_tag(tag).unwrap().tag(), tag);
        }
        for tag in [1, 3, 5, 7, 8, 9, 11, -1] {
            assert!(matches!(
                PixelFormat::from_tag(tag),
                Err(Error::UnknownPixelFormat { pixel_format }) if pixel_format == tag
            ));
        }
    }

    #[test]
    fn test_rgba8888_identity() {
        for record in [[0u8, 0, 0, 0], [1, 2, 3, 4], [0xFF, 0x80, 0x7F, 0x00]] {
            let pixel = decode_pixel(PixelFormat::Rgba8888, &record);
            assert_eq!(pixel.to_rgba(), record);
        }
    }

    #[test]
    fn test_rgba4444_shift_without_replication() {
        // 0xF0A5 little-endian: r=0xF g=0x0 b=0xA a=0x5
        let pixel = decode_pixel(PixelFormat::Rgba4444, &[0xA5, 0xF0]);
        assert_eq!(pixel, DecodedPixel::Rgba(0xF0, 0x00, 0xA0, 0x50));

        let white = decode_pixel(PixelFormat::Rgba4444, &[0xFF, 0xFF]);
        assert_eq!(white, DecodedPixel::Rgba(0xF0, 0xF0, 0xF0, 0xF0));
    }

    #[test]
    fn test_rgb565_shift_without_replication() {
        let white = decode_pixel(PixelFormat::Rgb565, &[0xFF, 0xFF]);
        assert_eq!(white, DecodedPixel::Rgb(0xF8, 0xFC, 0xF8));

        assert_eq!(
            decode_pixel(PixelFormat::Rgb565, &0xF800u16.to_le_bytes()),
            DecodedPixel::Rgb(0xF8, 0, 0)
        );
        assert_eq!(
            decode_pixel(PixelFormat::Rgb565, &0x07E0u16.to_le_bytes()),
            DecodedPixel::Rgb(0, 0xFC, 0)
        );
        assert_eq!(
            decode_pixel(PixelFormat::Rgb565, &0x001Fu16.to_le_bytes()),
            DecodedPixel::Rgb(0, 0, 0xF8)
        );
        assert_eq!(white.to_rgba(), [0xF8, 0xFC, 0xF8, 0xFF]);
    }

    #[test]
    fn test_luminance_alpha() {
        // High byte is luminance, low byte alpha
        let pixel = decode_pixel(PixelFormat::LuminanceAlpha, &[0x20, 0x90]);
        assert_eq!(pixel, DecodedPixel::La(0x90, 0x20));
        assert_eq!(pixel.to_rgba(), [0x90, 0x90, 0x90, 0x20]);
    }

    #[test]
    fn test_luminance() {
        let pixel = decode_pixel(PixelFormat::Luminance, &[0x40]);
        assert_eq!(pixel, DecodedPixel::Rgb(0x40, 0x40, 0x40));
        assert_eq!(pixel.to_rgba(), [0x40, 0x40, 0x40, 0xFF]);
    }

    #[test]
    fn test_record_sizes() {
        assert_eq!(PixelFormat::Rgba8888.record_size(), 4);
        assert_eq!(PixelFormat::Rgba4444.record_size(), 2);
        assert_eq!(PixelFormat::Rgb565.record_size(), 2);
        assert_eq!(PixelFormat::LuminanceAlpha.record_size(), 2);
        assert_eq!(PixelFormat::Luminance.record_size(), 1);
    }
}
