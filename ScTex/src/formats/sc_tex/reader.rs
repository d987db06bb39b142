//! SC texture decoding pipeline
//!
//! compressed bytes → decompressed buffer → header + linear pixels → RGBA grid

use super::header::{HEADER_SIZE, ScTexHeader};
use super::options::DecodeOptions;
use super::pixel::{DecodedPixel, decode_pixel};
use super::sink::PixelSink;
use super::tiling::tile_sequence;
use super::{SC_MAGIC, ScTexture};
use crate::compression::{decompress_lzma, read_preamble};
use crate::error::{Error, Result};
use image::RgbaImage;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

/// Bytes of the header that precede the declared-size region (tag + size field).
const SIZE_FIELD_END: usize = 5;

/// Read an SC texture from disk with default options.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read, or any decode error.
pub fn read_sc_tex<P: AsRef<Path>>(path: P) -> Result<ScTexture> {
    read_sc_tex_with_options(path, &DecodeOptions::default())
}

/// Read an SC texture from disk.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read, or any decode error.
pub fn read_sc_tex_with_options<P: AsRef<Path>>(
    path: P,
    options: &DecodeOptions,
) -> Result<ScTexture> {
    tracing::info!("Reading SC texture: {}", path.as_ref().display());
    let mut reader = BufReader::new(File::open(path.as_ref())?);
    decode_sc_tex(&mut reader, options)
}

/// Decode an SC texture held in memory with default options.
///
/// # Errors
/// Returns any decompression or format error.
pub fn decode_sc_tex_bytes(data: &[u8]) -> Result<ScTexture> {
    decode_sc_tex(&mut Cursor::new(data), &DecodeOptions::default())
}

/// Decode an SC texture from a reader positioned at the start of the file.
///
/// # Errors
/// Returns any decompression or format error.
pub fn decode_sc_tex<R: Read>(reader: &mut R, options: &DecodeOptions) -> Result<ScTexture> {
    let decompressed = decompress(reader, options)?;
    decode_decompressed(&decompressed, options)
}

/// Decode an SC texture into a caller-provided sink.
///
/// Returns the parsed header. Nothing is written to the sink unless the
/// header is valid, the sink is large enough and all pixel data is present.
///
/// # Errors
/// Returns [`Error::SinkTooSmall`] if the sink cannot hold the texture, or
/// any decompression or format error.
pub fn decode_into<R: Read, S: PixelSink>(
    reader: &mut R,
    sink: &mut S,
    options: &DecodeOptions,
) -> Result<ScTexHeader> {
    let decompressed = decompress(reader, options)?;
    let (header, pixels) = parse_decompressed(&decompressed, options)?;
    reconstruct(&pixels, u32::from(header.width), u32::from(header.height), sink)?;
    Ok(header)
}

/// Decode an already decompressed texture buffer.
///
/// # Errors
/// Returns a header error, [`Error::TruncatedPixelData`] if the payload is
/// short, or [`Error::FileSizeMismatch`] when size validation is enabled.
pub fn decode_decompressed(data: &[u8], options: &DecodeOptions) -> Result<ScTexture> {
    let (header, pixels) = parse_decompressed(data, options)?;

    let width = u32::from(header.width);
    let height = u32::from(header.height);
    let mut image = RgbaImage::new(width, height);
    reconstruct(&pixels, width, height, &mut image)?;

    Ok(ScTexture { header, image })
}

/// Read exactly `width * height` pixel records in source order.
///
/// # Errors
/// Returns [`Error::TruncatedPixelData`] if the reader holds fewer records.
pub fn read_pixels<R: Read>(reader: &mut R, header: &ScTexHeader) -> Result<Vec<DecodedPixel>> {
    let expected = header.pixel_count();
    let record_size = header.pixel_format.record_size();
    let payload_size = header.payload_size();

    // Grow with the data actually present; the header alone can claim gigabytes
    let mut payload = Vec::new();
    reader.take(payload_size as u64).read_to_end(&mut payload)?;

    if payload.len() < payload_size {
        return Err(Error::TruncatedPixelData {
            expected,
            available: payload.len() / record_size,
        });
    }

    Ok(payload
        .chunks_exact(record_size)
        .map(|record| decode_pixel(header.pixel_format, record))
        .collect())
}

/// Write pixels in storage order to their block-tiled positions.
///
/// `pixels` must hold exactly `width * height` entries.
///
/// # Errors
/// Returns [`Error::SinkTooSmall`] if the sink is smaller than the texture,
/// [`Error::TruncatedPixelData`] or [`Error::PixelCountMismatch`] if the
/// pixel count is wrong.
pub fn reconstruct<S: PixelSink>(
    pixels: &[DecodedPixel],
    width: u32,
    height: u32,
    sink: &mut S,
) -> Result<()> {
    let (sink_width, sink_height) = sink.dimensions();
    if sink_width < width || sink_height < height {
        return Err(Error::SinkTooSmall { width, height });
    }

    let coords = tile_sequence(width, height);
    let expected = coords.len();
    if pixels.len() < expected {
        return Err(Error::TruncatedPixelData {
            expected,
            available: pixels.len(),
        });
    }
    if pixels.len() > expected {
        return Err(Error::PixelCountMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    for (pixel, (x, y)) in pixels.iter().zip(coords) {
        sink.put_rgba(x, y, pixel.to_rgba());
    }

    Ok(())
}

fn decompress<R: Read>(reader: &mut R, options: &DecodeOptions) -> Result<Vec<u8>> {
    let preamble = read_preamble(reader)?;
    if options.check_magic && preamble[..4] != SC_MAGIC {
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&preamble[..4]);
        return Err(Error::InvalidMagic(magic));
    }
    decompress_lzma(reader)
}

fn parse_decompressed(
    data: &[u8],
    options: &DecodeOptions,
) -> Result<(ScTexHeader, Vec<DecodedPixel>)> {
    let mut cursor = Cursor::new(data);
    let header = ScTexHeader::read(&mut cursor)?;
    tracing::debug!(
        "SC texture header: type={} size={} format={} {}x{}",
        header.file_type.tag(),
        header.file_size,
        header.pixel_format.as_str(),
        header.width,
        header.height
    );

    if options.validate_file_size {
        validate_file_size(&header, data.len())?;
    }

    let pixels = read_pixels(&mut cursor, &header)?;
    Ok((header, pixels))
}

/// The declared size counts the bytes after the size field. It must cover
/// the rest of the header plus the pixel payload and fit in the buffer.
fn validate_file_size(header: &ScTexHeader, data_len: usize) -> Result<()> {
    let declared = header.file_size as usize;
    let actual = data_len.saturating_sub(SIZE_FIELD_END);
    let required = HEADER_SIZE - SIZE_FIELD_END + header.payload_size();

    if declared < required || declared > actual {
        return Err(Error::FileSizeMismatch {
            declared: header.file_size,
            actual,
        });
    }
    Ok(())
}
