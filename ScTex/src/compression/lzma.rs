//! LZMA payload handling for SC textures
//!
//! SC files store an LZMA-alone stream whose uncompressed-size field is only
//! 4 bytes wide. Standard decoders expect 8, so the header is widened with
//! zero bytes before decompression.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use crate::error::{Error, Result};
use std::io::{Cursor, Read};

/// Size of the opaque container preamble preceding the LZMA stream.
pub const PREAMBLE_SIZE: usize = 26;

/// Properties byte + dictionary size + 4-byte uncompressed size.
const LZMA_PREFIX_SIZE: usize = 9;

/// Zero padding that widens the uncompressed-size field to 8 bytes.
const SIZE_PADDING: [u8; 4] = [0; 4];

/// Rebuild a standard LZMA-alone stream from an SC payload.
///
/// Copies the first 9 bytes verbatim, inserts 4 zero bytes, then appends the
/// rest of the reader unchanged.
///
/// # Errors
/// Returns [`Error::StreamCorrupt`] if fewer than 9 bytes are available, or
/// [`Error::Io`] if the reader fails.
pub fn repair_lzma_header<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let mut prefix = [0u8; LZMA_PREFIX_SIZE];
    reader.read_exact(&mut prefix).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => Error::StreamCorrupt {
            message: format!("LZMA header shorter than {LZMA_PREFIX_SIZE} bytes"),
        },
        _ => Error::Io(e),
    })?;

    let mut repaired = Vec::with_capacity(LZMA_PREFIX_SIZE + SIZE_PADDING.len());
    repaired.extend_from_slice(&prefix);
    repaired.extend_from_slice(&SIZE_PADDING);
    reader.read_to_end(&mut repaired)?;

    Ok(repaired)
}

/// Read the opaque container preamble that precedes the LZMA stream.
///
/// # Errors
/// Returns [`Error::StreamCorrupt`] if fewer than 26 bytes are available.
pub fn read_preamble<R: Read>(reader: &mut R) -> Result<[u8; PREAMBLE_SIZE]> {
    let mut preamble = [0u8; PREAMBLE_SIZE];
    reader.read_exact(&mut preamble).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => Error::StreamCorrupt {
            message: format!("container preamble shorter than {PREAMBLE_SIZE} bytes"),
        },
        _ => Error::Io(e),
    })?;
    Ok(preamble)
}

/// Repair the LZMA header of the remaining stream and decompress it fully.
///
/// # Errors
/// Returns [`Error::StreamCorrupt`] if the compressed data is truncated or invalid.
pub fn decompress_lzma<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let repaired = repair_lzma_header(reader)?;
    tracing::debug!("Repaired LZMA stream: {} bytes", repaired.len());

    let mut decompressed = Vec::new();
    lzma_rs::lzma_decompress(&mut Cursor::new(repaired), &mut decompressed)?;
    tracing::debug!("Decompressed texture payload: {} bytes", decompressed.len());

    Ok(decompressed)
}

/// Skip the container preamble, repair the LZMA header and decompress.
///
/// The reader must be positioned at the start of the file (the `SC\0\0`
/// magic). Returns the full decompressed buffer.
///
/// # Errors
/// Returns [`Error::StreamCorrupt`] if the preamble is short or the
/// compressed data is truncated or invalid.
pub fn decompress_payload<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    read_preamble(reader)?;
    decompress_lzma(reader)
}
