//! SC texture header parsing

use super::pixel::PixelFormat;
use crate::error::{Error, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Read;

/// Size of the header at the start of the decompressed buffer.
pub const HEADER_SIZE: usize = 10;

/// Container file type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// Tag 27
    Texture,
    /// Tag 28
    TextureAlt,
}

impl FileType {
    /// Map a raw tag to a file type.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedFileType`] for tags other than 27 and 28.
    pub fn from_tag(tag: i8) -> Result<Self> {
        match tag {
            27 => Ok(Self::Texture),
            28 => Ok(Self::TextureAlt),
            _ => Err(Error::UnsupportedFileType { file_type: tag }),
        }
    }

    /// The raw tag value.
    #[must_use]
    pub const fn tag(self) -> i8 {
        match self {
            Self::Texture => 27,
            Self::TextureAlt => 28,
        }
    }
}

/// Parsed SC texture header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScTexHeader {
    pub file_type: FileType,
    /// Declared payload size. Not checked unless
    /// [`DecodeOptions::validate_file_size`](super::DecodeOptions::validate_file_size) is set.
    pub file_size: u32,
    pub pixel_format: PixelFormat,
    pub width: u16,
    pub height: u16,
}

impl ScTexHeader {
    /// Read the header, leaving the reader positioned at the first pixel record.
    ///
    /// All fields are read before validation; the file type is checked
    /// before the pixel format.
    ///
    /// # Errors
    /// Returns [`Error::TruncatedHeader`] if the reader ends early,
    /// [`Error::UnsupportedFileType`] or [`Error::UnknownPixelFormat`] for
    /// unrecognized tags.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let file_type = reader.read_i8().map_err(truncated)?;
        let file_size = reader.read_u32::<LittleEndian>().map_err(truncated)?;
        let pixel_format = reader.read_i8().map_err(truncated)?;
        let width = reader.read_u16::<LittleEndian>().map_err(truncated)?;
        let height = reader.read_u16::<LittleEndian>().map_err(truncated)?;

        Ok(Self {
            file_type: FileType::from_tag(file_type)?,
            file_size,
            pixel_format: PixelFormat::from_tag(pixel_format)?,
            width,
            height,
        })
    }

    /// Number of pixels in the texture.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Size in bytes of the pixel payload following the header.
    #[must_use]
    pub fn payload_size(&self) -> usize {
        self.pixel_count() * self.pixel_format.record_size()
    }
}

fn truncated(err: std::io::Error) -> Error {
    if err.kind() == std::io::ErrorKind::UnexpectedEof {
        Error::TruncatedHeader
    } else {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn header_bytes(file_type: i8, pixel_format: i8, width: u16, height: u16) -> Vec<u8> {
        let mut data = vec![file_type as u8];
        data.extend_from_slice(&1234u32.to_le_bytes());
        data.push(pixel_format as u8);
        data.extend_from_slice(&width.to_le_bytes());
        data.extend_from_slice(&height.to_le_bytes());
        data
    }

    #[test]
    fn test_read_header() {
        let mut data = header_bytes(28, 4, 300, 17);
        data.push(0xAB);
        let mut cursor = Cursor::new(data);

        let header = ScTexHeader::read(&mut cursor).unwrap();
        assert_eq!(header.file_type, FileType::TextureAlt);
        assert_eq!(header.file_size, 1234);
        assert_eq!(header.pixel_format, PixelFormat::Rgb565);
        assert_eq!((header.width, header.height), (300, 17));
        assert_eq!(header.payload_size(), 300 * 17 * 2);
        assert_eq!(cursor.position(), HEADER_SIZE as u64);
    }

    #[test]
    fn test_unsupported_file_type() {
        let data = header_bytes(99, 0, 1, 1);
        let err = ScTexHeader::read(&mut Cursor::new(data)).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFileType { file_type: 99 }));
    }

    #[test]
    fn test_negative_file_type() {
        let data = header_bytes(-1, 0, 1, 1);
        let err = ScTexHeader::read(&mut Cursor::new(data)).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFileType { file_type: -1 }));
    }

    #[test]
    fn test_unknown_pixel_format() {
        let data = header_bytes(27, 3, 1, 1);
        let err = ScTexHeader::read(&mut Cursor::new(data)).unwrap_err();
        assert!(matches!(err, Error::UnknownPixelFormat { pixel_format: 3 }));
    }

    #[test]
    fn test_file_type_checked_first() {
        let data = header_bytes(1, 3, 1, 1);
        let err = ScTexHeader::read(&mut Cursor::new(data)).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFileType { file_type: 1 }));
    }

    #[test]
    fn test_truncated_header() {
        let data = header_bytes(27, 0, 1, 1);
        let err = ScTexHeader::read(&mut Cursor::new(&data[..7])).unwrap_err();
        assert!(matches!(err, Error::TruncatedHeader));
    }
}
