//! Error types for `ScTex`

use thiserror::Error;

/// The error type for `ScTex` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Compression Errors ====================
    /// The LZMA payload is truncated or invalid.
    #[error("compressed stream is corrupt: {message}")]
    StreamCorrupt {
        /// The error message from the decompressor.
        message: String,
    },

    // ==================== Texture Header Errors ====================
    /// The decompressed buffer ends before the texture header is complete.
    #[error("texture header is truncated")]
    TruncatedHeader,

    /// The container file type is not one of the recognized values.
    #[error("unsupported file type {file_type}")]
    UnsupportedFileType {
        /// The file type tag found in the header.
        file_type: i8,
    },

    /// The pixel format tag is not one of the five known encodings.
    #[error("unknown pixel format {pixel_format}")]
    UnknownPixelFormat {
        /// The pixel format tag found in the header.
        pixel_format: i8,
    },

    /// The declared payload size disagrees with the decompressed length.
    ///
    /// Only raised when [`DecodeOptions::validate_file_size`] is enabled.
    ///
    /// [`DecodeOptions::validate_file_size`]: crate::formats::sc_tex::DecodeOptions::validate_file_size
    #[error("declared file size {declared} does not match decompressed size {actual}")]
    FileSizeMismatch {
        /// The size stored in the header.
        declared: u32,
        /// The number of decompressed bytes.
        actual: usize,
    },

    // ==================== Pixel Data Errors ====================
    /// Fewer pixel records are present than `width * height` requires.
    #[error("pixel data truncated: expected {expected} pixels, found {available}")]
    TruncatedPixelData {
        /// Number of pixels the header requires.
        expected: usize,
        /// Number of complete pixel records available.
        available: usize,
    },

    /// More decoded pixels were supplied than the texture has coordinates.
    #[error("pixel count mismatch: expected {expected} pixels, got {actual}")]
    PixelCountMismatch {
        /// Number of pixels the dimensions require.
        expected: usize,
        /// Number of pixels supplied.
        actual: usize,
    },

    /// The output sink cannot hold the decoded texture.
    #[error("pixel sink too small for {width}x{height} texture")]
    SinkTooSmall {
        /// Texture width.
        width: u32,
        /// Texture height.
        height: u32,
    },

    // ==================== Format Detection Errors ====================
    /// The data does not start with the `SC\0\0` magic.
    #[error("invalid SC magic: expected SC\\0\\0, found {0:?}")]
    InvalidMagic([u8; 4]),

    /// No registered format matches the data or file name.
    #[error("unrecognized texture format")]
    UnrecognizedFormat,

    // ==================== Image Output Errors ====================
    /// PNG cannot represent an image with a zero dimension.
    #[error("cannot encode empty {width}x{height} image as PNG")]
    EmptyImage {
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
    },

    /// Failed to encode PNG image.
    #[error("failed to encode PNG: {message}")]
    PngEncodeFailed {
        /// The encoding error message.
        message: String,
    },

    // ==================== File System Errors ====================
    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

impl From<lzma_rs::error::Error> for Error {
    fn from(err: lzma_rs::error::Error) -> Self {
        Error::StreamCorrupt {
            message: err.to_string(),
        }
    }
}

// Add conversion from walkdir::Error
impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `ScTex` operations.
pub type Result<T> = std::result::Result<T, Error>;
