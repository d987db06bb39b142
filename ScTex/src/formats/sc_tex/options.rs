//! Decode options for SC textures

/// Options controlling optional consistency checks during decoding.
///
/// The defaults read textures exactly as the game does: the preamble magic
/// and the declared file size are not checked.
///
/// # Example
///
/// ```
/// use sctex::formats::sc_tex::DecodeOptions;
///
/// // Enable every check
/// let options = DecodeOptions::strict();
///
/// // Or configure individually
/// let options = DecodeOptions::new()
///     .with_check_magic(true)
///     .with_validate_file_size(false);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Require the preamble to start with `SC\0\0`.
    /// Default: false (the registry checks the magic before decoding)
    pub check_magic: bool,

    /// Check the header's declared file size against the decompressed data.
    /// Default: false
    pub validate_file_size: bool,
}

impl DecodeOptions {
    /// Create new options with all checks disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options with all checks enabled.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            check_magic: true,
            validate_file_size: true,
        }
    }

    /// Set whether the preamble magic is checked.
    #[must_use]
    pub fn with_check_magic(mut self, enabled: bool) -> Self {
        self.check_magic = enabled;
        self
    }

    /// Set whether the declared file size is validated.
    #[must_use]
    pub fn with_validate_file_size(mut self, enabled: bool) -> Self {
        self.validate_file_size = enabled;
        self
    }
}
