//! Compression utilities

pub mod lzma;

pub use lzma::{
    PREAMBLE_SIZE, decompress_lzma, decompress_payload, read_preamble, repair_lzma_header,
};
