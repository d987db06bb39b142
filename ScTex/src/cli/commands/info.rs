//! CLI commands for texture inspection

use std::path::Path;

use crate::formats::FormatRegistry;
use crate::formats::sc_tex::read_sc_tex;

/// Show info about an SC texture file
pub fn execute(path: &Path) -> anyhow::Result<()> {
    let texture = read_sc_tex(path)?;
    let header = &texture.header;
    let layout = texture.layout();

    println!("SC Texture Information: {}", path.display());
    println!();
    if let Some(format) = FormatRegistry::with_defaults().for_path(path) {
        println!("Format: {} ({})", format.name, format.description);
    }
    println!("File type: {}", header.file_type.tag());
    println!("Declared size: {} bytes", header.file_size);
    println!(
        "Pixel format: {} ({}, {} bytes/pixel)",
        header.pixel_format.tag(),
        header.pixel_format.as_str(),
        header.pixel_format.record_size()
    );
    println!("Dimensions: {}x{}", header.width, header.height);
    println!("Pixel data: {} bytes", header.payload_size());
    println!(
        "Tiling: {}x{} full blocks, {}px right strip, {}px bottom strip ({} blocks)",
        layout.full_blocks_x,
        layout.full_blocks_y,
        layout.remainder_x,
        layout.remainder_y,
        layout.block_count()
    );

    Ok(())
}
