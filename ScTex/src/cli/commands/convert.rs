//! CLI interface for SC → PNG conversion
use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{DISK, PICTURE, print_done, print_step};
use crate::converter::image_to_png_bytes;
use crate::formats::FormatRegistry;
use crate::formats::sc_tex::{DecodeOptions, read_sc_tex_with_options};

pub fn execute(source: &Path, destination: &Path, strict: bool) -> anyhow::Result<()> {
    let start = Instant::now();

    let registry = FormatRegistry::with_defaults();
    if registry.for_path(source).is_none() {
        tracing::warn!(
            "{} does not have a _tex.sc suffix, decoding anyway",
            source.display()
        );
    }

    let output = destination
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase);
    if output.as_deref() != Some("png") {
        anyhow::bail!(
            "Unsupported output format for {}: only PNG is supported",
            destination.display()
        );
    }

    let options = if strict {
        DecodeOptions::strict()
    } else {
        DecodeOptions::default()
    };

    print_step(1, 2, PICTURE, &format!("Decoding {}", source.display()));
    let texture = read_sc_tex_with_options(source, &options)?;
    println!(
        "  {}x{} {}",
        texture.width(),
        texture.height(),
        texture.header.pixel_format.as_str()
    );

    print_step(2, 2, DISK, &format!("Writing {}", destination.display()));
    let png = image_to_png_bytes(&texture.image)?;
    std::fs::write(destination, png)?;

    print_done(start.elapsed());
    Ok(())
}
