//! Batch SC texture conversion
//!
//! Finds `_tex.sc` files under a directory and converts each to PNG,
//! mirroring the source directory structure. Files are processed one at a
//! time and a failure does not stop the batch.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::sc_tex_png::image_to_png_bytes;
use super::types::{ConvertPhase, ConvertProgress};
use crate::error::Result;
use crate::formats::sc_tex::{SC_TEX_SUFFIX, read_sc_tex};

/// Result of a batch conversion
#[derive(Debug, Clone, Default)]
pub struct BatchConvertResult {
    /// Number of successful conversions
    pub success_count: usize,
    /// Number of failed conversions
    pub fail_count: usize,
    /// Messages for each file processed
    pub results: Vec<String>,
}

/// Find all `_tex.sc` files in a directory recursively
///
/// # Returns
/// A sorted list of paths to SC texture files found in the directory tree.
///
/// # Errors
/// Returns [`Error::WalkDirError`](crate::Error::WalkDirError) if the
/// directory cannot be traversed.
pub fn find_sc_tex_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_file() && is_sc_tex_name(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

fn is_sc_tex_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.to_ascii_lowercase().ends_with(SC_TEX_SUFFIX))
}

/// Destination PNG path for a source texture: `a/b/ui_tex.sc` → `dest/a/b/ui_tex.png`
#[must_use]
pub fn png_output_path(file: &Path, source_base: &Path, dest_base: &Path) -> PathBuf {
    let relative = file.strip_prefix(source_base).unwrap_or(file);
    dest_base.join(relative).with_extension("png")
}

/// Convert SC texture files to PNG
///
/// # Arguments
/// * `files` - SC texture files to convert
/// * `source_base` - Base directory of the source (for calculating relative paths)
/// * `dest_base` - Destination directory for PNG files
/// * `progress` - Callback for progress updates
///
/// # Returns
/// Summary of the batch conversion.
pub fn batch_convert<F>(
    files: &[PathBuf],
    source_base: &Path,
    dest_base: &Path,
    progress: F,
) -> BatchConvertResult
where
    F: Fn(&ConvertProgress),
{
    let total = files.len();
    let mut result = BatchConvertResult::default();

    for (index, file) in files.iter().enumerate() {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        progress(&ConvertProgress::with_file(
            ConvertPhase::Decoding,
            index + 1,
            total,
            name.clone(),
        ));

        let output = png_output_path(file, source_base, dest_base);
        let outcome = read_sc_tex(file).and_then(|texture| {
            progress(&ConvertProgress::with_file(
                ConvertPhase::WritingFile,
                index + 1,
                total,
                name.clone(),
            ));
            write_png(&texture.image, &output)
        });

        match outcome {
            Ok(()) => {
                result.success_count += 1;
                result.results.push(format!("Converted {name}"));
            }
            Err(e) => {
                tracing::warn!("Failed to convert {}: {}", file.display(), e);
                result.fail_count += 1;
                result.results.push(format!("Failed {name}: {e}"));
            }
        }
    }

    progress(&ConvertProgress::new(ConvertPhase::Complete, total, total));
    result
}

fn write_png(image: &image::RgbaImage, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, image_to_png_bytes(image)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_output_path() {
        let out = png_output_path(
            Path::new("/src/sc/ui_tex.sc"),
            Path::new("/src"),
            Path::new("/out"),
        );
        assert_eq!(out, PathBuf::from("/out/sc/ui_tex.png"));
    }

    #[test]
    fn test_find_sc_tex_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sc")).unwrap();
        std::fs::write(dir.path().join("sc/b_tex.sc"), b"").unwrap();
        std::fs::write(dir.path().join("a_TEX.SC"), b"").unwrap();
        std::fs::write(dir.path().join("ui.sc"), b"").unwrap();

        let files = find_sc_tex_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a_TEX.SC"), dir.path().join("sc/b_tex.sc")]
        );
    }

    #[test]
    fn test_batch_continues_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad_tex.sc");
        std::fs::write(&bad, b"SC\0\0").unwrap();

        let out = dir.path().join("out");
        let calls = std::cell::Cell::new(0);
        let result = batch_convert(&[bad.clone(), bad], dir.path(), &out, |_| {
            calls.set(calls.get() + 1);
        });

        assert_eq!(result.success_count, 0);
        assert_eq!(result.fail_count, 2);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_batch_reports_phases() {
        // 1x1 luminance texture: header + one record, LZMA-compressed
        let body = [27u8, 6, 0, 0, 0, 10, 1, 0, 1, 0, 0x7F];
        let mut lzma = Vec::new();
        let options = lzma_rs::compress::Options {
            unpacked_size: lzma_rs::compress::UnpackedSize::WriteToHeader(Some(body.len() as u64)),
        };
        lzma_rs::lzma_compress_with_options(&mut std::io::Cursor::new(&body[..]), &mut lzma, &options)
            .unwrap();
        let mut file = b"SC\0\0".to_vec();
        file.resize(26, 0);
        file.extend_from_slice(&lzma[..9]);
        file.extend_from_slice(&lzma[13..]);

        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("ok_tex.sc");
        std::fs::write(&source, file).unwrap();

        let out = dir.path().join("out");
        let phases = std::cell::RefCell::new(Vec::new());
        let result = batch_convert(&[source], dir.path(), &out, |p| {
            phases.borrow_mut().push(p.phase);
        });

        assert_eq!(result.success_count, 1);
        assert_eq!(
            phases.into_inner(),
            vec![
                ConvertPhase::Decoding,
                ConvertPhase::WritingFile,
                ConvertPhase::Complete
            ]
        );
        assert!(out.join("ok_tex.png").is_file());
    }
}
