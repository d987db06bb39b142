//! CLI interface for batch SC → PNG conversion
use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{LOOKING_GLASS, PICTURE, print_done, print_step, simple_bar};
use crate::converter::{ConvertPhase, batch_convert, find_sc_tex_files};

pub fn execute(source: &Path, destination: &Path, quiet: bool) -> anyhow::Result<()> {
    let start = Instant::now();

    if !quiet {
        print_step(1, 2, LOOKING_GLASS, &format!("Scanning {}", source.display()));
    }
    let files = find_sc_tex_files(source)?;
    if files.is_empty() {
        println!("No _tex.sc files found in {}", source.display());
        return Ok(());
    }

    let result = if !quiet {
        print_step(2, 2, PICTURE, &format!("Converting {} textures", files.len()));
        let pb = simple_bar(files.len() as u64, "Converting");
        let result = batch_convert(&files, source, destination, |progress| {
            if progress.phase == ConvertPhase::Complete {
                return;
            }
            if let Some(file) = &progress.current_file {
                pb.set_message(format!("{} {file}", progress.phase.as_str()));
            }
            pb.set_position(progress.current.saturating_sub(1) as u64);
        });
        pb.finish_and_clear();
        result
    } else {
        batch_convert(&files, source, destination, |_| {})
    };

    for message in result.results.iter().filter(|m| m.starts_with("Failed")) {
        eprintln!("{message}");
    }
    println!(
        "Converted {} of {} textures ({} failed)",
        result.success_count,
        files.len(),
        result.fail_count
    );

    if !quiet {
        print_done(start.elapsed());
    }

    if result.fail_count > 0 {
        anyhow::bail!("{} textures failed to convert", result.fail_count);
    }
    Ok(())
}
