use anyhow::{Context, Result};
use pyindex_etl::config::expand_tilde;
use pyindex_etl::{scan, Config};
use std::path::PathBuf;

/// Scan `music_dir` and write the index to the configured output path.
pub fn run_index(music_dir: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let config = Config::load_with_output(output)?;
    let music_dir = expand_tilde(&music_dir);

    if !music_dir.is_dir() {
        log::warn!(
            "{} is not a readable directory; writing an empty index",
            music_dir.display()
        );
    }

    println!("Scanning directory: {}", music_dir.display());
    let index = scan(&music_dir);

    pyindex_core::persist(&index, &config.output_path).with_context(|| {
        format!("Failed to write index to {}", config.output_path.display())
    })?;

    println!(
        "Index saved to {} ({} entries)",
        config.output_path.display(),
        index.len()
    );
    Ok(())
}
