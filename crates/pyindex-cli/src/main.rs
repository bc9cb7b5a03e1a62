use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;

/// Generate a pinyin initial-letter index for cmus
///
/// Recursively walks the music directory and, for every audio file found
/// (mp3, flac, wav, ogg, m4a, ape, opus, wma), records the file path, its
/// base name, and a set of initial-letter search keys:
///
/// - initials of the whole name (周杰伦晴天 -> zjlqt)
/// - mixed-script form with Latin text kept (这是pine -> zspine)
/// - one key per side of an "Artist - Title" separator
///
/// The index is rebuilt from scratch on every run and overwrites the output
/// file.
#[derive(Debug, Parser)]
#[command(name = "pyindex", version)]
struct Cli {
    /// Path to the music directory (a leading ~ is expanded)
    directory: PathBuf,

    /// Output file (default: ~/.cmus/pinyin_index.json)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    commands::run_index(cli.directory, cli.output)
}
