use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for pyindex.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (PYINDEX_* prefix)
/// 3. Config file (~/.config/pyindex/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where the generated index is written.
    ///
    /// Can be set via:
    /// - CLI: -o/--output /path/to/index.json
    /// - ENV: PYINDEX_OUTPUT_PATH
    /// - Config: output_path = "/path/to/index.json"
    /// - Default: ~/.cmus/pinyin_index.json
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `config_path` (if it exists) and the
    /// environment.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut builder = Confygery::new()
            .context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder.add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("pyindex");
        builder.add_env(env_opts)
            .context("Failed to load environment variables")?;

        let mut config: Self = builder.build()
            .context("Failed to build configuration")?;
        config.output_path = expand_tilde(&config.output_path);

        Ok(config)
    }

    /// Load configuration, letting an explicit output path win.
    ///
    /// This is used when the -o/--output CLI flag is provided.
    pub fn load_with_output(output: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(output) = output {
            config.output_path = expand_tilde(&output);
        }
        Ok(config)
    }
}

/// Expand a leading `~` to the current user's home directory.
///
/// Only `~` on its own or followed by a separator is expanded; `~user`
/// forms and paths without a tilde are returned unchanged, as is every path
/// when no home directory can be determined.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) if rest.as_os_str().is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// Get the default index path: ~/.cmus/pinyin_index.json
fn default_output_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cmus")
        .join("pinyin_index.json")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/pyindex/config.toml
/// - macOS: ~/Library/Application Support/pyindex/config.toml
/// - Windows: %APPDATA%\pyindex\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pyindex")
        .join("config.toml")
}
