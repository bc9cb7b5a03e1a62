use std::path::Path;

use pyindex_core::Index;
use walkdir::WalkDir;

use crate::romanize::{InitialLookup, PinyinLookup, Romanizer};

/// File name suffixes treated as music, compared case-insensitively.
pub const MUSIC_EXTENSIONS: [&str; 8] = [
    ".mp3", ".flac", ".wav", ".ogg", ".m4a", ".ape", ".opus", ".wma",
];

/// Walks a music directory and romanizes every music file it finds.
#[derive(Debug, Clone)]
pub struct Scanner<L = PinyinLookup> {
    romanizer: Romanizer<L>,
    extensions: Vec<String>,
}

impl Default for Scanner<PinyinLookup> {
    fn default() -> Self {
        Self::with_lookup(PinyinLookup)
    }
}

impl Scanner<PinyinLookup> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: InitialLookup> Scanner<L> {
    pub fn with_lookup(lookup: L) -> Self {
        Self {
            romanizer: Romanizer::with_lookup(lookup),
            extensions: MUSIC_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect(),
        }
    }

    /// Replace the recognized suffixes. A leading dot is added if missing.
    #[must_use]
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.as_ref().to_lowercase();
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{ext}")
                }
            })
            .collect();
        self
    }

    pub fn is_music_file(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.extensions.iter().any(|ext| lower.ends_with(ext.as_str()))
    }

    /// Recursively index every music file under `dir`.
    ///
    /// Each directory's files come before its subdirectories, which are
    /// then visited in turn; otherwise listing order is kept. A missing or
    /// unreadable directory yields an empty index; unreadable entries are
    /// logged and skipped.
    pub fn scan(&self, dir: &Path) -> Index {
        log::info!("Starting scan of {}", dir.display());

        let mut index = Index::new();
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .follow_links(false)
            .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable path: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if path.is_dir() || !self.is_music_file(&entry.file_name().to_string_lossy()) {
                continue;
            }

            log::debug!("Indexing: {}", path.display());
            index.push(self.romanizer.romanize_path(path));
        }

        log::info!("Scan complete: {} music files indexed", index.len());
        index
    }
}

/// Scan `dir` with the default pinyin lookup and extension list.
pub fn scan(dir: &Path) -> Index {
    Scanner::new().scan(dir)
}

/// Whether `file_name` ends with one of [`MUSIC_EXTENSIONS`].
pub fn is_music_file(file_name: &str) -> bool {
    Scanner::new().is_music_file(file_name)
}
