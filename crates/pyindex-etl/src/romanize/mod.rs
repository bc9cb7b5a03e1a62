//! Filename to initial-letter keys.
//!
//! Every filename stem yields several alternative keys, joined by single
//! spaces into `pinyin_initials`:
//!
//! 1. the *pure* initials of the whole stem, where characters without a
//!    reading pass through unchanged (`Jay 晴天` -> `jay qt`);
//! 2. the *hybrid* form, where Chinese runs become initials and everything
//!    else is kept verbatim minus whitespace (`这是pine` -> `zspine`);
//! 3. one key per side of an `artist - title` style separator.
//!
//! The player treats the result as a bag of keywords, so empty and repeated
//! keys are kept as-is.

mod lookup;

use std::path::Path;

use pyindex_core::IndexEntry;

pub use lookup::{InitialLookup, PinyinLookup};

/// Separator tokens tried in order; only the first one present is used.
pub const SEPARATORS: [&str; 5] = ["-", "_", "\u{2013}", "\u{2014}", " - "];

/// Whether `c` lies in the CJK Unified Ideographs block (U+4E00..=U+9FFF).
///
/// CJK extension blocks fall outside this range.
#[must_use]
pub const fn is_ideographic(c: char) -> bool {
    matches!(c, '\u{4e00}'..='\u{9fff}')
}

/// Whitespace for key building: Unicode `White_Space` plus the information
/// separators U+001C..=U+001F.
#[must_use]
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Turns filename stems into search keys using an [`InitialLookup`].
#[derive(Debug, Clone, Default)]
pub struct Romanizer<L = PinyinLookup> {
    lookup: L,
}

impl Romanizer<PinyinLookup> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: InitialLookup> Romanizer<L> {
    pub fn with_lookup(lookup: L) -> Self {
        Self { lookup }
    }

    /// Initial letters of every character in `text`, lowercased.
    ///
    /// The text is assumed to be Chinese; characters the lookup does not
    /// know, whitespace included, are copied through unchanged.
    pub fn initials(&self, text: &str) -> String {
        text.chars()
            .map(|c| self.initial_or_self(c))
            .collect::<String>()
            .to_lowercase()
    }

    /// Mixed-script romanization: Chinese runs become initials, other
    /// characters are kept and whitespace is dropped.
    pub fn hybrid(&self, text: &str) -> String {
        // Initials are per character, so runs can be handled one char at a time.
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if is_ideographic(c) {
                out.push(self.initial_or_self(c));
            } else if !is_space(c) {
                out.push(c);
            }
        }
        out.to_lowercase()
    }

    /// Initials for each side of the first matching separator.
    ///
    /// Splits once, at the first occurrence of the highest-priority
    /// separator present. Sides that are blank after trimming are dropped.
    /// Returns an empty vector when no separator occurs.
    pub fn segments(&self, text: &str) -> Vec<String> {
        let Some((head, tail)) = SEPARATORS.iter().find_map(|sep| text.split_once(*sep)) else {
            return Vec::new();
        };

        [head, tail]
            .into_iter()
            .map(|part| part.trim_matches(is_space))
            .filter(|part| !part.is_empty())
            .map(|part| self.initials(part))
            .collect()
    }

    /// Build the index entry for one file.
    pub fn romanize_path(&self, path: &Path) -> IndexEntry {
        let basename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut keys = vec![self.initials(&name), self.hybrid(&name)];
        keys.extend(self.segments(&name));

        IndexEntry::new(path.to_string_lossy(), basename, keys.join(" "))
    }

    fn initial_or_self(&self, c: char) -> char {
        self.lookup.initial_letter(c).unwrap_or(c)
    }
}

/// [`Romanizer::initials`] with the default pinyin lookup.
pub fn initials(text: &str) -> String {
    Romanizer::new().initials(text)
}

/// [`Romanizer::hybrid`] with the default pinyin lookup.
pub fn hybrid(text: &str) -> String {
    Romanizer::new().hybrid(text)
}

/// [`Romanizer::segments`] with the default pinyin lookup.
pub fn segments(text: &str) -> Vec<String> {
    Romanizer::new().segments(text)
}

/// [`Romanizer::romanize_path`] with the default pinyin lookup.
pub fn romanize_path(path: &Path) -> IndexEntry {
    Romanizer::new().romanize_path(path)
}
