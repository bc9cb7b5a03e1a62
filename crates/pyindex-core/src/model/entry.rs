use serde::{Deserialize, Serialize};

/// One discovered music file and its romanized search keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Full path of the file as discovered during the walk.
    pub filename: String,

    /// Final path component, extension included.
    pub basename: String,

    /// Space-joined bag of alternative initial-letter keys.
    ///
    /// Empty tokens are kept; the player splits on single spaces.
    pub pinyin_initials: String,
}

impl IndexEntry {
    #[must_use]
    pub fn new(
        filename: impl Into<String>,
        basename: impl Into<String>,
        pinyin_initials: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            basename: basename.into(),
            pinyin_initials: pinyin_initials.into(),
        }
    }
}
