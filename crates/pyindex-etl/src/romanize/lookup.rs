use pinyin::ToPinyin;

/// Per-character phonetic lookup.
///
/// Returns the first Latin letter of the character's romanization, or
/// `None` when the character has no reading.
pub trait InitialLookup {
    fn initial_letter(&self, c: char) -> Option<char>;
}

impl<F> InitialLookup for F
where
    F: Fn(char) -> Option<char>,
{
    fn initial_letter(&self, c: char) -> Option<char> {
        self(c)
    }
}

/// Mandarin pinyin lookup backed by the `pinyin` crate.
///
/// Uses the single most common reading of each character; heteronyms are
/// not disambiguated.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinLookup;

impl InitialLookup for PinyinLookup {
    fn initial_letter(&self, c: char) -> Option<char> {
        c.to_pinyin()
            .and_then(|py| py.first_letter().chars().next())
    }
}
