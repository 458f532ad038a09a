//! Keyword catalog: canonical item keys and their spoken surface forms.
//!
//! A flat table, not an item hierarchy: each canonical key owns an ordered
//! list of keywords (including cross-lingual synonyms), and each keyword
//! carries the precompiled quantity patterns used by
//! [`extract`](crate::extractor::extract). Adding a menu item means adding
//! one row here and one in [`Menu`](crate::model::Menu).

use crate::extractor::lexicon::NumberLexicon;
use regex::Regex;

/// Quantity patterns for one keyword, precompiled at catalog construction.
///
/// The number-token alternation is: digit run, lexicon entries longest
/// first, then a bare word. The bare-word branch means any adjacent word
/// occupies the quantity slot; an unparseable word yields quantity 1 and
/// does not fall through to the digit-anywhere fallback.
#[derive(Debug, Clone)]
pub(crate) struct KeywordMatcher {
    pub(crate) keyword: String,
    /// `<token> <keyword>`: "3 burger", "tiga burger".
    pub(crate) before: Regex,
    /// `<keyword> <token>`: "burger 3".
    pub(crate) after: Regex,
    /// `<intent-verb> <token> <keyword>`: "mau tiga burger".
    pub(crate) intent: Regex,
}

impl KeywordMatcher {
    fn new(keyword: &str, token_alt: &str) -> Self {
        let kw = regex::escape(keyword);
        // Keywords are escaped literals and the alternation is built from
        // escaped lexicon entries, so compilation cannot fail.
        let compile = |pattern: String| Regex::new(&pattern).expect("literal keyword pattern");
        Self {
            keyword: keyword.to_string(),
            before: compile(format!(r"({token_alt})\s+{kw}")),
            after: compile(format!(r"{kw}\s+({token_alt})")),
            intent: compile(format!(r"(?:mau|pesan|ingin|order)\s+({token_alt})\s+{kw}")),
        }
    }
}

/// One canonical item with its keyword matchers.
#[derive(Debug, Clone)]
pub(crate) struct KeywordEntry {
    pub(crate) key: String,
    pub(crate) keywords: Vec<KeywordMatcher>,
}

/// The full keyword catalog plus the number lexicon it parses with.
#[derive(Debug, Clone)]
pub struct KeywordCatalog {
    entries: Vec<KeywordEntry>,
    lexicon: NumberLexicon,
}

impl KeywordCatalog {
    /// Builds a catalog from `(canonical key, keywords)` rows. Entry order
    /// is preserved; it determines the order of extraction results.
    pub fn new(rows: &[(&str, &[&str])], lexicon: NumberLexicon) -> Self {
        let token_alt = format!(r"\d+|{}|\w+", lexicon.alternation());
        let entries = rows
            .iter()
            .map(|(key, keywords)| KeywordEntry {
                key: (*key).to_string(),
                keywords: keywords
                    .iter()
                    .map(|kw| KeywordMatcher::new(kw, &token_alt))
                    .collect(),
            })
            .collect();
        Self { entries, lexicon }
    }

    /// The standard kiosk catalog, matching [`Menu::standard`](crate::model::Menu::standard).
    pub fn standard() -> Self {
        Self::new(
            &[
                ("burger", &["burger", "hamburger"]),
                ("ayam goreng", &["ayam goreng", "ayam", "fried chicken"]),
                (
                    "kentang goreng",
                    &["kentang goreng", "kentang", "french fries", "fries"],
                ),
                ("hot dog", &["hot dog", "hotdog", "sosis"]),
                ("cola", &["cola", "kola", "pepsi", "soda"]),
                ("mineral water", &["mineral water", "air mineral", "air", "water"]),
                ("es krim", &["es krim", "ice cream", "eskrim"]),
            ],
            NumberLexicon::bilingual(),
        )
    }

    pub(crate) fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    pub fn lexicon(&self) -> &NumberLexicon {
        &self.lexicon
    }

    /// Canonical keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }
}
