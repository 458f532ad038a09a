//! Bilingual number-word lexicon.
//!
//! Spoken quantities arrive either as digit runs ("3") or as number words in
//! Indonesian ("tiga") or English ("three"). The lexicon is an explicit
//! ordered table per language, merged with deterministic precedence: digits
//! always win over words, and on a spelling collision the first-registered
//! language wins.

/// Indonesian number words, 1–20.
const INDONESIAN: &[(&str, u32)] = &[
    ("satu", 1),
    ("dua", 2),
    ("tiga", 3),
    ("empat", 4),
    ("lima", 5),
    ("enam", 6),
    ("tujuh", 7),
    ("delapan", 8),
    ("sembilan", 9),
    ("sepuluh", 10),
    ("sebelas", 11),
    ("dua belas", 12),
    ("tiga belas", 13),
    ("empat belas", 14),
    ("lima belas", 15),
    ("enam belas", 16),
    ("tujuh belas", 17),
    ("delapan belas", 18),
    ("sembilan belas", 19),
    ("dua puluh", 20),
];

/// English number words, 1–20.
const ENGLISH: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
];

/// Ordered lookup table mapping number words to values.
#[derive(Debug, Clone)]
pub struct NumberLexicon {
    entries: Vec<(String, u32)>,
}

impl NumberLexicon {
    /// The standard Indonesian-then-English lexicon, 1–20 each.
    pub fn bilingual() -> Self {
        let mut lexicon = Self {
            entries: Vec::new(),
        };
        lexicon.register(INDONESIAN);
        lexicon.register(ENGLISH);
        lexicon
    }

    /// Registers a language's words. Words already present keep their
    /// earlier binding (first-registered language wins).
    pub fn register(&mut self, words: &[(&str, u32)]) {
        for (word, value) in words {
            if self.lookup(word).is_none() {
                self.entries.push(((*word).to_string(), *value));
            }
        }
    }

    /// Looks up a number word.
    pub fn lookup(&self, word: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, v)| *v)
    }

    /// Parses a captured token: digit sequences are parsed directly and take
    /// precedence; anything else is looked up as a number word. Returns
    /// `None` for tokens that are neither (callers default those to 1).
    pub fn parse_token(&self, token: &str) -> Option<u32> {
        if token.chars().all(|c| c.is_ascii_digit()) {
            return token.parse().ok();
        }
        self.lookup(token)
    }

    /// The lexicon as a regex alternation, longest entry first so that
    /// multi-word numbers ("dua belas") match as a whole.
    pub fn alternation(&self) -> String {
        let mut words: Vec<&str> = self.entries.iter().map(|(w, _)| w.as_str()).collect();
        words.sort_by_key(|w| std::cmp::Reverse(w.len()));
        words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_both_languages() {
        let lexicon = NumberLexicon::bilingual();
        assert_eq!(lexicon.lookup("tiga"), Some(3));
        assert_eq!(lexicon.lookup("three"), Some(3));
        assert_eq!(lexicon.lookup("dua puluh"), Some(20));
        assert_eq!(lexicon.lookup("twenty"), Some(20));
        assert_eq!(lexicon.lookup("banyak"), None);
    }

    #[test]
    fn digits_take_precedence_over_words() {
        let lexicon = NumberLexicon::bilingual();
        assert_eq!(lexicon.parse_token("15"), Some(15));
        assert_eq!(lexicon.parse_token("lima"), Some(5));
        assert_eq!(lexicon.parse_token("mau"), None);
    }

    #[test]
    fn first_registered_language_wins_on_collision() {
        let mut lexicon = NumberLexicon {
            entries: Vec::new(),
        };
        lexicon.register(&[("pair", 2)]);
        lexicon.register(&[("pair", 99)]);
        assert_eq!(lexicon.lookup("pair"), Some(2));
    }

    #[test]
    fn alternation_puts_longer_entries_first() {
        let lexicon = NumberLexicon::bilingual();
        let alt = lexicon.alternation();
        let dua_belas = alt.find("dua belas").unwrap();
        let dua = alt.find("dua|").or_else(|| alt.find("|dua")).unwrap();
        assert!(dua_belas < dua);
    }
}
