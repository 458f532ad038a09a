//! Quantity-item extraction: raw transcript in, `(item, quantity)` out.
//!
//! The extractor is a pure function over a noisy channel. It never fails:
//! garbage input (including the transcription service's apology text)
//! simply matches no keywords and yields an empty result. Items are
//! extracted independently of each other, so one utterance can produce
//! several cart additions.
//!
//! # Quantity search order
//!
//! Per item, the first keyword found in the transcript wins, and its
//! quantity is taken from the first of these patterns to match:
//!
//! 1. token immediately before the keyword ("3 burger", "tiga burger")
//! 2. token immediately after the keyword ("burger 3")
//! 3. intent verb, token, keyword ("saya mau tiga burger")
//! 4. first digit run anywhere in the transcript
//! 5. default 1: a mentioned item is "one, implied"
//!
//! The fallback (4) deliberately trades precision for recall: with several
//! items and numerals in one utterance it can misattribute a quantity, but
//! it never silently drops a mentioned item. Quantities are clamped to a
//! minimum of 1.

pub mod catalog;
pub mod lexicon;

pub use catalog::KeywordCatalog;
pub use lexicon::NumberLexicon;

use catalog::KeywordEntry;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static FIRST_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// One recognized menu item with its spoken quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedItem {
    /// Canonical item key, resolvable via [`Menu::resolve`](crate::model::Menu::resolve).
    pub key: String,
    pub quantity: u32,
}

/// Extracts `(item, quantity)` pairs from a transcript.
///
/// Case-insensitive; results come back in catalog registration order, which
/// downstream becomes cart display order. Unrecognized transcripts yield an
/// empty vector, never an error. Pure: the same transcript always produces
/// the same result.
pub fn extract(transcript: &str, catalog: &KeywordCatalog) -> Vec<ExtractedItem> {
    let text = transcript.to_lowercase();
    catalog
        .entries()
        .iter()
        .filter_map(|entry| {
            quantity_for(entry, &text, catalog).map(|quantity| ExtractedItem {
                key: entry.key.clone(),
                quantity,
            })
        })
        .collect()
}

/// Runs the pattern cascade for one catalog entry. `None` means no keyword
/// of this item occurs in the transcript.
fn quantity_for(entry: &KeywordEntry, text: &str, catalog: &KeywordCatalog) -> Option<u32> {
    for matcher in &entry.keywords {
        if !text.contains(&matcher.keyword) {
            continue;
        }

        let token = matcher
            .before
            .captures(text)
            .or_else(|| matcher.after.captures(text))
            .or_else(|| matcher.intent.captures(text))
            .map(|caps| caps[1].to_string())
            .or_else(|| FIRST_DIGITS.find(text).map(|m| m.as_str().to_string()));

        let quantity = token
            .and_then(|t| catalog.lexicon().parse_token(&t))
            .unwrap_or(1);

        // A matched keyword always yields at least one: zero or unparseable
        // numerals are treated as noise, not as "remove the item".
        return Some(quantity.max(1));
    }
    None
}
