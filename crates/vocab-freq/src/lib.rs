//! Vocabulary frequency aggregation over MeCab morphological reports.
//!
//! [`count_unique_words`] applies the classification rules to every token in
//! a report and accumulates a word → count table: only the four open classes
//! (noun, verb, adjective, adverb) are vocabulary candidates, a handful of
//! lexically uninteresting subtypes are excluded, and each surviving token is
//! keyed by its dictionary form, falling back to the surface form when the
//! analyzer could not lemmatize. Inflected forms of one lemma therefore
//! collapse into a single entry.
//!
//! The crate also carries [`count_scalar_values`], an independent UTF-8
//! scalar-value counter with no ties to the analyzer pipeline.
//!
//! ```rust
//! use vocab_freq::count_unique_words;
//!
//! let report = "猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ\nEOF\n";
//! let counts = count_unique_words(report);
//! assert_eq!(counts.get("猫"), Some(&1));
//! ```
//!
//! Every function here is total: malformed report lines are dropped, never
//! reported. Analyzer failure is the caller's concern, upstream of this crate.

use std::collections::HashMap;

use mecab_report::{TokenRecord, token_records};

mod scalar;

pub use scalar::count_scalar_values;

/// Build a frequency table of vocabulary words from a full analyzer report.
///
/// The table is freshly allocated per call and carries no ordering contract;
/// presentation layers sort as they see fit.
pub fn count_unique_words(report: &str) -> HashMap<String, u64> {
    let mut counts = HashMap::new();
    for record in token_records(report) {
        if !is_vocabulary(&record) {
            continue;
        }
        *counts.entry(record.vocab_key().to_owned()).or_insert(0) += 1;
    }
    counts
}

/// Classification rule: open-class major category, minus the excluded
/// subtypes (non-independent usage, suffix, pronoun, numeral).
pub fn is_vocabulary(record: &TokenRecord<'_>) -> bool {
    record.word_class().is_some() && record.excluded_subtype().is_none()
}
