//! Types and parsing for MeCab's line-oriented morphological report.
//!
//! MeCab emits one line per token, `surface<TAB>feature,feature,...`, with a
//! bare sentinel line marking the end of the report. This crate walks that
//! text and yields [`TokenRecord`]s that borrow from the report buffer, plus
//! the part-of-speech label enums ([`WordClass`], [`ExcludedSubtype`]) that
//! downstream classification keys on.
//!
//! Parsing is deliberately best-effort: the report legitimately contains
//! partial-detail entries for punctuation and symbols, so malformed or short
//! lines are dropped rather than reported. A bad line never aborts the
//! document.
//!
//! ```rust
//! use mecab_report::{WordClass, token_records};
//!
//! let report = "猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ\nEOF\n";
//! let records: Vec<_> = token_records(report).collect();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].surface, "猫");
//! assert_eq!(records[0].word_class(), Some(WordClass::Noun));
//! ```

use std::fmt;

/// Base-form field value meaning "the analyzer could not determine a lemma".
pub const UNDETERMINED_BASE: &str = "*";

/// Sentinel line terminating the semantic content of a report.
const END_OF_REPORT: &str = "EOF";

/// A token needs this many feature fields before the base form is readable.
const MIN_FEATURES: usize = 7;

/// Top-level part-of-speech category, restricted to the four open classes
/// that can carry vocabulary. Closed classes (particles, auxiliaries,
/// punctuation, ...) have no variant here and parse to `None`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl WordClass {
    /// Parse an IPADIC major-class label into an enum.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "名詞" => Some(WordClass::Noun),
            "動詞" => Some(WordClass::Verb),
            "形容詞" => Some(WordClass::Adjective),
            "副詞" => Some(WordClass::Adverb),
            _ => None,
        }
    }

    /// Emit the IPADIC label for this class.
    pub fn label(self) -> &'static str {
        match self {
            WordClass::Noun => "名詞",
            WordClass::Verb => "動詞",
            WordClass::Adjective => "形容詞",
            WordClass::Adverb => "副詞",
        }
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WordClass::Noun => "noun",
            WordClass::Verb => "verb",
            WordClass::Adjective => "adjective",
            WordClass::Adverb => "adverb",
        })
    }
}

/// Subtype labels that disqualify an otherwise open-class token: auxiliary
/// "non-independent" usages, honorific/suffix morphemes, pronouns, numerals.
/// Grammatically open-class, lexically uninteresting.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ExcludedSubtype {
    NonIndependent,
    Suffix,
    Pronoun,
    Numeral,
}

impl ExcludedSubtype {
    /// Parse an IPADIC subtype label; `None` means the subtype is not excluded.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "非自立" => Some(ExcludedSubtype::NonIndependent),
            "接尾" => Some(ExcludedSubtype::Suffix),
            "代名詞" => Some(ExcludedSubtype::Pronoun),
            "数" => Some(ExcludedSubtype::Numeral),
            _ => None,
        }
    }

    /// Emit the IPADIC label for this subtype.
    pub fn label(self) -> &'static str {
        match self {
            ExcludedSubtype::NonIndependent => "非自立",
            ExcludedSubtype::Suffix => "接尾",
            ExcludedSubtype::Pronoun => "代名詞",
            ExcludedSubtype::Numeral => "数",
        }
    }
}

/// Split a line at every occurrence of a single-character delimiter.
///
/// Policy, pinned by tests: the empty string yields no fields, and a trailing
/// delimiter yields a trailing empty field (`"a,"` → `["a", ""]`). Pure and
/// total; there are no error conditions.
pub fn split_fields(line: &str, delim: char) -> Vec<&str> {
    if line.is_empty() {
        return Vec::new();
    }
    line.split(delim).collect()
}

/// One token entry from the report, borrowing from the report text.
///
/// Records produced by [`token_records`] always carry at least seven feature
/// fields; the derived accessors index on that invariant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenRecord<'a> {
    /// The literal substring as it appeared in the source text.
    pub surface: &'a str,
    /// The token's info field split on commas, order preserved.
    pub features: Vec<&'a str>,
}

impl<'a> TokenRecord<'a> {
    /// Parse a single report line, or `None` if it is not a full token entry.
    ///
    /// Drops the end-of-report sentinel, lines without a tab (blank lines,
    /// stray analyzer chatter), and entries with fewer than seven features
    /// (punctuation and symbols come without full grammatical detail).
    pub fn parse(line: &'a str) -> Option<Self> {
        if line == END_OF_REPORT {
            return None;
        }
        let (surface, info) = line.split_once('\t')?;
        let features = split_fields(info, ',');
        if features.len() < MIN_FEATURES {
            return None;
        }
        Some(TokenRecord { surface, features })
    }

    /// Top-level part-of-speech label, e.g. `名詞`.
    pub fn major_class(&self) -> &'a str {
        self.features[0]
    }

    /// Finer-grained part-of-speech label, e.g. `代名詞`.
    pub fn subtype(&self) -> &'a str {
        self.features[1]
    }

    /// Dictionary form as reported by the analyzer; may be [`UNDETERMINED_BASE`].
    pub fn base_form(&self) -> &'a str {
        self.features[6]
    }

    /// The major class as an open-class enum, or `None` for closed classes.
    pub fn word_class(&self) -> Option<WordClass> {
        WordClass::from_label(self.major_class())
    }

    /// The subtype as an exclusion enum, or `None` when nothing disqualifies it.
    pub fn excluded_subtype(&self) -> Option<ExcludedSubtype> {
        ExcludedSubtype::from_label(self.subtype())
    }

    /// Aggregation key: the base form, falling back to the surface form when
    /// the analyzer could not determine a lemma.
    pub fn vocab_key(&self) -> &'a str {
        let base = self.base_form();
        if base == UNDETERMINED_BASE {
            self.surface
        } else {
            base
        }
    }
}

/// Walk a full report lazily, yielding one [`TokenRecord`] per parseable line.
///
/// Handles both `\n` and `\r\n` line endings. The `EOF` sentinel and any
/// malformed lines are skipped silently, per the crate-level policy.
pub fn token_records(report: &str) -> impl Iterator<Item = TokenRecord<'_>> {
    report.lines().filter_map(TokenRecord::parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_fields_round_trips() {
        let fields = ["動詞", "自立", "*", "*", "一段", "連用形", "食べる"];
        let joined = fields.join(",");
        assert_eq!(split_fields(&joined, ','), fields);
    }

    #[test]
    fn split_fields_empty_input_has_no_fields() {
        assert_eq!(split_fields("", ','), Vec::<&str>::new());
    }

    #[test]
    fn split_fields_trailing_delimiter_yields_empty_field() {
        assert_eq!(split_fields("a,b,", ','), vec!["a", "b", ""]);
        assert_eq!(split_fields(",", ','), vec!["", ""]);
    }

    #[test]
    fn word_class_labels_round_trip() {
        for class in [
            WordClass::Noun,
            WordClass::Verb,
            WordClass::Adjective,
            WordClass::Adverb,
        ] {
            assert_eq!(WordClass::from_label(class.label()), Some(class));
        }
        assert_eq!(WordClass::from_label("助詞"), None);
        assert_eq!(WordClass::from_label(""), None);
    }

    #[test]
    fn excluded_subtype_labels_round_trip() {
        for subtype in [
            ExcludedSubtype::NonIndependent,
            ExcludedSubtype::Suffix,
            ExcludedSubtype::Pronoun,
            ExcludedSubtype::Numeral,
        ] {
            assert_eq!(ExcludedSubtype::from_label(subtype.label()), Some(subtype));
        }
        assert_eq!(ExcludedSubtype::from_label("一般"), None);
    }

    #[test]
    fn parses_a_full_token_line() {
        let record = TokenRecord::parse("猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ").expect("token");
        assert_eq!(record.surface, "猫");
        assert_eq!(record.major_class(), "名詞");
        assert_eq!(record.subtype(), "一般");
        assert_eq!(record.base_form(), "猫");
        assert_eq!(record.word_class(), Some(WordClass::Noun));
        assert_eq!(record.excluded_subtype(), None);
    }

    #[test]
    fn drops_sentinel_and_tabless_lines() {
        assert_eq!(TokenRecord::parse("EOF"), None);
        assert_eq!(TokenRecord::parse(""), None);
        assert_eq!(TokenRecord::parse("EOS"), None);
        assert_eq!(TokenRecord::parse("no tab here"), None);
    }

    #[test]
    fn drops_short_feature_lists() {
        // Symbol entries come without the full seven fields.
        assert_eq!(TokenRecord::parse("。\t記号,句点"), None);
        assert_eq!(TokenRecord::parse("、\t記号,読点,*,*,*,*"), None);
    }

    #[test]
    fn splits_at_the_first_tab_only() {
        let record = TokenRecord::parse("a\tb\t名詞,一般,*,*,*,*,x").expect("token");
        assert_eq!(record.surface, "a");
        assert_eq!(record.features[0], "b\t名詞");
    }

    #[test]
    fn vocab_key_falls_back_to_surface() {
        let named = TokenRecord::parse("食べ\t動詞,自立,*,*,一段,連用形,食べる,タベ,タベ")
            .expect("token");
        assert_eq!(named.vocab_key(), "食べる");

        let undetermined =
            TokenRecord::parse("グーグル\t名詞,固有名詞,組織,*,*,*,*").expect("token");
        assert_eq!(undetermined.vocab_key(), "グーグル");
    }

    #[test]
    fn iterator_is_lazy_and_skips_noise() {
        let report = "猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ\n\
                      EOF\n\
                      。\t記号,句点\n\
                      走っ\t動詞,自立,*,*,五段・ラ行,連用タ接続,走る,ハシッ,ハシッ\n";
        let surfaces: Vec<_> = token_records(report).map(|r| r.surface).collect();
        assert_eq!(surfaces, vec!["猫", "走っ"]);
    }

    #[test]
    fn handles_crlf_reports() {
        let report = "猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ\r\nEOF\r\n";
        assert_eq!(token_records(report).count(), 1);
    }
}
