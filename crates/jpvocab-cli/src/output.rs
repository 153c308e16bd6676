//! Presentation of the frequency table: sorted columns or JSON.

use std::collections::HashMap;
use std::fmt::Write;

use serde::Serialize;

/// JSON shape emitted by `--json`: the whole table plus summary figures.
#[derive(Serialize)]
struct FrequencySummary<'a> {
    distinct_words: usize,
    total_occurrences: u64,
    counts: &'a HashMap<String, u64>,
}

/// Order the table for display: count descending, ties by key so the report
/// is stable across runs.
pub fn sorted_entries(counts: &HashMap<String, u64>) -> Vec<(&str, u64)> {
    let mut entries: Vec<(&str, u64)> = counts.iter().map(|(w, c)| (w.as_str(), *c)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}

/// Render the top `limit` entries as aligned `word : count` columns.
pub fn render_table(counts: &HashMap<String, u64>, limit: usize) -> String {
    let entries = sorted_entries(counts);
    let shown = &entries[..limit.min(entries.len())];
    let width = shown
        .iter()
        .map(|(word, _)| word.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (word, count) in shown {
        let _ = writeln!(out, "{word:<width$} : {count}");
    }
    out
}

/// Render the full table as pretty-printed JSON.
pub fn render_json(counts: &HashMap<String, u64>) -> serde_json::Result<String> {
    let summary = FrequencySummary {
        distinct_words: counts.len(),
        total_occurrences: counts.values().sum(),
        counts,
    };
    serde_json::to_string_pretty(&summary)
}
