//! UTF-8 scalar-value counting by lead-byte inspection.
//!
//! Independent of the analyzer pipeline; works on arbitrary bytes with no
//! Unicode tables. This counts scalar values, not grapheme clusters, so
//! combining marks each count once.

/// Count the Unicode scalar values in a UTF-8 byte sequence.
///
/// Each position's lead byte declares the sequence length (`0xxxxxxx`,
/// `110xxxxx`, `1110xxxx`, `11110xxx` → 1/2/3/4 bytes); the cursor advances
/// by that length and the count goes up by one. Tolerance policy, kept on
/// purpose: a byte matching none of the patterns (a stray continuation byte
/// where a lead byte should be) still counts as one scalar and advances the
/// cursor by one, and a truncated multi-byte tail ends the scan cleanly.
/// Total on arbitrary input; malformed bytes skew the count, never fail it.
pub fn count_scalar_values(text: impl AsRef<[u8]>) -> usize {
    let bytes = text.as_ref();
    let mut count = 0;
    let mut pos = 0;
    while pos < bytes.len() {
        count += 1;
        pos += sequence_len(bytes[pos]);
    }
    count
}

fn sequence_len(lead: u8) -> usize {
    if lead & 0x80 == 0x00 {
        1
    } else if lead & 0xE0 == 0xC0 {
        2
    } else if lead & 0xF0 == 0xE0 {
        3
    } else if lead & 0xF8 == 0xF0 {
        4
    } else {
        // Unexpected continuation byte; treat as a 1-byte sequence.
        1
    }
}
