//! Czech-collation name ordering.
//!
//! Case-insensitive; accents fold to their base letter, except the
//! distinct Czech letters `č ř š ž` which order right after `c r s z`,
//! and the digraph `ch` which orders after `h`.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Compare two names in Czech alphabetical order.
pub fn cmp_czech(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b)).then_with(|| a.cmp(b))
}

/// Primary collation key. Letters occupy 100.., ten apart, so the
/// distinct Czech letters fit between their neighbours; other ASCII keeps
/// its codepoint (below the letter band, so spaces and digits sort first
/// as in a name list).
fn sort_key(s: &str) -> Vec<u32> {
    let lower: Vec<char> = s.to_lowercase().chars().collect();
    let mut key = Vec::with_capacity(lower.len());

    let mut i = 0;
    while i < lower.len() {
        if lower[i] == 'c' && lower.get(i + 1) == Some(&'h') {
            key.push(letter_weight('h') + 5);
            i += 2;
            continue;
        }
        key.push(char_weight(lower[i]));
        i += 1;
    }

    key
}

fn letter_weight(c: char) -> u32 {
    100 + (c as u32 - 'a' as u32) * 10
}

fn char_weight(c: char) -> u32 {
    match c {
        'a'..='z' => letter_weight(c),
        'č' => letter_weight('c') + 5,
        'ř' => letter_weight('r') + 5,
        'š' => letter_weight('s') + 5,
        'ž' => letter_weight('z') + 5,
        _ if c.is_ascii() => c as u32,
        _ => {
            // Fold the remaining accented letters (á é ě í ó ú ů ý ď ť ň …)
            // to their NFD base letter.
            match c.nfd().next() {
                Some(base) if base.is_ascii_lowercase() => letter_weight(base),
                _ => 0x1_0000 + c as u32,
            }
        }
    }
}
