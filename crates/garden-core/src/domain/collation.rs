//! Locale-aware name ordering.
//!
//! Names are compared the way a reader expects rather than by code point:
//! `"émile"` sorts next to `"emile"`, and `"apple"` before `"Banana"`.
//!
//! Comparison levels:
//! 1. Primary: canonical decomposition (NFD), combining marks dropped,
//!    lower-cased. Ignores accents and case.
//! 2. Secondary: the accented form (NFD, lower-cased); unaccented first.
//! 3. Tertiary: case; lower-case first.
//! 4. Raw code points, so the ordering is total.

use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Primary sort key: no diacritics, no case.
pub fn primary_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

fn secondary_key(s: &str) -> String {
    s.nfd().collect::<String>().to_lowercase()
}

/// Upper-case letters weigh more than lower-case ones at the tertiary level.
fn tertiary_key(s: &str) -> Vec<bool> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
        .collect()
}

/// Total, locale-aware comparison of two display strings.
pub fn compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(&tertiary_key(b)))
        .then_with(|| a.cmp(b))
}
