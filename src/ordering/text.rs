//! Case-insensitive text helpers
//!
//! Comparison works on the lowercase expansion of each char, so it is
//! Unicode aware and allocation free.

use std::cmp::Ordering;

/// Lexicographic comparison ignoring case
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Exact match ignoring case
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    compare_ignore_case(a, b) == Ordering::Equal
}

/// Substring match ignoring case. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
