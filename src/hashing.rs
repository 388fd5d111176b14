//! The two supplied string hash functions.
//!
//! Maps store the function they were constructed with and treat it as an
//! opaque `&str -> u64` with no distribution guarantee. Bucket selection is
//! always `hash(key) % capacity`; anything beyond that (probing, chaining)
//! is the map's job, not the hash function's.

/// Hash function consumed by both map variants.
pub type HashFn = fn(&str) -> u64;

/// Sum of the key's character code points.
pub fn char_sum_hash(key: &str) -> u64 {
    key.chars().map(|c| c as u64).sum()
}

/// Position-weighted sum: character at index `i` contributes
/// `(i + 1) * code_point`. Distinguishes permutations of the same
/// characters, which `char_sum_hash` cannot.
pub fn weighted_char_hash(key: &str) -> u64 {
    key.chars()
        .enumerate()
        .map(|(i, c)| (i as u64 + 1) * c as u64)
        .sum()
}
