//! Hash-embedded file names
//!
//! `/css/app.css` with hash `h` becomes `/css/app-h.css`. The hash goes in
//! front of the first `.` of the leaf, or at the end when the leaf has no
//! extension. The generated module carries the same three functions.

use crate::domain::value_objects::{is_hash_hex, ContentHash};

/// `-` plus 40 hex characters
const SUFFIX_LEN: usize = ContentHash::HEX_LEN + 1;

/// Insert `-<hash>` into the leaf of `name`, ahead of its extension
pub fn join(name: &str, hash: &str) -> String {
    let (dir, leaf) = split(name);
    match leaf.find('.') {
        Some(i) => format!("{}{}-{}{}", dir, &leaf[..i], hash, &leaf[i..]),
        None => format!("{}-{}", name, hash),
    }
}

/// Remove an embedded hash, or return `name` unchanged when it has none
pub fn strip(name: &str) -> String {
    let (dir, leaf) = split(name);
    let (stem, ext) = split_extension(leaf);
    match strip_suffix(stem) {
        Some(base) => format!("{}{}{}", dir, base, ext),
        None => name.to_string(),
    }
}

/// True if the leaf stem ends in `-` followed by 40 lowercase hex characters
pub fn has_embedded_hash(name: &str) -> bool {
    let (_, leaf) = split(name);
    strip_suffix(split_extension(leaf).0).is_some()
}

/// Split after the last `/`
fn split(name: &str) -> (&str, &str) {
    name.split_at(name.rfind('/').map_or(0, |i| i + 1))
}

/// Split at the first `.`
fn split_extension(leaf: &str) -> (&str, &str) {
    leaf.split_at(leaf.find('.').unwrap_or(leaf.len()))
}

fn strip_suffix(stem: &str) -> Option<&str> {
    let at = stem.len().checked_sub(SUFFIX_LEN)?;
    if stem.as_bytes()[at] != b'-' {
        return None;
    }
    // `at` holds an ASCII byte, so both slices fall on char boundaries.
    is_hash_hex(&stem[at + 1..]).then(|| &stem[..at])
}
