//! Pure filename parsing for card numbers.
//!
//! This module isolates the string-scraping part of indexing so it can be unit
//! tested without touching the filesystem.
//!
//! # Public API
//! - [`parse_trailing_number`]: Extract the trailing card number from a filename
//! - [`jpeg_stem`]: Strip a `.jpg`/`.jpeg` extension, `None` for other files
//!
//! # Parsing Rule
//! The card number is the trailing run of ASCII digits immediately before the
//! extension, e.g. `EndlessTreasure_219.jpg` -> 219. Only `.jpg` and `.jpeg`
//! files are considered (ASCII case-insensitive). Files without a trailing
//! number are ignored for numeric indexing, except for the slot-1 alias
//! resolved by the indexer.

/// Returns the base name without its extension for `.jpg`/`.jpeg` files,
/// `None` for any other file name.
pub fn jpeg_stem(file_name: &str) -> Option<&str> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
        Some(stem)
    } else {
        None
    }
}

/// Extracts the trailing integer run before the extension.
///
/// Returns `None` when the file is not a JPEG, has no trailing digits, or the
/// digit run does not fit in a `u32` (pathological names like 30 nines).
pub fn parse_trailing_number(file_name: &str) -> Option<u32> {
    let stem = jpeg_stem(file_name)?;
    let digit_len = stem
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if digit_len == 0 {
        return None;
    }
    stem[stem.len() - digit_len..].parse().ok()
}
