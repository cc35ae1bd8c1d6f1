//! Accent- and case-insensitive name comparison.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold a name for matching: strip diacritics, lowercase, trim.
///
/// "Côintreau " and "cointreau" fold to the same string.
pub fn normalize_name(raw: &str) -> String {
    raw.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}
