//! # Text Processing Utilities
//!
//! String comparison and serialization helpers shared by the form components.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compares two strings the way a user-facing, locale-aware sort would.
///
/// Strings are compared level by level. The base letters come first, with
/// case and diacritics ignored, so `"advanced"` sorts before
/// `"Uncategorized"` and `"Éditions"` lands between `"Alignment"` and
/// `"Filters"`. Accents then decide (unaccented first), then case (lowercase
/// first), and the raw code point order breaks any remaining tie so the
/// ordering stays total.
///
/// # Example
/// ```rust
/// use composer_util::locale_compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(locale_compare("advanced", "Uncategorized"), Ordering::Less);
/// assert_eq!(locale_compare("Éditions", "Filters"), Ordering::Less);
/// assert_eq!(locale_compare("a", "A"), Ordering::Less);
/// ```
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    base_letters(left)
        .cmp(base_letters(right))
        .then_with(|| folded(left).cmp(folded(right)))
        .then_with(|| case_order(left, right))
        .then_with(|| left.cmp(right))
}

/// Lowercased canonical decomposition with combining marks removed.
fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    folded(text).filter(|ch| !is_combining_mark(*ch))
}

/// Lowercased canonical decomposition, marks kept.
fn folded(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().flat_map(char::to_lowercase)
}

fn case_order(left: &str, right: &str) -> Ordering {
    for (left_char, right_char) in left.chars().zip(right.chars()) {
        if left_char == right_char {
            continue;
        }
        match (left_char.is_lowercase(), right_char.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

/// Serializes a list of strings into the comparison key used for change
/// deduplication: the elements joined with `,`.
///
/// Two lists with the same key are treated as the same value, which also
/// means `["a,b"]` and `["a", "b"]` collide.
pub fn list_key<S: AsRef<str>>(items: &[S]) -> String {
    items.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}
