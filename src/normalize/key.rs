//! Key canonicalization.

/// Lower-case `key` and drop everything that is not an ASCII lowercase
/// letter or digit.
///
/// `"Foo Bar"`, `"foo_bar"` and `"FOO-BAR"` all become `"foobar"`. Distinct
/// keys can collide.
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}
