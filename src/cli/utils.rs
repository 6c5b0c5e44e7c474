//! Shared CLI utilities.

/// Split a comma-separated list, trimming whitespace and discarding empty
/// segments.
pub fn parse_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}
