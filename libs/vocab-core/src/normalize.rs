//! Canonical text forms used for answer comparison.

/// Trim, lower-case and collapse internal whitespace runs to a single space.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Split a comma-separated list of alternates into normalized variants.
///
/// Empty parts are dropped, so `""` and `" , ,"` both yield an empty list.
pub fn parse_variants(text: &str) -> Vec<String> {
    text.split(',')
        .map(normalize)
        .filter(|v| !v.is_empty())
        .collect()
}

/// Variants for `text`, falling back to the whole normalized text when the
/// split yields nothing.
pub fn variants_or_fallback(text: &str) -> Vec<String> {
    let variants = parse_variants(text);
    if variants.is_empty() {
        vec![normalize(text)]
    } else {
        variants
    }
}
