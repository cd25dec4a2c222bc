//! Human-readable title derivation from filename stems.

/// Acronym spellings that plain title-casing gets wrong.
const ACRONYM_CORRECTIONS: [(&str, &str); 2] = [("P2p", "P2P"), ("Api", "API")];

/// Derive a display title from a snake/hyphen-cased filename stem.
///
/// Splits on `-` and `_`, title-cases each word, then applies the acronym
/// corrections as plain string replacements.
///
/// # Example
///
/// ```
/// use dg_routes::title_from_stem;
///
/// assert_eq!(title_from_stem("p2p-spec"), "P2P Spec");
/// assert_eq!(title_from_stem("api_reference"), "API Reference");
/// ```
#[must_use]
pub fn title_from_stem(stem: &str) -> String {
    let mut title = stem
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    for (wrong, correct) in ACRONYM_CORRECTIONS {
        title = title.replace(wrong, correct);
    }

    title
}
