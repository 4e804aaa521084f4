//! Title and description cleanup shared by every headline source.

use scraper::Html;

/// Longest description kept before clipping, in characters.
pub const DESCRIPTION_LIMIT: usize = 300;

/// Marker appended to a clipped description.
pub const ELLIPSIS: char = '…';

/// Strips tags and decodes entities, then collapses runs of whitespace to one space.
///
/// The text is parsed as an HTML fragment, so named and numeric entities are decoded
/// once and markup inside attribute values never leaks into the result. Text nodes
/// are joined with a space so `a<br>b` does not glue words together.
pub fn clean_text(s: &str) -> String {
    let fragment = Html::parse_fragment(s);
    let joined = fragment.root_element().text().collect::<Vec<_>>().join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cleans `s` and clips it to `limit` characters, appending [`ELLIPSIS`] when anything was cut.
pub fn clip(s: &str, limit: usize) -> String {
    let cleaned = clean_text(s);
    if cleaned.chars().count() <= limit {
        return cleaned;
    }
    let mut out: String = cleaned.chars().take(limit).collect();
    out.push(ELLIPSIS);
    out
}
