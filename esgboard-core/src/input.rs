use std::collections::HashSet;

/// Parse a comma-separated ticker list.
///
/// Entries are trimmed and uppercased; blanks are dropped, and repeats are
/// removed keeping the first occurrence.
///
/// ```
/// let t = esgboard_core::parse_ticker_list("aapl, MSFT,,tsla , aapl");
/// assert_eq!(t, vec!["AAPL", "MSFT", "TSLA"]);
/// ```
#[must_use]
pub fn parse_ticker_list(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(|t| t.trim().to_uppercase())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Normalize a free-text company name for lookups and cache keys:
/// trimmed, inner whitespace collapsed, lowercased.
#[must_use]
pub fn normalize_company(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
