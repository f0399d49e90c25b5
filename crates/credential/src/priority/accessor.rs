//! Priority reads

use std::collections::BTreeMap;

use crate::core::AuthEntry;

/// Parse a stored priority value
///
/// Surrounding whitespace is ignored; empty or non-integer text yields `None`.
pub fn parse_priority(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}

/// The entry's explicit priority
///
/// `None` when the attribute is absent or unparseable; `Some(0)` when zero
/// was stored explicitly.
pub fn explicit_priority(entry: &AuthEntry) -> Option<i64> {
    entry.priority_attribute().and_then(parse_priority)
}

/// The entry's effective priority, defaulting to 0
pub fn priority_of(entry: &AuthEntry) -> i64 {
    explicit_priority(entry).unwrap_or(0)
}

/// Effective priorities of file-backed entries, keyed by display name
///
/// Inline credentials (API keys and the like) are left out even when they
/// carry a priority attribute.
pub fn collect_priorities<'a>(
    entries: impl IntoIterator<Item = &'a AuthEntry>,
) -> BTreeMap<String, i64> {
    entries
        .into_iter()
        .filter(|entry| !entry.display_name().is_empty() && entry.is_file_backed())
        .map(|entry| (entry.display_name().to_string(), priority_of(entry)))
        .collect()
}
