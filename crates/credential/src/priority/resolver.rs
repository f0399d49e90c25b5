//! Name resolution
//!
//! A caller may name an entry by its display name or by its opaque ID. The
//! first entry in enumeration order that matches either wins; the store keeps
//! display names unique so at most one file-backed entry can match.

use crate::core::AuthEntry;

/// Identity of a resolved entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    /// Entry ID, used for the fresh store lookup
    pub id: String,
    /// Display name, used as the config mirror key
    pub display_name: String,
}

/// Find the entry `name` refers to
///
/// `name` is trimmed before matching. Entries with a blank ID are skipped.
pub fn resolve<'a>(
    entries: impl IntoIterator<Item = &'a AuthEntry>,
    name: &str,
) -> Option<ResolvedEntry> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    entries
        .into_iter()
        .filter(|entry| !entry.id.trim().is_empty())
        .find(|entry| entry.matches_name(name))
        .map(|entry| ResolvedEntry {
            id: entry.id.clone(),
            display_name: entry.display_name().to_string(),
        })
}
