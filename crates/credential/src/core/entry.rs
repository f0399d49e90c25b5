//! Credential entry model
//!
//! An [`AuthEntry`] is identified externally by its *display name*: the
//! trimmed file name when there is one, otherwise the trimmed ID. File-backed
//! credentials are the entries whose display name ends in
//! [`CREDENTIAL_FILE_SUFFIX`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Suffix of credential files, compared case-insensitively
pub const CREDENTIAL_FILE_SUFFIX: &str = ".json";

/// Attribute key holding the decimal priority
pub const PRIORITY_ATTRIBUTE: &str = "priority";

/// One authentication credential known to the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthEntry {
    /// Opaque identifier assigned at registration; never reused
    pub id: String,

    /// File name for file-backed credentials, empty for inline ones
    #[serde(default)]
    pub file_name: String,

    /// Auxiliary string metadata, including the optional `"priority"` key
    #[serde(default)]
    pub attributes: HashMap<String, String>,

    /// When the entry was last modified
    pub updated_at: DateTime<Utc>,
}

impl AuthEntry {
    /// Create an entry with no file name and no attributes
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file_name: String::new(),
            attributes: HashMap::new(),
            updated_at: Utc::now(),
        }
    }

    /// Set the file name
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Set an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Name used to identify the entry externally
    ///
    /// ```
    /// use authgate_credential::AuthEntry;
    ///
    /// let file = AuthEntry::new("a1").with_file_name(" acct1.json ");
    /// assert_eq!(file.display_name(), "acct1.json");
    ///
    /// let inline = AuthEntry::new("claude:apikey:xyz");
    /// assert_eq!(inline.display_name(), "claude:apikey:xyz");
    /// ```
    pub fn display_name(&self) -> &str {
        let file_name = self.file_name.trim();
        if file_name.is_empty() {
            self.id.trim()
        } else {
            file_name
        }
    }

    /// Whether the entry is backed by a credential file
    pub fn is_file_backed(&self) -> bool {
        has_credential_suffix(self.display_name())
    }

    /// Whether `name` refers to this entry, by display name or by ID
    ///
    /// `name` is expected to be trimmed already.
    pub fn matches_name(&self, name: &str) -> bool {
        self.display_name() == name || self.id.trim() == name
    }

    /// Raw priority attribute, if present
    pub fn priority_attribute(&self) -> Option<&str> {
        self.attributes.get(PRIORITY_ATTRIBUTE).map(String::as_str)
    }
}

/// Whether `name` ends with the credential file suffix (case-insensitive)
pub fn has_credential_suffix(name: &str) -> bool {
    name.len() >= CREDENTIAL_FILE_SUFFIX.len()
        && name.is_char_boundary(name.len() - CREDENTIAL_FILE_SUFFIX.len())
        && name[name.len() - CREDENTIAL_FILE_SUFFIX.len()..].eq_ignore_ascii_case(CREDENTIAL_FILE_SUFFIX)
}
