//! The gateway configuration document
//!
//! Besides server settings, the document carries the `auth-priority` mirror.
//! The mirror is only ever changed incrementally through
//! [`GatewayConfig::set_auth_priority`] and [`GatewayConfig::clear_auth_priority`];
//! it is never rebuilt from the credential store, so credentials renamed or
//! removed elsewhere can leave stale keys behind until the next write.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default management listener port
pub const DEFAULT_PORT: u16 = 8317;

/// Gateway configuration document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GatewayConfig {
    /// Listen address for the management API
    pub host: String,

    /// Listen port for the management API
    pub port: u16,

    /// Directory holding the JSON credential files
    pub auth_dir: PathBuf,

    /// Logger settings
    pub logging: authgate_log::Config,

    /// Priority mirror: display name to priority
    ///
    /// `None` and an empty map mean the same thing to readers, but only
    /// `None` is ever stored so the key is omitted from saved output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_priority: Option<BTreeMap<String, i64>>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            auth_dir: PathBuf::from("auths"),
            logging: authgate_log::Config::default(),
            auth_priority: None,
        }
    }
}

impl GatewayConfig {
    /// Mirrored priority for a display name
    pub fn auth_priority(&self, name: &str) -> Option<i64> {
        self.auth_priority
            .as_ref()
            .and_then(|mirror| mirror.get(name).copied())
    }

    /// Record a priority in the mirror, creating the mirror if needed
    pub fn set_auth_priority(&mut self, name: impl Into<String>, priority: i64) {
        self.auth_priority
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), priority);
    }

    /// Remove a priority from the mirror
    ///
    /// Returns the removed value. Drops the mirror to `None` once it is empty.
    pub fn clear_auth_priority(&mut self, name: &str) -> Option<i64> {
        let mirror = self.auth_priority.as_mut()?;
        let removed = mirror.remove(name);
        if mirror.is_empty() {
            self.auth_priority = None;
        }
        removed
    }

    /// Normalize a freshly loaded document
    ///
    /// An explicit empty `auth-priority` mapping is folded into `None`.
    pub(crate) fn normalize(mut self) -> Self {
        if self.auth_priority.as_ref().is_some_and(BTreeMap::is_empty) {
            self.auth_priority = None;
        }
        self
    }
}
