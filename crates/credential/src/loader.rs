//! Auth directory scanning
//!
//! Registers one [`AuthEntry`] per credential file found in the auth
//! directory. File contents are not read or validated here.

use std::path::Path;

use crate::core::{AuthEntry, StoreError, StoreResult, has_credential_suffix};
use crate::store::MemoryAuthStore;

/// Register every `*.json` file in `dir` with `store`
///
/// Files are registered in name order with both ID and file name set to the
/// file name. Files whose name is already taken in the store are skipped with
/// a warning. A missing directory registers nothing.
///
/// Returns the number of entries registered.
pub async fn load_auth_dir(dir: impl AsRef<Path>, store: &MemoryAuthStore) -> StoreResult<usize> {
    let dir = dir.as_ref();
    let io_error = |source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut reader = match tokio::fs::read_dir(dir).await {
        Ok(reader) => reader,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(dir = %dir.display(), "Auth directory does not exist");
            return Ok(0);
        }
        Err(e) => return Err(io_error(e)),
    };

    let mut names = Vec::new();
    while let Some(item) = reader.next_entry().await.map_err(io_error)? {
        let file_type = item.file_type().await.map_err(io_error)?;
        if !file_type.is_file() {
            continue;
        }
        let Some(name) = item.file_name().to_str().map(str::to_string) else {
            tracing::warn!(path = %item.path().display(), "Skipping non UTF-8 file name");
            continue;
        };
        if has_credential_suffix(&name) {
            names.push(name);
        }
    }
    names.sort();

    let mut registered = 0;
    for name in names {
        match store.register(AuthEntry::new(name.clone()).with_file_name(name.clone())) {
            Ok(()) => registered += 1,
            Err(e @ (StoreError::DuplicateId { .. } | StoreError::DuplicateName { .. })) => {
                tracing::warn!(file = %name, error = %e, "Skipping auth file");
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(dir = %dir.display(), registered, "Loaded auth directory");
    Ok(registered)
}
