//! Shared handler state

use std::sync::Arc;

use authgate_credential::PriorityRegistry;

/// State shared by all management handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Priority registry behind the auth-priority endpoints
    pub registry: Arc<PriorityRegistry>,
}

impl AppState {
    /// Wrap a registry
    pub fn new(registry: PriorityRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}
