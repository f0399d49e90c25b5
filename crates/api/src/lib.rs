//! Authgate API - management endpoints for credential priorities
//!
//! | Method | Path | Body | Response |
//! |---|---|---|---|
//! | `GET` | `/v0/management/auth-priority` | - | `{"auth-priority": {"name.json": 5}}` |
//! | `PATCH` | `/v0/management/auth-priority` | `{"name": "name.json", "priority": 5}` | `{"status": "ok"}` |
//!
//! A `null` or absent `priority` clears the value back to the default.
//! Failures are reported as `{"error": "<message>"}`.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::{AUTH_PRIORITY_PATH, router};
pub use state::AppState;
