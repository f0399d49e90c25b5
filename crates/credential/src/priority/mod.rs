//! Auth priority registry
//!
//! Priorities live in two places:
//!
//! - the `"priority"` attribute of each [`crate::AuthEntry`] in the credential
//!   store, which is the source of truth;
//! - the `auth-priority` mirror in the gateway configuration document, kept
//!   for consumers that read the config file directly.
//!
//! ```text
//!   list_priorities()                set_priority(name, update)
//!         │                                   │
//!         ▼                                   ▼
//!   accessor::collect_priorities      resolver::resolve ──► store.get(id)
//!         ▲                                   │
//!         │                                   ▼
//!   store.list() ◄──────────────── update.apply ──► store.update(entry)
//!                                             │
//!                                             ▼
//!                          config mirror (display name) ──► persist()
//! ```

pub mod accessor;
mod error;
mod registry;
pub mod resolver;
mod update;

pub use accessor::{collect_priorities, explicit_priority, parse_priority, priority_of};
pub use error::{Collaborator, PriorityError, PriorityResult};
pub use registry::{PriorityRegistry, PriorityRegistryBuilder};
pub use resolver::{ResolvedEntry, resolve};
pub use update::PriorityUpdate;
