//! Tri-state priority writes

use std::collections::HashMap;

use crate::core::PRIORITY_ATTRIBUTE;

/// A priority write: clear back to the default, or store an explicit value
///
/// Clearing removes the attribute entirely, so the entry reads as the
/// default again. `Set(0)` stores `"0"` explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityUpdate {
    /// Remove the priority
    Clear,
    /// Store this priority
    Set(i64),
}

impl PriorityUpdate {
    /// The value being written, if any
    pub fn value(self) -> Option<i64> {
        match self {
            Self::Clear => None,
            Self::Set(priority) => Some(priority),
        }
    }

    /// Apply to an attribute map
    pub(crate) fn apply(self, attributes: &mut HashMap<String, String>) {
        match self {
            Self::Clear => {
                attributes.remove(PRIORITY_ATTRIBUTE);
            }
            Self::Set(priority) => {
                attributes.insert(PRIORITY_ATTRIBUTE.to_string(), priority.to_string());
            }
        }
    }
}

impl From<Option<i64>> for PriorityUpdate {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Self::Clear, Self::Set)
    }
}

impl From<i64> for PriorityUpdate {
    fn from(value: i64) -> Self {
        Self::Set(value)
    }
}
