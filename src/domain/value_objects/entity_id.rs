//! EntityId value object - opaque unique identifier
//!
//! Ids are opaque strings minted by an injectable generator (see
//! `domain::ports::id_generator`), replacing the wall-clock-derived ids of
//! earlier revisions so tests stay deterministic.

use serde::{Deserialize, Serialize};

/// Opaque identifier, unique within its collection for the store's lifetime
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
