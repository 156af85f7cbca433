//! User entity
//!
//! Two fixed users exist; there is no registration, session, or token
//! model. See `domain::services::auth` for the credential check.

use crate::domain::value_objects::{EntityId, Role};

/// An identity that performs actions against the ledger
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: EntityId,
    name: String,
    role: Role,
    username: String,
}

impl User {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        role: Role,
        username: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            username: username.into(),
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
