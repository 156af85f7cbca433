//! Hardcoded-credential authentication
//!
//! Two fixed identity/credential pairs map to two fixed users. This is an
//! explicit placeholder, not a security boundary: there is no session,
//! token, or hashing model.

use crate::domain::entities::User;
use crate::domain::value_objects::{EntityId, Role};

/// Check a username/password pair against the two known users
pub fn authenticate(username: &str, password: &str) -> Option<User> {
    match (username, password) {
        ("admin", "admin") => Some(User::new(
            EntityId::new("employer-1"),
            "Dr. João Naval",
            Role::Employer,
            "admin",
        )),
        ("empreiteiro", "obra2024") => Some(User::new(
            EntityId::new("contractor-1"),
            "Mestre Carlos Estaleiro",
            Role::Contractor,
            "empreiteiro",
        )),
        _ => None,
    }
}
