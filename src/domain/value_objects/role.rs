//! Role value object - the two contracting parties
//!
//! - `Employer`: the contracting party; approves payments, sets project terms
//! - `Contractor`: the executing party; submits logs, material needs, payroll

use serde::{Deserialize, Serialize};

/// Party role. Gates the action surface but carries no session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Employer,
    Contractor,
}

impl Role {
    pub fn is_employer(&self) -> bool {
        matches!(self, Role::Employer)
    }

    pub fn is_contractor(&self) -> bool {
        matches!(self, Role::Contractor)
    }

    /// Localized label matching the original dashboard badges
    pub fn label(&self) -> &'static str {
        match self {
            Role::Employer => "Contratante",
            Role::Contractor => "Empreiteiro",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Employer => write!(f, "EMPLOYER"),
            Role::Contractor => write!(f, "CONTRACTOR"),
        }
    }
}
