//! Payment entity
//!
//! Created manually by the employer (status PENDING) or synthesized when a
//! payroll request is settled (status COMPLETED). Never deleted; the only
//! transition is PENDING -> COMPLETED.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EntityId, Money};

/// Payment lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
}

impl PaymentStatus {
    /// Whether `next` is a legal forward step from `self`
    pub fn can_advance_to(self, next: PaymentStatus) -> bool {
        matches!(
            (self, next),
            (PaymentStatus::Pending, PaymentStatus::Completed)
        )
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "PENDING"),
            PaymentStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

/// A ledger payment entry
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    id: EntityId,
    amount: Money,
    date: DateTime<Utc>,
    description: String,
    status: PaymentStatus,
}

impl Payment {
    pub fn new(
        id: EntityId,
        amount: Money,
        date: DateTime<Utc>,
        description: impl Into<String>,
        status: PaymentStatus,
    ) -> Self {
        Self {
            id,
            amount,
            date,
            description: description.into(),
            status,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == PaymentStatus::Completed
    }

    /// Advance the status if the transition is a legal forward step.
    /// Returns whether anything changed.
    pub(crate) fn advance_status(&mut self, next: PaymentStatus) -> bool {
        if self.status.can_advance_to(next) {
            self.status = next;
            true
        } else {
            false
        }
    }
}
