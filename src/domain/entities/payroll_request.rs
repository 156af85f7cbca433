//! PayrollRequest entity
//!
//! Contractor-submitted weekly labor-cost claim. The employer approves and
//! then pays; paying settles the claim into the payment ledger. A PAID
//! request is a financial record: immutable and undeletable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EntityId, Money};

/// Payroll claim lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayrollStatus {
    Pending,
    Approved,
    Paid,
}

impl PayrollStatus {
    /// Whether `next` is the single legal forward step from `self`
    pub fn can_advance_to(self, next: PayrollStatus) -> bool {
        matches!(
            (self, next),
            (PayrollStatus::Pending, PayrollStatus::Approved)
                | (PayrollStatus::Approved, PayrollStatus::Paid)
        )
    }
}

impl std::fmt::Display for PayrollStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayrollStatus::Pending => write!(f, "PENDING"),
            PayrollStatus::Approved => write!(f, "APPROVED"),
            PayrollStatus::Paid => write!(f, "PAID"),
        }
    }
}

/// A weekly payroll claim
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollRequest {
    id: EntityId,
    week_ending: NaiveDate,
    amount: Money,
    details: String,
    status: PayrollStatus,
}

impl PayrollRequest {
    pub fn new(
        id: EntityId,
        week_ending: NaiveDate,
        amount: Money,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id,
            week_ending,
            amount,
            details: details.into(),
            status: PayrollStatus::Pending,
        }
    }

    /// Rehydrate from a persisted snapshot (status already progressed)
    pub fn from_parts(
        id: EntityId,
        week_ending: NaiveDate,
        amount: Money,
        details: String,
        status: PayrollStatus,
    ) -> Self {
        Self {
            id,
            week_ending,
            amount,
            details,
            status,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn week_ending(&self) -> NaiveDate {
        self.week_ending
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn status(&self) -> PayrollStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == PayrollStatus::Pending
    }

    pub fn is_paid(&self) -> bool {
        self.status == PayrollStatus::Paid
    }

    /// Description for the payment synthesized when this claim is settled
    pub fn settlement_description(&self) -> String {
        format!(
            "Folha Semanal: {} (Ref: {})",
            self.details,
            self.week_ending.format("%d/%m/%Y")
        )
    }

    pub(crate) fn advance_status(&mut self, next: PayrollStatus) -> bool {
        if self.status.can_advance_to(next) {
            self.status = next;
            true
        } else {
            false
        }
    }
}
