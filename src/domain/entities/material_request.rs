//! MaterialRequest entity
//!
//! Contractor-submitted supply need. Status is a strictly forward chain
//! PENDING -> ORDERED -> RECEIVED: the employer marks a request ordered,
//! the contractor confirms receipt. No deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::EntityId;

/// Urgency declared by the contractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::Low => write!(f, "LOW"),
            Urgency::Medium => write!(f, "MEDIUM"),
            Urgency::High => write!(f, "HIGH"),
        }
    }
}

/// Material request lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaterialStatus {
    Pending,
    Ordered,
    Received,
}

impl MaterialStatus {
    /// Whether `next` is the single legal forward step from `self`
    pub fn can_advance_to(self, next: MaterialStatus) -> bool {
        matches!(
            (self, next),
            (MaterialStatus::Pending, MaterialStatus::Ordered)
                | (MaterialStatus::Ordered, MaterialStatus::Received)
        )
    }
}

impl std::fmt::Display for MaterialStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialStatus::Pending => write!(f, "PENDING"),
            MaterialStatus::Ordered => write!(f, "ORDERED"),
            MaterialStatus::Received => write!(f, "RECEIVED"),
        }
    }
}

/// A supply request raised from the field
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRequest {
    id: EntityId,
    item_name: String,
    /// Free-text magnitude ("200 kg", "15 chapas")
    quantity: String,
    urgency: Urgency,
    status: MaterialStatus,
    request_date: DateTime<Utc>,
}

impl MaterialRequest {
    pub fn new(
        id: EntityId,
        item_name: impl Into<String>,
        quantity: impl Into<String>,
        urgency: Urgency,
        request_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            item_name: item_name.into(),
            quantity: quantity.into(),
            urgency,
            status: MaterialStatus::Pending,
            request_date,
        }
    }

    /// Rehydrate from a persisted snapshot (status already progressed)
    pub fn from_parts(
        id: EntityId,
        item_name: String,
        quantity: String,
        urgency: Urgency,
        status: MaterialStatus,
        request_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            item_name,
            quantity,
            urgency,
            status,
            request_date,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn urgency(&self) -> Urgency {
        self.urgency
    }

    pub fn status(&self) -> MaterialStatus {
        self.status
    }

    pub fn request_date(&self) -> DateTime<Utc> {
        self.request_date
    }

    pub fn is_pending(&self) -> bool {
        self.status == MaterialStatus::Pending
    }

    pub(crate) fn advance_status(&mut self, next: MaterialStatus) -> bool {
        if self.status.can_advance_to(next) {
            self.status = next;
            true
        } else {
            false
        }
    }
}
