//! Project entity - the contract singleton
//!
//! Exactly one project exists per deployment. It is never deleted; edits
//! arrive as a patch applied by the employer (whole-record replacement in
//! the original UI).

use chrono::NaiveDate;

use crate::domain::value_objects::{EntityId, Money};

/// The construction contract under management
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    id: EntityId,
    title: String,
    total_value: Money,
    contractor_id: EntityId,
    start_date: NaiveDate,
    description: String,
}

impl Project {
    pub fn new(
        id: EntityId,
        title: impl Into<String>,
        total_value: Money,
        contractor_id: EntityId,
        start_date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            total_value,
            contractor_id,
            start_date,
            description: description.into(),
        }
    }

    /// Built-in default used when no snapshot exists yet
    pub fn default_contract() -> Self {
        Self::new(
            EntityId::new("1"),
            "Ferry Boat Manaus-Tabatinga II",
            Money::from(1_250_000),
            EntityId::new("contractor-1"),
            NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid built-in date"),
            "Construção de casco de balsa tipo ferry boat em aço naval.",
        )
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn total_value(&self) -> Money {
        self.total_value
    }

    pub fn contractor_id(&self) -> &EntityId {
        &self.contractor_id
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Apply an employer edit. Unset fields keep their current value.
    pub fn apply(&mut self, patch: ProjectPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(total_value) = patch.total_value {
            self.total_value = total_value;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}

/// Partial update to the project record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub total_value: Option<Money>,
    pub start_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.total_value.is_none()
            && self.start_date.is_none()
            && self.description.is_none()
    }
}
