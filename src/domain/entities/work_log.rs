//! WorkLog entity
//!
//! Timestamped field-progress entry, immutable once created. Photos are
//! base64-encoded blobs whose insertion order is significant.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::EntityId;

/// A diary entry from the construction site
#[derive(Debug, Clone, PartialEq)]
pub struct WorkLog {
    id: EntityId,
    content: String,
    date: DateTime<Utc>,
    author_id: EntityId,
    photos: Vec<String>,
}

impl WorkLog {
    pub fn new(
        id: EntityId,
        content: impl Into<String>,
        date: DateTime<Utc>,
        author_id: EntityId,
        photos: Vec<String>,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            date,
            author_id,
            photos,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn author_id(&self) -> &EntityId {
        &self.author_id
    }

    /// Embedded photos, in the order they were attached
    pub fn photos(&self) -> &[String] {
        &self.photos
    }
}
