//! IdGenerator port - injectable id minting
//!
//! Replaces the wall-clock-derived ids of earlier revisions so tests stay
//! deterministic. Implementations must never repeat an id within a store's
//! lifetime.

use crate::domain::value_objects::EntityId;

/// Mints unique entity ids
pub trait IdGenerator {
    fn next_id(&mut self) -> EntityId;
}
