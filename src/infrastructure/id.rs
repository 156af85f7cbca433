//! Identifier generation adapters

use uuid::Uuid;

use crate::domain::ports::IdGenerator;
use crate::domain::value_objects::EntityId;

/// Production generator: random v4 UUIDs, unique across runs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> EntityId {
        EntityId::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic generator for tests: `id-1`, `id-2`, ...
#[derive(Debug, Default, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> EntityId {
        self.next += 1;
        EntityId::new(format!("id-{}", self.next))
    }
}
