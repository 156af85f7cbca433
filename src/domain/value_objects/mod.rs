//! Value objects - immutable domain primitives

mod entity_id;
mod money;
mod role;

pub use entity_id::EntityId;
pub use money::{Money, MoneyError};
pub use role::Role;
