//! Domain Layer
//!
//! The core of Ferrypay - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Ledger, Payment, PayrollRequest, ...)
//! - `value_objects/` - Immutable value types (Money, Role, EntityId)
//! - `services/` - Stateless logic (derivations, capability table, auth)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Derivations are recomputed from current state, never stored
//! 3. **Ports & Adapters** - Persistence, ids, time, and text generation go through traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
