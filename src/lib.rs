//! Ferrypay - construction contract ledger
//!
//! Ferrypay tracks a single shipyard construction contract end to end:
//! payments, material requests, the field diary, and weekly payroll
//! claims, with financial progress derived from the ledger on every read.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{ApplyOutcome, LedgerService, SettleOutcome};
pub use config::Config;
pub use domain::entities::{
    Ledger, MaterialRequest, MaterialStatus, Payment, PaymentStatus, PayrollRequest,
    PayrollStatus, Project, ProjectPatch, Urgency, User, WorkLog,
};
pub use domain::value_objects::{EntityId, Money, Role};
pub use error::{FerrypayError, FerrypayResult};
