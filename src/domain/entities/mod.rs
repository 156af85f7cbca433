//! Core domain entities
//!
//! The `Ledger` aggregate owns the project singleton and the four
//! collections; the other types are its members plus the fixed `User`
//! records.

mod ledger;
mod material_request;
mod payment;
mod payroll_request;
mod project;
mod user;
mod work_log;

pub use ledger::Ledger;
pub use material_request::{MaterialRequest, MaterialStatus, Urgency};
pub use payment::{Payment, PaymentStatus};
pub use payroll_request::{PayrollRequest, PayrollStatus};
pub use project::{Project, ProjectPatch};
pub use user::User;
pub use work_log::WorkLog;
