//! Application Layer
//!
//! Use cases orchestrating the domain: the capability-gated mutation
//! handlers and report assembly. Presentation (CLI) talks to this layer
//! only.

pub mod ledger_service;
pub mod report;

pub use ledger_service::{ApplyOutcome, LedgerService, SettleOutcome};
pub use report::{build_report, work_summary, ContractReport};
