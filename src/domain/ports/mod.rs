//! Ports - trait seams between the domain core and infrastructure

pub mod clock;
pub mod id_generator;
pub mod ledger_repository;
pub mod summarizer;

pub use clock::Clock;
pub use id_generator::IdGenerator;
pub use ledger_repository::{LedgerRepository, RepositoryError, RepositoryResult};
pub use summarizer::{ReportData, Summarizer, NO_LOGS_FALLBACK, REPORT_FALLBACK, SUMMARY_FALLBACK};
