//! LedgerRepository port - abstraction for ledger persistence
//!
//! The core never touches the disk directly; it sees a durable key-value
//! slot holding at most one snapshot. An absent snapshot is not an error -
//! the caller falls back to the built-in default ledger.

use thiserror::Error;

use crate::domain::entities::Ledger;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Ledger persistence errors
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Snapshot exists but cannot be decoded. Deliberately not swallowed:
    /// silently replacing a corrupt ledger would destroy financial records.
    #[error("ledger snapshot is malformed: {message}")]
    Malformed { message: String },

    /// Underlying storage failed
    #[error("ledger storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstract repository for the single ledger snapshot
pub trait LedgerRepository {
    /// Load the persisted snapshot, `Ok(None)` when none exists yet
    fn load(&self) -> RepositoryResult<Option<Ledger>>;

    /// Persist the full snapshot, replacing any previous one
    fn save(&self, ledger: &Ledger) -> RepositoryResult<()>;

    /// Load the snapshot or fall back to the built-in default ledger
    fn load_or_default(&self) -> RepositoryResult<Ledger> {
        Ok(self.load()?.unwrap_or_else(Ledger::with_default_project))
    }
}
