//! Error types for Ferrypay
//!
//! Uses `thiserror` for library errors. Validation failures reject the
//! submission before any entity is created; lookup misses are not errors
//! at all (they surface as no-op outcomes, never through this type).

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ports::ledger_repository::RepositoryError;
use crate::domain::services::capabilities::Action;
use crate::domain::value_objects::{MoneyError, Role};

/// Result type alias for Ferrypay operations
pub type FerrypayResult<T> = Result<T, FerrypayError>;

/// Main error type for Ferrypay operations
#[derive(Error, Debug)]
pub enum FerrypayError {
    /// Required field was empty on entity creation
    #[error("required field '{field}' is empty")]
    EmptyField { field: &'static str },

    /// Monetary amount failed validation
    #[error("invalid amount: {0}")]
    Money(#[from] MoneyError),

    /// Calendar date could not be parsed
    #[error("invalid date '{value}' - expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Actor's role does not permit the requested action
    #[error("role '{role}' is not allowed to {action}")]
    Forbidden { action: Action, role: Role },

    /// Username/password pair did not match a known user
    #[error("credenciais inválidas - verifique os dados de acesso")]
    InvalidCredentials,

    /// Configuration file could not be parsed
    #[error("invalid config {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Ledger persistence failure
    #[error("ledger storage error: {0}")]
    Repository(#[from] RepositoryError),

    /// IO error (photo attachments, config)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
