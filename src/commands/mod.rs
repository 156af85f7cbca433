//! CLI command handlers
//!
//! One module per subcommand group. Handlers receive an authenticated
//! session and print either human-readable text or JSON events.

pub mod login;
pub mod material;
pub mod payment;
pub mod payroll;
pub mod project;
pub mod report;
pub mod status;
pub mod worklog;

mod session;

pub use session::Session;

use ferrypay::error::FerrypayError;

/// Parse a YYYY-MM-DD argument
pub(crate) fn parse_date(value: &str) -> Result<chrono::NaiveDate, FerrypayError> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        FerrypayError::InvalidDate {
            value: value.to_string(),
        }
    })
}
