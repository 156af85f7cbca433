//! Domain services - stateless logic over entities

pub mod auth;
pub mod capabilities;
pub mod derivations;

pub use capabilities::Action;
pub use derivations::FinancialSummary;
