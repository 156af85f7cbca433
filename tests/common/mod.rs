//! Shared test infrastructure.

pub mod env;
