//! Repository adapters

pub mod json_ledger;

pub use json_ledger::JsonLedgerRepository;
