//! Infrastructure Layer
//!
//! Concrete adapters for the domain ports: JSON file persistence, system
//! and fixed clocks, id generation, and the offline summarizer.

pub mod clock;
pub mod id;
pub mod repositories;
pub mod summarizer;

pub use clock::SystemClock;
pub use id::UuidIdGenerator;
pub use repositories::JsonLedgerRepository;
pub use summarizer::OfflineSummarizer;
