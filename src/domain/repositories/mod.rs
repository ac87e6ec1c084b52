//! Repository trait definitions for the domain layer.
//!
//! Traits define the contracts for the two external collaborators:
//!
//! - [`RecordRepository`] - relational store of short-code mappings
//! - [`EventLog`] - append-only store of access/creation events
//!
//! Concrete implementations live in `crate::infrastructure::persistence`;
//! mock implementations are auto-generated via `mockall` for testing.

pub mod event_log;
pub mod record_repository;

pub use event_log::EventLog;
pub use record_repository::RecordRepository;

#[cfg(test)]
pub use event_log::MockEventLog;
#[cfg(test)]
pub use record_repository::MockRecordRepository;
