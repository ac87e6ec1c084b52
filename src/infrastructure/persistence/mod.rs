//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements.
//!
//! - [`PgRecordRepository`] - short-code record store
//! - [`PgEventLog`] - append-only access/creation event log

pub mod pg_event_log;
pub mod pg_record_repository;

pub use pg_event_log::PgEventLog;
pub use pg_record_repository::PgRecordRepository;
