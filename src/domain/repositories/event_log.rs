//! Repository trait for the append-only event log.

use crate::domain::entities::{AccessEvent, CreationEvent, NewAccessEvent, NewCreationEvent};
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only store of access and creation events, keyed by short code.
///
/// Events are never mutated. Histories are returned newest-first. Deletion
/// happens only in bulk, by code, when the parent record is removed.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgEventLog`] - PostgreSQL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventLog: Send + Sync {
    /// Appends one access event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn append_access(&self, event: NewAccessEvent) -> Result<(), AppError>;

    /// Appends one creation event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn append_creation(&self, event: NewCreationEvent) -> Result<(), AppError>;

    /// Returns all access events for a code, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn access_history(&self, code: &str) -> Result<Vec<AccessEvent>, AppError>;

    /// Returns all creation events across all codes, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn creation_history(&self) -> Result<Vec<CreationEvent>, AppError>;

    /// Removes all events (both kinds) recorded for a code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_for_code(&self, code: &str) -> Result<(), AppError>;
}
