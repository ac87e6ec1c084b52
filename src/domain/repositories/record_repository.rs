//! Repository trait for the short-code record store.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Store of short-code to destination-URL mappings.
///
/// Short-code uniqueness is enforced at the store level: an insert of a
/// duplicate code must fail atomically, never race. Counter updates are a
/// single store-level statement so concurrent redirects never lose updates.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRecordRepository`] - PostgreSQL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Inserts a new mapping with `access_count = 0` and `created_at = now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Atomically increments the access counter for a code by 1.
    ///
    /// Executed as a single `UPDATE ... SET access_count = access_count + 1`
    /// statement; never a read-modify-write round trip.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_access(&self, code: &str) -> Result<(), AppError>;

    /// Deletes the record for a code.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if the code
    /// was unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError>;

    /// Lists all records ordered by `created_at` descending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError>;
}
