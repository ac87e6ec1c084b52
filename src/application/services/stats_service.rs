//! Listing, counters, and history queries.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{AccessEvent, CreationEvent, UrlRecord};
use crate::domain::repositories::{EventLog, RecordRepository};
use crate::error::AppError;

/// Read-side service over the record store and the event log.
pub struct StatsService<R: RecordRepository, E: EventLog> {
    records: Arc<R>,
    events: Arc<E>,
}

impl<R: RecordRepository, E: EventLog> StatsService<R, E> {
    /// Creates a new stats service.
    pub fn new(records: Arc<R>, events: Arc<E>) -> Self {
        Self { records, events }
    }

    /// Lists all registered records, newest first.
    pub async fn list_records(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.records.list_all().await
    }

    /// Returns the record (including its access counter) for a code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes.
    pub async fn record_stats(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.records.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found("Short URL not found", json!({ "short_code": code }))
        })
    }

    /// Returns the access history for a code, newest first.
    ///
    /// A deleted or never-created code is a 404, never an empty history.
    pub async fn access_history(&self, code: &str) -> Result<Vec<AccessEvent>, AppError> {
        if self.records.find_by_code(code).await?.is_none() {
            return Err(AppError::not_found(
                "Short URL not found",
                json!({ "short_code": code }),
            ));
        }

        self.events.access_history(code).await
    }

    /// Returns all creation events, newest first.
    pub async fn creation_history(&self) -> Result<Vec<CreationEvent>, AppError> {
        self.events.creation_history().await
    }
}
