//! Redirect resolution and access accounting.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::NewAccessEvent;
use crate::domain::repositories::{EventLog, RecordRepository};
use crate::error::AppError;
use crate::utils::client_meta::ClientMeta;

/// The hot path: resolves a short code, increments its access counter, and
/// appends an access event.
///
/// Correctness under concurrency rests entirely on the record store: the
/// counter update is a single atomic statement, so N parallel redirects to
/// one code produce exactly N increments and N log entries. No in-process
/// locks are held.
///
/// The counter increment and the log append are two steps against two
/// collaborators and are not atomic with each other. If the increment fails,
/// the redirect fails. If the log append fails after the increment succeeded,
/// the failure is logged in server diagnostics and the redirect still
/// proceeds; no claim of cross-store atomicity is made.
pub struct RedirectService<R: RecordRepository, E: EventLog> {
    records: Arc<R>,
    events: Arc<E>,
}

impl<R: RecordRepository, E: EventLog> RedirectService<R, E> {
    /// Creates a new redirect service.
    pub fn new(records: Arc<R>, events: Arc<E>) -> Self {
        Self { records, events }
    }

    /// Resolves a short code to its destination URL, accounting the access.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] (echoing the requested code, with no
    /// side effects) for unknown codes, and [`AppError::Internal`] when the
    /// counter increment fails.
    pub async fn resolve(&self, code: &str, client: ClientMeta) -> Result<String, AppError> {
        let record = self.records.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found(
                "URL not found",
                json!({
                    "message": format!(
                        "The short URL \"/{code}\" does not exist or has been removed."
                    ),
                    "short_code": code,
                }),
            )
        })?;

        self.records.increment_access(code).await?;

        let event = NewAccessEvent {
            short_code: record.short_code.clone(),
            client_ip: client.ip,
            user_agent: client.user_agent,
            accessed_at: Utc::now(),
        };

        if let Err(e) = self.events.append_access(event).await {
            tracing::error!(
                short_code = %record.short_code,
                error = ?e,
                "access-log append failed after counter increment"
            );
        }

        Ok(record.destination_url)
    }
}
