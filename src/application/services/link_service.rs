//! Registration workflow and cascade delete.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{NewCreationEvent, NewUrlRecord, UrlRecord};
use crate::domain::repositories::{EventLog, RecordRepository};
use crate::error::AppError;
use crate::infrastructure::validation::{DestinationValidator, Verdict};
use crate::utils::client_meta::ClientMeta;
use crate::utils::short_code::is_valid_short_code;

/// Service for registering and deleting short-code mappings.
///
/// Registration validates input, probes the destination, inserts the record,
/// and appends a creation event. Uniqueness conflicts are not pre-checked:
/// the store's unique constraint decides atomically, and the resulting 409 is
/// the only caller-retryable error.
pub struct LinkService<R: RecordRepository, E: EventLog> {
    records: Arc<R>,
    events: Arc<E>,
    validator: Arc<dyn DestinationValidator>,
}

impl<R: RecordRepository, E: EventLog> LinkService<R, E> {
    /// Creates a new link service.
    pub fn new(records: Arc<R>, events: Arc<E>, validator: Arc<dyn DestinationValidator>) -> Self {
        Self {
            records,
            events,
            validator,
        }
    }

    /// Registers a new mapping.
    ///
    /// Both fields are trimmed first; validation and the destination probe
    /// run before any store write.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] - empty fields or invalid charset
    /// - [`AppError::DestinationRejected`] - probe veto
    /// - [`AppError::Conflict`] - short code already in use
    /// - [`AppError::Internal`] - store failure
    pub async fn register(
        &self,
        short_code: &str,
        destination_url: &str,
        client: ClientMeta,
    ) -> Result<UrlRecord, AppError> {
        let code = short_code.trim();
        let destination = destination_url.trim();

        if code.is_empty() || destination.is_empty() {
            return Err(AppError::bad_request("Fields must not be empty"));
        }

        if !is_valid_short_code(code) {
            return Err(AppError::bad_request(
                "The short code may only contain letters, digits, hyphens and underscores",
            ));
        }

        match self.validator.validate(destination).await? {
            Verdict::Accepted { detail } => {
                tracing::debug!(short_code = code, %detail, "destination accepted");
            }
            Verdict::Rejected {
                detail,
                redirect_to,
            } => {
                let mut extra = json!({
                    "message": "For security reasons, destination URLs that redirect \
                                to other pages cannot be registered.",
                });
                if let Some(target) = redirect_to {
                    extra["redirect_to"] = json!(target);
                }
                return Err(AppError::destination_rejected(detail, extra));
            }
        }

        let record = self
            .records
            .insert(NewUrlRecord {
                short_code: code.to_string(),
                destination_url: destination.to_string(),
            })
            .await?;

        let event = NewCreationEvent {
            short_code: record.short_code.clone(),
            destination_url: record.destination_url.clone(),
            client_ip: client.ip,
            user_agent: client.user_agent,
            created_at: Utc::now(),
        };

        // The record exists at this point; a creation-log failure is surfaced
        // in diagnostics but does not fail the registration.
        if let Err(e) = self.events.append_creation(event).await {
            tracing::error!(
                short_code = %record.short_code,
                error = ?e,
                "creation-log append failed after insert"
            );
        }

        Ok(record)
    }

    /// Deletes a mapping and all of its access/creation events.
    ///
    /// The record delete and the event delete are two statements, not one
    /// transaction: a registration of the same code racing this call can
    /// append its creation event after the event delete ran, leaving event
    /// rows for a code with no record. Such rows remain visible in the
    /// global creation history until the code is registered and deleted
    /// again.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown and
    /// [`AppError::Internal`] on store failure.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        let deleted = self.records.delete_by_code(code).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Short URL not found",
                json!({ "short_code": code }),
            ));
        }

        self.events.delete_for_code(code).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockEventLog, MockRecordRepository};
    use crate::infrastructure::validation::MockDestinationValidator;

    fn client() -> ClientMeta {
        ClientMeta {
            ip: "203.0.113.7".to_string(),
            user_agent: "TestBot/1.0".to_string(),
        }
    }

    fn accepting_validator() -> MockDestinationValidator {
        let mut validator = MockDestinationValidator::new();
        validator.expect_validate().returning(|_| {
            Ok(Verdict::Accepted {
                detail: "Destination responded with HTTP 200".to_string(),
            })
        });
        validator
    }

    fn stored(code: &str, destination: &str) -> UrlRecord {
        UrlRecord::new(10, code.to_string(), destination.to_string(), Utc::now(), 0)
    }

    #[tokio::test]
    async fn register_trims_inserts_and_logs_creation() {
        let mut records = MockRecordRepository::new();
        let mut events = MockEventLog::new();

        let created = stored("promo", "https://example.com");
        records
            .expect_insert()
            .withf(|r| r.short_code == "promo" && r.destination_url == "https://example.com")
            .times(1)
            .returning(move |_| Ok(created.clone()));

        events
            .expect_append_creation()
            .withf(|ev| ev.short_code == "promo" && ev.client_ip == "203.0.113.7")
            .times(1)
            .returning(|_| Ok(()));

        let service = LinkService::new(
            Arc::new(records),
            Arc::new(events),
            Arc::new(accepting_validator()),
        );

        let record = service
            .register("  promo  ", " https://example.com ", client())
            .await
            .unwrap();

        assert_eq!(record.short_code, "promo");
        assert_eq!(record.short_url(), "/promo");
    }

    #[tokio::test]
    async fn empty_fields_are_rejected_before_any_write() {
        let mut records = MockRecordRepository::new();
        let mut events = MockEventLog::new();
        records.expect_insert().times(0);
        events.expect_append_creation().times(0);

        let mut validator = MockDestinationValidator::new();
        validator.expect_validate().times(0);

        let service = LinkService::new(Arc::new(records), Arc::new(events), Arc::new(validator));

        let result = service.register("   ", "https://example.com", client()).await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn invalid_charset_is_rejected_before_any_write() {
        let mut records = MockRecordRepository::new();
        let mut events = MockEventLog::new();
        records.expect_insert().times(0);
        events.expect_append_creation().times(0);

        let mut validator = MockDestinationValidator::new();
        validator.expect_validate().times(0);

        let service = LinkService::new(Arc::new(records), Arc::new(events), Arc::new(validator));

        let result = service.register("ab c", "https://example.com", client()).await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn validator_veto_carries_redirect_target() {
        let mut records = MockRecordRepository::new();
        records.expect_insert().times(0);
        let mut events = MockEventLog::new();
        events.expect_append_creation().times(0);

        let mut validator = MockDestinationValidator::new();
        validator.expect_validate().times(1).returning(|_| {
            Ok(Verdict::Rejected {
                detail: "The destination URL is a redirect (HTTP 301)".to_string(),
                redirect_to: Some("https://example.com/moved".to_string()),
            })
        });

        let service = LinkService::new(Arc::new(records), Arc::new(events), Arc::new(validator));

        let err = service
            .register("promo", "https://example.com", client())
            .await
            .unwrap_err();

        match err {
            AppError::DestinationRejected { extra, .. } => {
                assert_eq!(extra["redirect_to"], json!("https://example.com/moved"));
            }
            other => panic!("expected DestinationRejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn duplicate_code_surfaces_the_store_conflict() {
        let mut records = MockRecordRepository::new();
        records
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::conflict("This short code is already in use")));

        let mut events = MockEventLog::new();
        events.expect_append_creation().times(0);

        let service = LinkService::new(
            Arc::new(records),
            Arc::new(events),
            Arc::new(accepting_validator()),
        );

        let result = service
            .register("taken", "https://example.com", client())
            .await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn creation_log_failure_does_not_fail_registration() {
        let mut records = MockRecordRepository::new();
        let created = stored("promo", "https://example.com");
        records
            .expect_insert()
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let mut events = MockEventLog::new();
        events
            .expect_append_creation()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error: log store down")));

        let service = LinkService::new(
            Arc::new(records),
            Arc::new(events),
            Arc::new(accepting_validator()),
        );

        let record = service
            .register("promo", "https://example.com", client())
            .await
            .unwrap();

        assert_eq!(record.short_code, "promo");
    }

    #[tokio::test]
    async fn delete_cascades_to_event_logs() {
        let mut records = MockRecordRepository::new();
        records
            .expect_delete_by_code()
            .withf(|code| code == "promo")
            .times(1)
            .returning(|_| Ok(true));

        let mut events = MockEventLog::new();
        events
            .expect_delete_for_code()
            .withf(|code| code == "promo")
            .times(1)
            .returning(|_| Ok(()));

        let mut validator = MockDestinationValidator::new();
        validator.expect_validate().times(0);

        let service = LinkService::new(Arc::new(records), Arc::new(events), Arc::new(validator));

        assert!(service.delete("promo").await.is_ok());
    }

    #[tokio::test]
    async fn delete_of_unknown_code_is_not_found() {
        let mut records = MockRecordRepository::new();
        records
            .expect_delete_by_code()
            .times(1)
            .returning(|_| Ok(false));

        let mut events = MockEventLog::new();
        events.expect_delete_for_code().times(0);

        let mut validator = MockDestinationValidator::new();
        validator.expect_validate().times(0);

        let service = LinkService::new(Arc::new(records), Arc::new(events), Arc::new(validator));

        let result = service.delete("missing").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
