//! DTOs for URL management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{AccessEvent, CreationEvent, UrlRecord};

/// Request to register a new short URL.
///
/// Missing fields deserialize to empty strings and fail the registration
/// workflow's emptiness check with a 400. Trimming and charset validation
/// happen in the service, after the length caps here.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUrlRequest {
    #[serde(default)]
    #[validate(length(max = 50, message = "short_code must be at most 50 characters"))]
    pub short_code: String,

    #[serde(default)]
    #[validate(length(max = 2048, message = "destination_url must be at most 2048 characters"))]
    pub destination_url: String,
}

/// A registered record as returned by listing and stats endpoints.
#[derive(Debug, Serialize)]
pub struct UrlData {
    pub id: i64,
    pub short_code: String,
    pub destination_url: String,
    pub created_at: DateTime<Utc>,
    pub access_count: i64,
}

impl From<UrlRecord> for UrlData {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.id,
            short_code: record.short_code,
            destination_url: record.destination_url,
            created_at: record.created_at,
            access_count: record.access_count,
        }
    }
}

/// Payload returned after a successful registration.
#[derive(Debug, Serialize)]
pub struct CreatedUrlData {
    pub id: i64,
    pub short_code: String,
    pub destination_url: String,
    pub short_url: String,
}

impl From<UrlRecord> for CreatedUrlData {
    fn from(record: UrlRecord) -> Self {
        let short_url = record.short_url();
        Self {
            id: record.id,
            short_code: record.short_code,
            destination_url: record.destination_url,
            short_url,
        }
    }
}

/// Envelope for `GET /api/urls`.
#[derive(Debug, Serialize)]
pub struct ListUrlsResponse {
    pub success: bool,
    pub data: Vec<UrlData>,
    pub count: usize,
}

/// Envelope for `POST /api/urls`.
#[derive(Debug, Serialize)]
pub struct CreateUrlResponse {
    pub success: bool,
    pub data: CreatedUrlData,
    pub message: String,
}

/// Envelope for operations that only report success.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Envelope for `GET /api/urls/{code}/stats`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub data: UrlData,
}

/// One entry of an access history.
#[derive(Debug, Serialize)]
pub struct AccessEntry {
    pub short_code: String,
    pub client_ip: String,
    pub user_agent: String,
    pub accessed_at: DateTime<Utc>,
}

impl From<AccessEvent> for AccessEntry {
    fn from(event: AccessEvent) -> Self {
        Self {
            short_code: event.short_code,
            client_ip: event.client_ip,
            user_agent: event.user_agent,
            accessed_at: event.accessed_at,
        }
    }
}

/// Data payload for `GET /api/urls/{code}/history`.
#[derive(Debug, Serialize)]
pub struct HistoryData {
    pub short_code: String,
    pub total_accesses: usize,
    pub history: Vec<AccessEntry>,
}

/// Envelope for `GET /api/urls/{code}/history`.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub data: HistoryData,
}

/// One entry of the creation history.
#[derive(Debug, Serialize)]
pub struct CreationEntry {
    pub short_code: String,
    pub destination_url: String,
    pub client_ip: String,
    pub user_agent: String,
    pub created_at: DateTime<Utc>,
}

impl From<CreationEvent> for CreationEntry {
    fn from(event: CreationEvent) -> Self {
        Self {
            short_code: event.short_code,
            destination_url: event.destination_url,
            client_ip: event.client_ip,
            user_agent: event.user_agent,
            created_at: event.created_at,
        }
    }
}

/// Envelope for `GET /api/creation-history`.
#[derive(Debug, Serialize)]
pub struct CreationHistoryResponse {
    pub success: bool,
    pub data: Vec<CreationEntry>,
    pub count: usize,
}
