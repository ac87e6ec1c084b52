//! Append-only telemetry events tied to short codes.
//!
//! Both event kinds are immutable after creation and are removed only in bulk
//! when their parent [`super::UrlRecord`] is deleted. They are joined to the
//! record by `short_code`, not by id.

use chrono::{DateTime, Utc};

/// A log entry produced each time a redirect is served.
#[derive(Debug, Clone)]
pub struct AccessEvent {
    pub short_code: String,
    pub client_ip: String,
    pub user_agent: String,
    pub accessed_at: DateTime<Utc>,
}

/// Input data for recording a redirect access.
#[derive(Debug, Clone)]
pub struct NewAccessEvent {
    pub short_code: String,
    pub client_ip: String,
    pub user_agent: String,
    pub accessed_at: DateTime<Utc>,
}

/// A log entry produced when a mapping is registered.
#[derive(Debug, Clone)]
pub struct CreationEvent {
    pub short_code: String,
    pub destination_url: String,
    pub client_ip: String,
    pub user_agent: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for recording a registration.
#[derive(Debug, Clone)]
pub struct NewCreationEvent {
    pub short_code: String,
    pub destination_url: String,
    pub client_ip: String,
    pub user_agent: String,
    pub created_at: DateTime<Utc>,
}
