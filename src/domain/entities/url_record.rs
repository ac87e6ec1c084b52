//! URL record entity representing a short-code mapping.

use chrono::{DateTime, Utc};

/// A registered short-code to destination-URL mapping.
///
/// `short_code` is unique across all records (case-sensitive) and immutable
/// after creation, as is `destination_url`; there is no update endpoint.
/// `access_count` starts at 0 and is only ever incremented by the redirect
/// path, via a single atomic store-level statement.
#[derive(Debug, Clone)]
pub struct UrlRecord {
    pub id: i64,
    pub short_code: String,
    pub destination_url: String,
    pub created_at: DateTime<Utc>,
    pub access_count: i64,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        short_code: String,
        destination_url: String,
        created_at: DateTime<Utc>,
        access_count: i64,
    ) -> Self {
        Self {
            id,
            short_code,
            destination_url,
            created_at,
            access_count,
        }
    }

    /// Returns the path-only short URL for this record, e.g. `/promo`.
    pub fn short_url(&self) -> String {
        format!("/{}", self.short_code)
    }
}

/// Input data for registering a new mapping.
///
/// Fields are expected to be trimmed and charset-validated by the
/// registration workflow before reaching the store.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub short_code: String,
    pub destination_url: String,
}
