//! PostgreSQL implementation of the append-only event log.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{AccessEvent, CreationEvent, NewAccessEvent, NewCreationEvent};
use crate::domain::repositories::EventLog;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct AccessRow {
    short_code: String,
    client_ip: String,
    user_agent: String,
    accessed_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct CreationRow {
    short_code: String,
    destination_url: String,
    client_ip: String,
    user_agent: String,
    created_at: DateTime<Utc>,
}

/// PostgreSQL store for access and creation events.
///
/// Rows are insert-only; the only mutation is the bulk delete issued when a
/// record is removed.
pub struct PgEventLog {
    pool: Arc<PgPool>,
}

impl PgEventLog {
    /// Creates a new event log with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventLog for PgEventLog {
    async fn append_access(&self, event: NewAccessEvent) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO access_events (short_code, client_ip, user_agent, accessed_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&event.short_code)
        .bind(&event.client_ip)
        .bind(&event.user_agent)
        .bind(event.accessed_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn append_creation(&self, event: NewCreationEvent) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO creation_events
                (short_code, destination_url, client_ip, user_agent, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&event.short_code)
        .bind(&event.destination_url)
        .bind(&event.client_ip)
        .bind(&event.user_agent)
        .bind(event.created_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn access_history(&self, code: &str) -> Result<Vec<AccessEvent>, AppError> {
        let rows = sqlx::query_as::<_, AccessRow>(
            r#"
            SELECT short_code, client_ip, user_agent, accessed_at
            FROM access_events
            WHERE short_code = $1
            ORDER BY accessed_at DESC
            "#,
        )
        .bind(code)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| AccessEvent {
                short_code: r.short_code,
                client_ip: r.client_ip,
                user_agent: r.user_agent,
                accessed_at: r.accessed_at,
            })
            .collect())
    }

    async fn creation_history(&self) -> Result<Vec<CreationEvent>, AppError> {
        let rows = sqlx::query_as::<_, CreationRow>(
            r#"
            SELECT short_code, destination_url, client_ip, user_agent, created_at
            FROM creation_events
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| CreationEvent {
                short_code: r.short_code,
                destination_url: r.destination_url,
                client_ip: r.client_ip,
                user_agent: r.user_agent,
                created_at: r.created_at,
            })
            .collect())
    }

    async fn delete_for_code(&self, code: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM access_events WHERE short_code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        sqlx::query("DELETE FROM creation_events WHERE short_code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
