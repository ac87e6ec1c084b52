//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService, StatsService};
use crate::infrastructure::persistence::{PgEventLog, PgRecordRepository};
use crate::infrastructure::validation::DestinationValidator;

/// Application state shared across request handlers.
///
/// Services are wired over the PostgreSQL repositories; the destination
/// validator is injected behind its trait so tests can stub the outbound
/// probe.
#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService<PgRecordRepository, PgEventLog>>,
    pub link_service: Arc<LinkService<PgRecordRepository, PgEventLog>>,
    pub stats_service: Arc<StatsService<PgRecordRepository, PgEventLog>>,
}

impl AppState {
    /// Wires services over a connection pool and a destination validator.
    pub fn new(pool: Arc<PgPool>, validator: Arc<dyn DestinationValidator>) -> Self {
        let records = Arc::new(PgRecordRepository::new(pool.clone()));
        let events = Arc::new(PgEventLog::new(pool));

        Self {
            redirect_service: Arc::new(RedirectService::new(records.clone(), events.clone())),
            link_service: Arc::new(LinkService::new(records.clone(), events.clone(), validator)),
            stats_service: Arc::new(StatsService::new(records, events)),
        }
    }
}
