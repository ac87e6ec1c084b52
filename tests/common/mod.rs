#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use axum::routing::get;
use axum::Router;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;

use linkmap::api::handlers::redirect_handler;
use linkmap::api::routes::api_routes;
use linkmap::error::AppError;
use linkmap::infrastructure::validation::{DestinationValidator, Verdict};
use linkmap::state::AppState;

/// Destination validator stub with a fixed verdict; integration tests never
/// probe the network.
pub struct StubValidator(pub Verdict);

#[async_trait]
impl DestinationValidator for StubValidator {
    async fn validate(&self, _destination_url: &str) -> Result<Verdict, AppError> {
        Ok(self.0.clone())
    }
}

pub fn accepting_validator() -> Arc<dyn DestinationValidator> {
    Arc::new(StubValidator(Verdict::Accepted {
        detail: "Destination responded with HTTP 200".to_string(),
    }))
}

pub fn rejecting_validator(redirect_to: &str) -> Arc<dyn DestinationValidator> {
    Arc::new(StubValidator(Verdict::Rejected {
        detail: "The destination URL is a redirect (HTTP 301)".to_string(),
        redirect_to: Some(redirect_to.to_string()),
    }))
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), accepting_validator())
}

pub fn create_test_state_with_validator(
    pool: PgPool,
    validator: Arc<dyn DestinationValidator>,
) -> AppState {
    AppState::new(Arc::new(pool), validator)
}

/// Full application router with a fake peer address injected for the
/// `ConnectInfo` extractor.
pub fn test_app(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .nest("/api", api_routes())
        .layer(MockConnectInfoLayer)
        .with_state(state)
}

pub async fn create_test_record(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (short_code, destination_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn access_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT access_count FROM urls WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn access_event_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM access_events WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn creation_event_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM creation_events WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn record_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
