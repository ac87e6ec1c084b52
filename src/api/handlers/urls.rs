//! Handlers for URL management endpoints (list, create, delete, stats,
//! history).

use axum::{
    Json,
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode},
};
use std::net::SocketAddr;
use validator::Validate;

use crate::api::dto::urls::{
    CreateUrlRequest, CreateUrlResponse, CreationHistoryResponse, HistoryData, HistoryResponse,
    ListUrlsResponse, MessageResponse, StatsResponse,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_meta::ClientMeta;

/// Lists all registered short URLs, newest first.
///
/// # Endpoint
///
/// `GET /api/urls`
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<ListUrlsResponse>, AppError> {
    let records = state.stats_service.list_records().await?;

    let data: Vec<_> = records.into_iter().map(Into::into).collect();
    let count = data.len();

    Ok(Json(ListUrlsResponse {
        success: true,
        data,
        count,
    }))
}

/// Registers a new short URL.
///
/// # Endpoint
///
/// `POST /api/urls`
///
/// # Errors
///
/// - 400 on empty/malformed fields or a destination-probe veto
/// - 409 when the short code is already in use (the caller may retry with a
///   different code)
/// - 500 on store failure
pub async fn create_url_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(payload): Json<CreateUrlRequest>,
) -> Result<(StatusCode, Json<CreateUrlResponse>), AppError> {
    payload.validate()?;

    let client = ClientMeta::from_request(&headers, addr);

    let record = state
        .link_service
        .register(&payload.short_code, &payload.destination_url, client)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUrlResponse {
            success: true,
            data: record.into(),
            message: "Short URL created successfully".to_string(),
        }),
    ))
}

/// Deletes a short URL and its access/creation history.
///
/// # Endpoint
///
/// `DELETE /api/urls/{code}`
///
/// # Errors
///
/// Returns 404 when the code is unknown.
pub async fn delete_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.link_service.delete(&code).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "URL deleted successfully".to_string(),
    }))
}

/// Returns access statistics for a short URL.
///
/// # Endpoint
///
/// `GET /api/urls/{code}/stats`
///
/// # Errors
///
/// Returns 404 when the code is unknown.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.stats_service.record_stats(&code).await?;

    Ok(Json(StatsResponse {
        success: true,
        data: record.into(),
    }))
}

/// Returns the access history for a short URL, newest first.
///
/// # Endpoint
///
/// `GET /api/urls/{code}/history`
///
/// # Errors
///
/// Returns 404 when the code is unknown; a deleted code never yields an
/// empty history.
pub async fn history_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<HistoryResponse>, AppError> {
    let events = state.stats_service.access_history(&code).await?;

    let history: Vec<_> = events.into_iter().map(Into::into).collect();

    Ok(Json(HistoryResponse {
        success: true,
        data: HistoryData {
            short_code: code,
            total_accesses: history.len(),
            history,
        },
    }))
}

/// Returns all creation events, newest first.
///
/// # Endpoint
///
/// `GET /api/creation-history`
pub async fn creation_history_handler(
    State(state): State<AppState>,
) -> Result<Json<CreationHistoryResponse>, AppError> {
    let events = state.stats_service.creation_history().await?;

    let data: Vec<_> = events.into_iter().map(Into::into).collect();
    let count = data.len();

    Ok(Json(CreationHistoryResponse {
        success: true,
        data,
        count,
    }))
}
