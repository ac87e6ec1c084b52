//! Handler for the short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_meta::ClientMeta;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Extract client metadata (forwarded-for / peer IP, user agent)
/// 2. Resolve the code: counter increment + access-log append
/// 3. Return 302 Found with the destination in `Location`
///
/// # Errors
///
/// Returns 404 with a structured payload echoing the requested code when it
/// does not exist; 500 when the counter increment fails.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, AppError> {
    let client = ClientMeta::from_request(&headers, addr);

    let destination = state.redirect_service.resolve(&code, client).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, destination)]).into_response())
}
