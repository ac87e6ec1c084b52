//! Client metadata extraction for telemetry events.

use axum::http::{HeaderMap, header};
use std::net::SocketAddr;

/// Fallback recorded when the client sends no User-Agent header.
const UNKNOWN_USER_AGENT: &str = "Unknown";

/// Client identity captured alongside access and creation events.
#[derive(Debug, Clone)]
pub struct ClientMeta {
    pub ip: String,
    pub user_agent: String,
}

impl ClientMeta {
    /// Extracts client metadata from request headers and the peer address.
    ///
    /// The IP is taken from the first `X-Forwarded-For` entry when the header
    /// is present (proxy deployments), otherwise from the peer socket
    /// address. The user agent defaults to `"Unknown"`.
    pub fn from_request(headers: &HeaderMap, peer: SocketAddr) -> Self {
        let ip = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| peer.ip().to_string());

        let user_agent = headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(UNKNOWN_USER_AGENT)
            .to_string();

        Self { ip, user_agent }
    }
}
