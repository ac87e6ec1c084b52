//! Helper functions used across the application.
//!
//! - [`client_meta`] - client IP / user-agent extraction from requests
//! - [`short_code`] - short-code charset validation

pub mod client_meta;
pub mod short_code;
