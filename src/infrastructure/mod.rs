//! Infrastructure layer for external integrations.
//!
//! Implements the contracts defined by the domain layer:
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`validation`] - outbound destination-URL probing

pub mod persistence;
pub mod validation;
