//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A short-code to destination-URL mapping with its counter
//! - [`AccessEvent`] - An immutable log entry produced per served redirect
//! - [`CreationEvent`] - An immutable log entry produced per registration
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewUrlRecord`, `NewAccessEvent`, `NewCreationEvent`.

pub mod events;
pub mod url_record;

pub use events::{AccessEvent, CreationEvent, NewAccessEvent, NewCreationEvent};
pub use url_record::{NewUrlRecord, UrlRecord};
