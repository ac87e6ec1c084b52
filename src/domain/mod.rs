//! Domain layer containing business entities and data-access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on infrastructure or presentation
//! layers. Repository traits define contracts implemented under
//! `crate::infrastructure`; business logic lives in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
