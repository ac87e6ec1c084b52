//! Business logic services.
//!
//! - [`RedirectService`] - the hot path: resolve, count, log
//! - [`LinkService`] - registration workflow and cascade delete
//! - [`StatsService`] - listing, counters, and history queries

pub mod link_service;
pub mod redirect_service;
pub mod stats_service;

pub use link_service::LinkService;
pub use redirect_service::RedirectService;
pub use stats_service::StatsService;
