//! HTTP request handlers for API endpoints.

pub mod health;
pub mod redirect;
pub mod urls;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use urls::{
    create_url_handler, creation_history_handler, delete_url_handler, history_handler,
    list_urls_handler, stats_handler,
};
