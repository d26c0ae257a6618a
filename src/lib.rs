//! LMS Server
//!
//! Library catalog and circulation tracker: a REST JSON API over books and
//! borrow records, with book availability derived from the borrow history.

use std::sync::Arc;

pub mod api;
pub mod availability;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
