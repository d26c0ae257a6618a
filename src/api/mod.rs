//! API handlers for the LMS REST endpoints

pub mod books;
pub mod borrows;
pub mod catalog;
pub mod circulation;
pub mod extract;
pub mod health;
pub mod history;
pub mod openapi;
pub mod stats;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors_allow_any = state.config.server.cors_allow_any;

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Record store
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route(
            "/borrowedBooks",
            get(borrows::list_records).post(borrows::create_record),
        )
        .route(
            "/borrowedBooks/:id",
            get(borrows::get_record)
                .put(borrows::update_record)
                .delete(borrows::delete_record),
        )
        // Availability
        .route("/catalog", get(catalog::get_catalog))
        .route("/availability/:acc_no", get(catalog::get_availability))
        .route("/availability/:acc_no/stats", get(catalog::get_copy_stats))
        // Circulation
        .route("/circulation/borrow", post(circulation::borrow_book))
        .route("/circulation/search", get(circulation::search_records))
        .route("/circulation/return/:id", put(circulation::return_book))
        .route("/history", get(history::get_history))
        // Statistics
        .route("/stats", get(stats::get_stats))
        .with_state(state);

    let app = routes
        .merge(openapi::create_openapi_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    if cors_allow_any {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    }
}
