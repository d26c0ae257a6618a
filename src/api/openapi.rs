//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, borrows, catalog, circulation, health, history, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LMS API",
        version = "1.0.0",
        description = "Library catalog and circulation REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Borrow records
        borrows::list_records,
        borrows::get_record,
        borrows::create_record,
        borrows::update_record,
        borrows::delete_record,
        // Catalog and availability
        catalog::get_catalog,
        catalog::get_availability,
        catalog::get_copy_stats,
        // Circulation
        circulation::borrow_book,
        circulation::search_records,
        circulation::return_book,
        history::get_history,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Records
            crate::models::Book,
            crate::models::BookInput,
            crate::models::BorrowRecord,
            crate::models::BorrowRecordInput,
            // Workflows
            crate::models::BorrowRequest,
            crate::models::ReturnRequest,
            // Availability
            crate::availability::BookAvailability,
            crate::availability::BookWithAvailability,
            crate::availability::CopyStats,
            catalog::CatalogResponse,
            catalog::AvailabilityResponse,
            // History
            history::HistoryEntry,
            history::HistoryResponse,
            history::StatusCounts,
            // Stats
            stats::StatsResponse,
            stats::BookStats,
            stats::BorrowingStats,
            stats::StatEntry,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Catalog records"),
        (name = "borrowedBooks", description = "Borrow records"),
        (name = "catalog", description = "Catalog view and availability"),
        (name = "circulation", description = "Borrow and return workflows"),
        (name = "history", description = "Borrow history"),
        (name = "stats", description = "Statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_workflow_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/books/{id}",
            "/borrowedBooks",
            "/availability/{acc_no}",
            "/circulation/return/{id}",
            "/history",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {}",
                expected
            );
        }
    }

    #[test]
    fn test_decimal_fields_are_documented_as_numbers() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schemas = &doc["components"]["schemas"];

        assert_eq!(schemas["Book"]["properties"]["price"]["type"], "number");
        assert_eq!(schemas["BookInput"]["properties"]["price"]["type"], "number");
        assert_eq!(
            schemas["BookStats"]["properties"]["totalValue"]["type"],
            "number"
        );
    }
}
