//! Catalog view and availability endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    availability::{BookAvailability, BookWithAvailability, CopyStats},
    error::AppResult,
    models::CatalogQuery,
};

/// One page of the catalog with derived availability
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    /// Books on this page, in store order
    pub books: Vec<BookWithAvailability>,
    /// Distinct non-empty genres across the whole catalog
    pub genres: Vec<String>,
    /// Books matching the filters
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

/// Availability of one accession number
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub acc_no: String,
    /// Current catalog title
    pub book_title: String,
    pub availability: BookAvailability,
}

/// Browse the catalog with availability
#[utoipa::path(
    get,
    path = "/catalog",
    tag = "catalog",
    params(CatalogQuery),
    responses(
        (status = 200, description = "One page of books with availability", body = CatalogResponse)
    )
)]
pub async fn get_catalog(
    State(state): State<crate::AppState>,
    Query(query): Query<CatalogQuery>,
) -> AppResult<Json<CatalogResponse>> {
    let catalog = state.services.catalog.catalog(&query).await?;
    Ok(Json(catalog))
}

/// Resolve the current availability of a book
#[utoipa::path(
    get,
    path = "/availability/{acc_no}",
    tag = "catalog",
    params(
        ("acc_no" = String, Path, description = "Accession number")
    ),
    responses(
        (status = 200, description = "Availability", body = AvailabilityResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_availability(
    State(state): State<crate::AppState>,
    Path(acc_no): Path<String>,
) -> AppResult<Json<AvailabilityResponse>> {
    let availability = state.services.catalog.availability(&acc_no).await?;
    Ok(Json(availability))
}

/// Borrow record counts by status for a book
#[utoipa::path(
    get,
    path = "/availability/{acc_no}/stats",
    tag = "catalog",
    params(
        ("acc_no" = String, Path, description = "Accession number")
    ),
    responses(
        (status = 200, description = "Per-status counts", body = CopyStats)
    )
)]
pub async fn get_copy_stats(
    State(state): State<crate::AppState>,
    Path(acc_no): Path<String>,
) -> AppResult<Json<CopyStats>> {
    let stats = state.services.catalog.copy_stats(&acc_no).await?;
    Ok(Json(stats))
}
