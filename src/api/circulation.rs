//! Borrow and return endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    api::extract::AppJson,
    error::{AppResult, ErrorResponse},
    models::{borrow::ReturnSearchQuery, BorrowRecord, BorrowRequest, ReturnRequest},
};

/// Borrow a book
#[utoipa::path(
    post,
    path = "/circulation/borrow",
    tag = "circulation",
    request_body = BorrowRequest,
    responses(
        (status = 201, description = "Book borrowed", body = BorrowRecord),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 409, description = "Book is not available", body = ErrorResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    AppJson(request): AppJson<BorrowRequest>,
) -> AppResult<(StatusCode, Json<BorrowRecord>)> {
    let record = state.services.circulation.borrow(request).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Find borrow records to return, by register number then accession number
#[utoipa::path(
    get,
    path = "/circulation/search",
    tag = "circulation",
    params(ReturnSearchQuery),
    responses(
        (status = 200, description = "Matching records", body = Vec<BorrowRecord>),
        (status = 400, description = "Empty search", body = ErrorResponse),
        (status = 404, description = "No record found", body = ErrorResponse)
    )
)]
pub async fn search_records(
    State(state): State<crate::AppState>,
    Query(query): Query<ReturnSearchQuery>,
) -> AppResult<Json<Vec<BorrowRecord>>> {
    let records = state
        .services
        .circulation
        .search(query.q.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(records))
}

/// Return a borrowed book
#[utoipa::path(
    put,
    path = "/circulation/return/{id}",
    tag = "circulation",
    params(
        ("id" = Uuid, Path, description = "Borrow record ID")
    ),
    request_body = ReturnRequest,
    responses(
        (status = 200, description = "Book returned", body = BorrowRecord),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 404, description = "Record not found", body = ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    AppJson(request): AppJson<ReturnRequest>,
) -> AppResult<Json<BorrowRecord>> {
    let record = state.services.circulation.return_book(id, request).await?;
    Ok(Json(record))
}
