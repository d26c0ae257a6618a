//! Borrow record-store endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    api::extract::AppJson,
    error::AppResult,
    models::{borrow::BorrowListQuery, BorrowRecord, BorrowRecordInput},
};

/// List borrow records, optionally by register number and/or accession number
#[utoipa::path(
    get,
    path = "/borrowedBooks",
    tag = "borrowedBooks",
    params(BorrowListQuery),
    responses(
        (status = 200, description = "Borrow records in store order", body = Vec<BorrowRecord>)
    )
)]
pub async fn list_records(
    State(state): State<crate::AppState>,
    Query(query): Query<BorrowListQuery>,
) -> AppResult<Json<Vec<BorrowRecord>>> {
    let records = state.services.circulation.list_records(&query).await?;
    Ok(Json(records))
}

/// Get a borrow record by ID
#[utoipa::path(
    get,
    path = "/borrowedBooks/{id}",
    tag = "borrowedBooks",
    params(
        ("id" = Uuid, Path, description = "Borrow record ID")
    ),
    responses(
        (status = 200, description = "Borrow record", body = BorrowRecord),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_record(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BorrowRecord>> {
    let record = state.services.circulation.get_record(id).await?;
    Ok(Json(record))
}

/// Store a borrow record as given (no availability check)
#[utoipa::path(
    post,
    path = "/borrowedBooks",
    tag = "borrowedBooks",
    request_body = BorrowRecordInput,
    responses(
        (status = 201, description = "Record created", body = BorrowRecord)
    )
)]
pub async fn create_record(
    State(state): State<crate::AppState>,
    AppJson(record): AppJson<BorrowRecordInput>,
) -> AppResult<(StatusCode, Json<BorrowRecord>)> {
    let created = state.services.circulation.create_record(record).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace a borrow record
#[utoipa::path(
    put,
    path = "/borrowedBooks/{id}",
    tag = "borrowedBooks",
    params(
        ("id" = Uuid, Path, description = "Borrow record ID")
    ),
    request_body = BorrowRecordInput,
    responses(
        (status = 200, description = "Record updated", body = BorrowRecord),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_record(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    AppJson(record): AppJson<BorrowRecordInput>,
) -> AppResult<Json<BorrowRecord>> {
    let updated = state.services.circulation.update_record(id, record).await?;
    Ok(Json(updated))
}

/// Delete a borrow record
#[utoipa::path(
    delete,
    path = "/borrowedBooks/{id}",
    tag = "borrowedBooks",
    params(
        ("id" = Uuid, Path, description = "Borrow record ID")
    ),
    responses(
        (status = 200, description = "Record deleted"),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_record(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Value>> {
    state.services.circulation.delete_record(id).await?;
    Ok(Json(json!({})))
}
