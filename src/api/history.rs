//! Borrow history endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{BorrowRecord, HistoryQuery},
};

/// History row with display dates
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub record: BorrowRecord,
    /// Issue date as DD-MM-YYYY
    pub issue_date_display: String,
    /// Return date as DD-MM-YYYY, or "Not Returned"
    pub return_date_display: String,
}

/// Record counts per status tab, over the unfiltered history
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct StatusCounts {
    pub all: usize,
    pub borrowed: usize,
    pub returned: usize,
    pub lost: usize,
    /// Damaged and partially damaged
    pub damaged: usize,
}

/// Paginated history response
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub records: Vec<HistoryEntry>,
    /// Records matching the filters
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub status_counts: StatusCounts,
}

/// Borrow history, open records first
#[utoipa::path(
    get,
    path = "/history",
    tag = "history",
    params(HistoryQuery),
    responses(
        (status = 200, description = "One page of borrow history", body = HistoryResponse)
    )
)]
pub async fn get_history(
    State(state): State<crate::AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<HistoryResponse>> {
    let history = state.services.history.history(&query).await?;
    Ok(Json(history))
}
