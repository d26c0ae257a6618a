//! Statistics endpoints

use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

/// Statistics response
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    /// Catalog statistics
    pub books: BookStats,
    /// Borrow record statistics
    pub borrowing: BorrowingStats,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookStats {
    /// Total number of books
    pub total: i64,
    /// Number of distinct genres
    pub genres: i64,
    /// Number of distinct authors
    pub authors: i64,
    /// Sum of all prices
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_value: Decimal,
    /// Mean price, absent for an empty catalog
    #[serde(with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub average_price: Option<Decimal>,
    /// Genre with the most books
    pub most_popular_genre: Option<String>,
    /// Books by genre, largest first
    pub by_genre: Vec<StatEntry>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowingStats {
    /// Records currently borrowed
    pub borrowed: i64,
    /// Records returned in good condition
    pub returned: i64,
    /// Damaged and partially damaged
    pub damaged: i64,
    pub lost: i64,
    /// Returned share of settled records, in percent
    pub return_rate: Option<f64>,
}

#[derive(Serialize, ToSchema)]
pub struct StatEntry {
    /// Label
    pub label: String,
    /// Value
    pub value: i64,
}

/// Get library statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Library statistics", body = StatsResponse)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<StatsResponse>> {
    let stats = state.services.stats.get_stats().await?;
    Ok(Json(stats))
}
