//! Borrow record model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::status::BorrowStatus;

/// One borrow event against a book copy
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRecord {
    pub id: Uuid,
    /// Accession number of the borrowed copy
    pub acc_no: String,
    pub register_no: String,
    pub student_name: String,
    /// Title copied from the book at borrow time
    pub book_title: String,
    pub issue_date: NaiveDate,
    /// Empty until the book comes back
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date)]
    pub return_date: Option<NaiveDate>,
    #[serde(default)]
    #[schema(value_type = String, example = "Borrowed")]
    pub status: BorrowStatus,
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Row as read from `borrowed_books`
#[derive(Debug, FromRow)]
pub struct BorrowRecordRow {
    pub id: Uuid,
    pub acc_no: String,
    pub register_no: String,
    pub student_name: String,
    pub book_title: String,
    pub issue_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub remarks: Option<String>,
}

impl From<BorrowRecordRow> for BorrowRecord {
    fn from(row: BorrowRecordRow) -> Self {
        Self {
            id: row.id,
            acc_no: row.acc_no,
            register_no: row.register_no,
            student_name: row.student_name,
            book_title: row.book_title,
            issue_date: row.issue_date,
            return_date: row.return_date,
            status: BorrowStatus::from(row.status),
            remarks: row.remarks,
        }
    }
}

/// Borrow record body for record-store create and full update requests
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRecordInput {
    pub acc_no: String,
    #[serde(default)]
    pub register_no: String,
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub book_title: String,
    pub issue_date: NaiveDate,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date)]
    pub return_date: Option<NaiveDate>,
    #[serde(default)]
    #[schema(value_type = String, example = "Borrowed")]
    pub status: BorrowStatus,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl BorrowRecordInput {
    pub fn into_record(self, id: Uuid) -> BorrowRecord {
        BorrowRecord {
            id,
            acc_no: self.acc_no,
            register_no: self.register_no,
            student_name: self.student_name,
            book_title: self.book_title,
            issue_date: self.issue_date,
            return_date: self.return_date,
            status: self.status,
            remarks: self.remarks,
        }
    }
}

impl From<BorrowRecord> for BorrowRecordInput {
    fn from(record: BorrowRecord) -> Self {
        Self {
            acc_no: record.acc_no,
            register_no: record.register_no,
            student_name: record.student_name,
            book_title: record.book_title,
            issue_date: record.issue_date,
            return_date: record.return_date,
            status: record.status,
            remarks: record.remarks,
        }
    }
}

/// Record-store query for `GET /borrowedBooks`
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct BorrowListQuery {
    pub register_no: Option<String>,
    pub acc_no: Option<String>,
}

/// Borrow request
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required."))]
    pub register_no: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required."))]
    pub student_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required."))]
    pub acc_no: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(required(message = "All fields are required."))]
    #[schema(value_type = String, format = Date)]
    pub issue_date: Option<NaiveDate>,
}

/// Return request
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[schema(value_type = String, format = Date)]
    pub return_date: Option<NaiveDate>,
    /// One of Returned, Damaged, Lost, Partially Damaged
    #[serde(default)]
    #[schema(value_type = String, example = "Returned")]
    pub status: BorrowStatus,
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Return-desk lookup
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReturnSearchQuery {
    /// Register number, or accession number when no register number matches
    pub q: Option<String>,
}

/// History screen filters and paging
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    /// Case-insensitive match on student name, register number, book title or accession number
    pub search: Option<String>,
    /// Exact status, `all` disables the filter
    pub status: Option<String>,
    /// Page number (default: 1)
    pub page: Option<usize>,
    /// Records per page
    pub per_page: Option<usize>,
}

impl HistoryQuery {
    pub fn matches(&self, record: &BorrowRecord) -> bool {
        if let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            let hit = record.student_name.to_lowercase().contains(&term)
                || record.register_no.to_lowercase().contains(&term)
                || record.book_title.to_lowercase().contains(&term)
                || record.acc_no.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }

        match self.status.as_deref() {
            None | Some("") | Some("all") => true,
            Some(status) => record.status.as_str() == status,
        }
    }
}
