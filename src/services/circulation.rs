//! Borrow and return workflows

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    availability,
    error::{AppError, AppResult},
    models::{
        borrow::BorrowListQuery, BorrowRecord, BorrowRecordInput, BorrowRequest, BorrowStatus,
        ReturnRequest,
    },
    repository::{BookStore, BorrowStore},
};

#[derive(Clone)]
pub struct CirculationService {
    books: Arc<dyn BookStore>,
    borrows: Arc<dyn BorrowStore>,
}

impl CirculationService {
    pub fn new(books: Arc<dyn BookStore>, borrows: Arc<dyn BorrowStore>) -> Self {
        Self { books, borrows }
    }

    /// List borrow records, filtered by register number and/or accession number
    pub async fn list_records(&self, query: &BorrowListQuery) -> AppResult<Vec<BorrowRecord>> {
        match (query.register_no.as_deref(), query.acc_no.as_deref()) {
            (Some(register_no), acc_no) => {
                let records = self.borrows.find_by_register_no(register_no).await?;
                Ok(match acc_no {
                    Some(acc_no) => records.into_iter().filter(|r| r.acc_no == acc_no).collect(),
                    None => records,
                })
            }
            (None, Some(acc_no)) => self.borrows.find_by_acc_no(acc_no).await,
            (None, None) => self.borrows.list().await,
        }
    }

    pub async fn get_record(&self, id: Uuid) -> AppResult<BorrowRecord> {
        self.borrows.get_by_id(id).await
    }

    /// Store a record as given, without the availability guard
    pub async fn create_record(&self, record: BorrowRecordInput) -> AppResult<BorrowRecord> {
        self.borrows.create(&record).await
    }

    pub async fn update_record(
        &self,
        id: Uuid,
        record: BorrowRecordInput,
    ) -> AppResult<BorrowRecord> {
        self.borrows.update(id, &record).await
    }

    pub async fn delete_record(&self, id: Uuid) -> AppResult<()> {
        self.borrows.delete(id).await
    }

    /// Lend a book to a student.
    ///
    /// Availability is re-derived from the records fetched here. Two
    /// concurrent borrows of the same copy can both pass this check.
    pub async fn borrow(&self, request: BorrowRequest) -> AppResult<BorrowRecord> {
        request.validate()?;

        let acc_no = request.acc_no.trim();
        let register_no = request.register_no.trim();
        let student_name = request.student_name.trim();
        let issue_date = request.issue_date.ok_or_else(|| {
            AppError::Validation("All fields are required.".to_string())
        })?;
        if acc_no.is_empty() || register_no.is_empty() || student_name.is_empty() {
            return Err(AppError::Validation("All fields are required.".to_string()));
        }

        let book = self
            .books
            .find_by_acc_no(acc_no)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("Book not found for the given Acc No.".to_string()))?;

        let records = self.borrows.find_by_acc_no(acc_no).await?;
        let current = availability::resolve_status(acc_no, &records);
        if !current.is_available {
            tracing::warn!(
                "Borrow refused: acc_no={} is {} (register_no={})",
                acc_no,
                current.status,
                register_no
            );
            return Err(AppError::Conflict(format!(
                "Cannot borrow: Book is currently {}.",
                current.status.to_lowercase()
            )));
        }

        let record = self
            .borrows
            .create(&BorrowRecordInput {
                acc_no: acc_no.to_string(),
                register_no: register_no.to_string(),
                student_name: student_name.to_string(),
                book_title: book.title,
                issue_date,
                return_date: None,
                status: BorrowStatus::Borrowed,
                remarks: None,
            })
            .await?;

        tracing::info!(
            "Borrowed: acc_no={} register_no={} record={}",
            record.acc_no,
            record.register_no,
            record.id
        );
        Ok(record)
    }

    /// Close a borrow record in place with its return outcome
    pub async fn return_book(&self, id: Uuid, request: ReturnRequest) -> AppResult<BorrowRecord> {
        let return_date = match (request.return_date, &request.status) {
            (Some(date), status) if *status != BorrowStatus::Pending => date,
            _ => {
                return Err(AppError::Validation(
                    "Return Date and Status are required.".to_string(),
                ))
            }
        };
        if !request.status.is_return_outcome() {
            return Err(AppError::BadRequest(format!(
                "Invalid return status: {}",
                request.status
            )));
        }

        let record = self.borrows.get_by_id(id).await?;
        let mut update = BorrowRecordInput::from(record);
        update.return_date = Some(return_date);
        update.status = request.status;
        update.remarks = request.remarks.filter(|r| !r.trim().is_empty());

        let updated = self.borrows.update(id, &update).await?;
        tracing::info!(
            "Returned: acc_no={} record={} status={}",
            updated.acc_no,
            updated.id,
            updated.status
        );
        Ok(updated)
    }

    /// Return-desk lookup: register number first, then accession number
    pub async fn search(&self, term: &str) -> AppResult<Vec<BorrowRecord>> {
        let term = term.trim();
        if term.is_empty() {
            return Err(AppError::Validation(
                "Register Number or Acc No is required.".to_string(),
            ));
        }

        let mut records = self.borrows.find_by_register_no(term).await?;
        if records.is_empty() {
            records = self.borrows.find_by_acc_no(term).await?;
        }
        if records.is_empty() {
            return Err(AppError::NotFound("Borrowed book record not found.".to_string()));
        }

        Ok(records)
    }
}
