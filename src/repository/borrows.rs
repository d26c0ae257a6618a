//! Borrow records repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::BorrowStore;
use crate::{
    error::{AppError, AppResult},
    models::{borrow::BorrowRecordRow, BorrowRecord, BorrowRecordInput},
};

const BORROW_COLUMNS: &str = "id, acc_no, register_no, student_name, book_title, \
                              issue_date, return_date, status, remarks";

#[derive(Clone)]
pub struct BorrowsRepository {
    pool: Pool<Postgres>,
}

impl BorrowsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn fetch_where(&self, column: &str, value: &str) -> AppResult<Vec<BorrowRecord>> {
        let rows = sqlx::query_as::<_, BorrowRecordRow>(&format!(
            "SELECT {} FROM borrowed_books WHERE {} = $1 ORDER BY created_at, id",
            BORROW_COLUMNS, column
        ))
        .bind(value)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BorrowRecord::from).collect())
    }
}

#[async_trait]
impl BorrowStore for BorrowsRepository {
    async fn list(&self) -> AppResult<Vec<BorrowRecord>> {
        let rows = sqlx::query_as::<_, BorrowRecordRow>(&format!(
            "SELECT {} FROM borrowed_books ORDER BY created_at, id",
            BORROW_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BorrowRecord::from).collect())
    }

    async fn find_by_register_no(&self, register_no: &str) -> AppResult<Vec<BorrowRecord>> {
        self.fetch_where("register_no", register_no).await
    }

    async fn find_by_acc_no(&self, acc_no: &str) -> AppResult<Vec<BorrowRecord>> {
        self.fetch_where("acc_no", acc_no).await
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<BorrowRecord> {
        sqlx::query_as::<_, BorrowRecordRow>(&format!(
            "SELECT {} FROM borrowed_books WHERE id = $1",
            BORROW_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(BorrowRecord::from)
        .ok_or_else(|| AppError::NotFound(format!("Borrow record with id {} not found", id)))
    }

    async fn create(&self, record: &BorrowRecordInput) -> AppResult<BorrowRecord> {
        let row = sqlx::query_as::<_, BorrowRecordRow>(&format!(
            r#"
            INSERT INTO borrowed_books (
                id, acc_no, register_no, student_name, book_title,
                issue_date, return_date, status, remarks
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            BORROW_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(&record.acc_no)
        .bind(&record.register_no)
        .bind(&record.student_name)
        .bind(&record.book_title)
        .bind(record.issue_date)
        .bind(record.return_date)
        .bind(record.status.stored_value())
        .bind(&record.remarks)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: Uuid, record: &BorrowRecordInput) -> AppResult<BorrowRecord> {
        sqlx::query_as::<_, BorrowRecordRow>(&format!(
            r#"
            UPDATE borrowed_books
            SET acc_no = $2, register_no = $3, student_name = $4, book_title = $5,
                issue_date = $6, return_date = $7, status = $8, remarks = $9
            WHERE id = $1
            RETURNING {}
            "#,
            BORROW_COLUMNS
        ))
        .bind(id)
        .bind(&record.acc_no)
        .bind(&record.register_no)
        .bind(&record.student_name)
        .bind(&record.book_title)
        .bind(record.issue_date)
        .bind(record.return_date)
        .bind(record.status.stored_value())
        .bind(&record.remarks)
        .fetch_optional(&self.pool)
        .await?
        .map(BorrowRecord::from)
        .ok_or_else(|| AppError::NotFound(format!("Borrow record with id {} not found", id)))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM borrowed_books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Borrow record with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
