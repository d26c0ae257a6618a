//! Repository layer for the record store

pub mod books;
pub mod borrows;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Book, BookInput, BorrowRecord, BorrowRecordInput},
};

/// Catalog collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books in store order
    async fn list(&self) -> AppResult<Vec<Book>>;
    async fn find_by_acc_no(&self, acc_no: &str) -> AppResult<Vec<Book>>;
    async fn get_by_id(&self, id: Uuid) -> AppResult<Book>;
    /// Insert a book, the store assigns the id
    async fn create(&self, book: &BookInput) -> AppResult<Book>;
    /// Replace every field of an existing book
    async fn update(&self, id: Uuid, book: &BookInput) -> AppResult<Book>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
    /// Round trip to the backing store
    async fn ping(&self) -> AppResult<()>;
}

/// Borrow records collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BorrowStore: Send + Sync {
    /// All records in store (insertion) order
    async fn list(&self) -> AppResult<Vec<BorrowRecord>>;
    async fn find_by_register_no(&self, register_no: &str) -> AppResult<Vec<BorrowRecord>>;
    async fn find_by_acc_no(&self, acc_no: &str) -> AppResult<Vec<BorrowRecord>>;
    async fn get_by_id(&self, id: Uuid) -> AppResult<BorrowRecord>;
    /// Insert a record, the store assigns the id
    async fn create(&self, record: &BorrowRecordInput) -> AppResult<BorrowRecord>;
    /// Replace every field of an existing record
    async fn update(&self, id: Uuid, record: &BorrowRecordInput) -> AppResult<BorrowRecord>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: books::BooksRepository,
    pub borrows: borrows::BorrowsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            borrows: borrows::BorrowsRepository::new(pool.clone()),
            pool,
        }
    }
}
