//! Catalog management service

use std::sync::Arc;

use indexmap::IndexSet;
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::catalog::{AvailabilityResponse, CatalogResponse},
    availability::{self, CopyStats},
    error::{AppError, AppResult},
    models::{book::BookListQuery, Book, BookInput, CatalogQuery},
    repository::{BookStore, BorrowStore},
    services::paginate,
};

#[derive(Clone)]
pub struct CatalogService {
    books: Arc<dyn BookStore>,
    borrows: Arc<dyn BorrowStore>,
    page_size: usize,
}

impl CatalogService {
    pub fn new(books: Arc<dyn BookStore>, borrows: Arc<dyn BorrowStore>, page_size: usize) -> Self {
        Self {
            books,
            borrows,
            page_size: page_size.max(1),
        }
    }

    /// List books, optionally restricted to one accession number
    pub async fn list_books(&self, query: &BookListQuery) -> AppResult<Vec<Book>> {
        match query.acc_no.as_deref() {
            Some(acc_no) => self.books.find_by_acc_no(acc_no).await,
            None => self.books.list().await,
        }
    }

    pub async fn get_book(&self, id: Uuid) -> AppResult<Book> {
        self.books.get_by_id(id).await
    }

    pub async fn create_book(&self, book: BookInput) -> AppResult<Book> {
        book.validate()?;
        let created = self.books.create(&book).await?;
        tracing::info!("Catalog: added book acc_no={} id={}", created.acc_no, created.id);
        Ok(created)
    }

    pub async fn update_book(&self, id: Uuid, book: BookInput) -> AppResult<Book> {
        book.validate()?;
        self.books.update(id, &book).await
    }

    pub async fn delete_book(&self, id: Uuid) -> AppResult<()> {
        self.books.delete(id).await?;
        tracing::info!("Catalog: deleted book id={}", id);
        Ok(())
    }

    /// Check that the record store answers
    pub async fn ping(&self) -> AppResult<()> {
        self.books.ping().await
    }

    /// Filtered, paged catalog with availability re-derived from a fresh snapshot
    pub async fn catalog(&self, query: &CatalogQuery) -> AppResult<CatalogResponse> {
        let (books, records) = tokio::try_join!(self.books.list(), self.borrows.list())?;

        let genres: IndexSet<String> = books
            .iter()
            .filter(|b| !b.genre.is_empty())
            .map(|b| b.genre.clone())
            .collect();

        let filtered: Vec<Book> = books.into_iter().filter(|b| query.matches(b)).collect();
        let page = paginate(filtered, query.page, query.per_page, self.page_size);

        Ok(CatalogResponse {
            books: availability::books_with_availability(page.items, &records),
            genres: genres.into_iter().collect(),
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        })
    }

    /// Current availability of one accession number
    pub async fn availability(&self, acc_no: &str) -> AppResult<AvailabilityResponse> {
        let acc_no = acc_no.trim();
        if acc_no.is_empty() {
            return Err(AppError::Validation("Acc No is required.".to_string()));
        }

        let book = self
            .books
            .find_by_acc_no(acc_no)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("Book not found for the given Acc No.".to_string()))?;

        let records = self.borrows.find_by_acc_no(acc_no).await?;

        Ok(AvailabilityResponse {
            acc_no: acc_no.to_string(),
            book_title: book.title,
            availability: availability::resolve_status(acc_no, &records),
        })
    }

    pub async fn copy_stats(&self, acc_no: &str) -> AppResult<CopyStats> {
        let records = self.borrows.find_by_acc_no(acc_no).await?;
        Ok(availability::copy_stats(acc_no, &records))
    }
}
