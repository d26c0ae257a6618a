//! Data models for the catalog and circulation records

pub mod book;
pub mod borrow;
pub mod status;

// Re-export commonly used types
pub use book::{Book, BookInput, CatalogQuery};
pub use borrow::{BorrowRecord, BorrowRecordInput, BorrowRequest, HistoryQuery, ReturnRequest};
pub use status::BorrowStatus;
