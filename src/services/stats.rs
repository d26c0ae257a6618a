//! Statistics service

use std::collections::HashSet;
use std::sync::Arc;

use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::{
    api::stats::{BookStats, BorrowingStats, StatEntry, StatsResponse},
    error::AppResult,
    models::{Book, BorrowRecord, BorrowStatus},
    repository::{BookStore, BorrowStore},
};

/// Label used for books without a genre
const UNSPECIFIED_GENRE: &str = "Unspecified";

#[derive(Clone)]
pub struct StatsService {
    books: Arc<dyn BookStore>,
    borrows: Arc<dyn BorrowStore>,
}

impl StatsService {
    pub fn new(books: Arc<dyn BookStore>, borrows: Arc<dyn BorrowStore>) -> Self {
        Self { books, borrows }
    }

    /// Dashboard statistics over the full current snapshot
    pub async fn get_stats(&self) -> AppResult<StatsResponse> {
        let (books, records) = tokio::try_join!(self.books.list(), self.borrows.list())?;

        Ok(StatsResponse {
            books: book_stats(&books),
            borrowing: borrowing_stats(&records),
        })
    }
}

fn book_stats(books: &[Book]) -> BookStats {
    let mut by_genre: IndexMap<&str, i64> = IndexMap::new();
    let mut authors: HashSet<&str> = HashSet::new();
    let mut total_value = Decimal::ZERO;

    for book in books {
        total_value += book.price;
        if !book.author.is_empty() {
            authors.insert(book.author.as_str());
        }
        let genre = if book.genre.is_empty() {
            UNSPECIFIED_GENRE
        } else {
            book.genre.as_str()
        };
        *by_genre.entry(genre).or_insert(0) += 1;
    }

    // Stable: equal counts keep first-seen order
    let mut by_genre: Vec<StatEntry> = by_genre
        .into_iter()
        .map(|(label, value)| StatEntry {
            label: label.to_string(),
            value,
        })
        .collect();
    by_genre.sort_by(|a, b| b.value.cmp(&a.value));

    let average_price = if books.is_empty() {
        None
    } else {
        Some((total_value / Decimal::from(books.len())).round_dp(2))
    };

    BookStats {
        total: books.len() as i64,
        genres: by_genre.len() as i64,
        authors: authors.len() as i64,
        total_value,
        average_price,
        most_popular_genre: by_genre.first().map(|e| e.label.clone()),
        by_genre,
    }
}

fn borrowing_stats(records: &[BorrowRecord]) -> BorrowingStats {
    let count = |pred: fn(&BorrowStatus) -> bool| {
        records.iter().filter(|r| pred(&r.status)).count() as i64
    };

    let borrowed = count(|s| matches!(s, BorrowStatus::Borrowed));
    let returned = count(|s| matches!(s, BorrowStatus::Returned));
    let damaged = count(|s| matches!(s, BorrowStatus::Damaged | BorrowStatus::PartiallyDamaged));
    let lost = count(|s| matches!(s, BorrowStatus::Lost));

    let settled = borrowed + returned + damaged + lost;
    let return_rate = if settled == 0 {
        None
    } else {
        Some((returned as f64 / settled as f64 * 1000.0).round() / 10.0)
    };

    BorrowingStats {
        borrowed,
        returned,
        damaged,
        lost,
        return_rate,
    }
}
