//! Business logic services

pub mod catalog;
pub mod circulation;
pub mod history;
pub mod stats;

use std::sync::Arc;

use crate::{
    config::AppConfig,
    repository::{BookStore, BorrowStore, Repository},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub circulation: circulation::CirculationService,
    pub history: history::HistoryService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over the given stores
    pub fn new(
        books: Arc<dyn BookStore>,
        borrows: Arc<dyn BorrowStore>,
        config: &AppConfig,
    ) -> Self {
        Self {
            catalog: catalog::CatalogService::new(
                books.clone(),
                borrows.clone(),
                config.catalog.page_size,
            ),
            circulation: circulation::CirculationService::new(books.clone(), borrows.clone()),
            history: history::HistoryService::new(
                borrows.clone(),
                config.circulation.history_page_size,
            ),
            stats: stats::StatsService::new(books, borrows),
        }
    }

    /// Create all services backed by the Postgres repository
    pub fn from_repository(repository: Repository, config: &AppConfig) -> Self {
        Self::new(
            Arc::new(repository.books),
            Arc::new(repository.borrows),
            config,
        )
    }
}

/// One page of an already filtered and ordered list
#[derive(Debug)]
pub(crate) struct Paged<T> {
    pub items: Vec<T>,
    /// Length of the whole list
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

/// Cut page `page` (1-based, default 1) out of `items`.
///
/// `per_page` falls back to `default_per_page` when absent or zero. A page
/// past the end is empty.
pub(crate) fn paginate<T>(
    items: Vec<T>,
    page: Option<usize>,
    per_page: Option<usize>,
    default_per_page: usize,
) -> Paged<T> {
    let per_page = per_page
        .filter(|n| *n > 0)
        .unwrap_or(default_per_page)
        .max(1);
    let page = page.unwrap_or(1).max(1);
    let total = items.len();

    let items = items
        .into_iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .collect();

    Paged {
        items,
        total,
        page,
        per_page,
        total_pages: total.div_ceil(per_page),
    }
}
