//! Borrow history view

use std::sync::Arc;

use crate::{
    api::history::{HistoryEntry, HistoryResponse, StatusCounts},
    availability::{format_display_date, sort_by_status},
    error::AppResult,
    models::{BorrowRecord, BorrowStatus, HistoryQuery},
    repository::BorrowStore,
    services::paginate,
};

#[derive(Clone)]
pub struct HistoryService {
    borrows: Arc<dyn BorrowStore>,
    page_size: usize,
}

impl HistoryService {
    pub fn new(borrows: Arc<dyn BorrowStore>, page_size: usize) -> Self {
        Self {
            borrows,
            page_size: page_size.max(1),
        }
    }

    /// Filtered history, open and exceptional records first, one page at a time
    pub async fn history(&self, query: &HistoryQuery) -> AppResult<HistoryResponse> {
        let records = self.borrows.list().await?;
        let status_counts = count_statuses(&records);

        let mut filtered: Vec<BorrowRecord> =
            records.into_iter().filter(|r| query.matches(r)).collect();
        sort_by_status(&mut filtered);

        let page = paginate(filtered, query.page, query.per_page, self.page_size);
        let records = page
            .items
            .into_iter()
            .map(|record| HistoryEntry {
                issue_date_display: format_display_date(Some(record.issue_date)),
                return_date_display: format_display_date(record.return_date),
                record,
            })
            .collect();

        Ok(HistoryResponse {
            records,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
            status_counts,
        })
    }
}

/// Tab counters over the unfiltered history; damaged includes partially damaged
fn count_statuses(records: &[BorrowRecord]) -> StatusCounts {
    records.iter().fold(
        StatusCounts {
            all: records.len(),
            ..Default::default()
        },
        |mut counts, record| {
            match record.status {
                BorrowStatus::Borrowed => counts.borrowed += 1,
                BorrowStatus::Returned => counts.returned += 1,
                BorrowStatus::Lost => counts.lost += 1,
                BorrowStatus::Damaged | BorrowStatus::PartiallyDamaged => counts.damaged += 1,
                BorrowStatus::Pending | BorrowStatus::Unknown(_) => {}
            }
            counts
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{availability::tests::record, repository::MockBorrowStore};

    fn service(records: Vec<BorrowRecord>, page_size: usize) -> HistoryService {
        let mut borrows = MockBorrowStore::new();
        borrows.expect_list().returning(move || Ok(records.clone()));
        HistoryService::new(Arc::new(borrows), page_size)
    }

    #[tokio::test]
    async fn test_history_sorted_by_status_order() {
        let records = vec![
            record("L1", BorrowStatus::Lost),
            record("R1", BorrowStatus::Returned),
            record("B1", BorrowStatus::Borrowed),
            record("D1", BorrowStatus::PartiallyDamaged),
        ];
        let page = service(records, 20)
            .history(&HistoryQuery::default())
            .await
            .unwrap();

        let order: Vec<&str> = page
            .records
            .iter()
            .map(|e| e.record.acc_no.as_str())
            .collect();
        assert_eq!(order, vec!["B1", "R1", "D1", "L1"]);
        assert_eq!(page.records[0].return_date_display, "Not Returned");
        assert_eq!(page.records[0].issue_date_display, "02-06-2025");
        assert_eq!(page.status_counts.all, 4);
        assert_eq!(page.status_counts.damaged, 1);
    }

    #[tokio::test]
    async fn test_history_paginates_after_filtering() {
        let records: Vec<BorrowRecord> = (0..5)
            .map(|i| record(&format!("A{i}"), BorrowStatus::Returned))
            .chain(std::iter::once(record("B1", BorrowStatus::Borrowed)))
            .collect();
        let svc = service(records, 2);

        let query = HistoryQuery {
            status: Some("Returned".into()),
            page: Some(3),
            ..Default::default()
        };
        let page = svc.history(&query).await.unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.per_page, 2);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].record.acc_no, "A4");
        assert_eq!(page.status_counts.borrowed, 1);

        let past_end = HistoryQuery {
            page: Some(9),
            ..query
        };
        assert!(svc.history(&past_end).await.unwrap().records.is_empty());
    }
}
