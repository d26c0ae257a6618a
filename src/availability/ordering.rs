//! Status ordering and display helpers for history views

use chrono::NaiveDate;

use crate::models::{BorrowRecord, BorrowStatus};

/// Sort key that surfaces open and exceptional records first.
pub fn status_order_key(status: &BorrowStatus) -> u8 {
    match status {
        BorrowStatus::Borrowed => 0,
        BorrowStatus::Returned => 1,
        BorrowStatus::PartiallyDamaged => 2,
        BorrowStatus::Damaged => 3,
        BorrowStatus::Lost => 4,
        BorrowStatus::Pending | BorrowStatus::Unknown(_) => 5,
    }
}

/// Stable sort by `status_order_key`; equal keys keep input order.
pub fn sort_by_status(records: &mut [BorrowRecord]) {
    records.sort_by_key(|r| status_order_key(&r.status));
}

/// `DD-MM-YYYY`, or `Not Returned` for a missing date
pub fn format_display_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d-%m-%Y").to_string(),
        None => "Not Returned".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::tests::record;

    #[test]
    fn test_status_order_table() {
        let ordered = [
            BorrowStatus::Borrowed,
            BorrowStatus::Returned,
            BorrowStatus::PartiallyDamaged,
            BorrowStatus::Damaged,
            BorrowStatus::Lost,
            BorrowStatus::Pending,
        ];
        let keys: Vec<u8> = ordered.iter().map(status_order_key).collect();
        assert_eq!(keys, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(status_order_key(&BorrowStatus::Unknown("x".into())), 5);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut records = vec![
            record("L1", BorrowStatus::Lost),
            record("R1", BorrowStatus::Returned),
            record("B1", BorrowStatus::Borrowed),
            record("R2", BorrowStatus::Returned),
            record("P1", BorrowStatus::Pending),
            record("B2", BorrowStatus::Borrowed),
        ];
        sort_by_status(&mut records);
        let order: Vec<&str> = records.iter().map(|r| r.acc_no.as_str()).collect();
        assert_eq!(order, vec!["B1", "B2", "R1", "R2", "L1", "P1"]);
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(
            format_display_date(NaiveDate::from_ymd_opt(2025, 1, 9)),
            "09-01-2025"
        );
        assert_eq!(format_display_date(None), "Not Returned");
    }
}
