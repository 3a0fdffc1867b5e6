//! Read receipt summaries

use msgkit_core::{ReadReceipt, UserId};
use serde::Serialize;

/// Who has seen a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ReceiptSummary {
    Sent,
    Seen {
        /// First readers by read time, at most two
        names: Vec<String>,
        /// Readers beyond `names`
        others: usize,
    },
}

impl ReceiptSummary {
    /// Display label: `"Sent"`, `"Seen by A"`, `"Seen by A and B"`,
    /// `"Seen by A, B and 3 others"`
    pub fn label(&self) -> String {
        match self {
            Self::Sent => "Sent".to_string(),
            Self::Seen { names, others } => match (names.as_slice(), *others) {
                ([first, second], 0) => format!("Seen by {first} and {second}"),
                (_, 0) => format!("Seen by {}", names.join(", ")),
                (_, 1) => format!("Seen by {} and 1 other", names.join(", ")),
                (_, n) => format!("Seen by {} and {n} others", names.join(", ")),
            },
        }
    }

    /// Total number of readers
    pub fn reader_count(&self) -> usize {
        match self {
            Self::Sent => 0,
            Self::Seen { names, others } => names.len() + others,
        }
    }
}

/// Summarize receipts for a message written by `author`.
///
/// The author's own receipt and repeated receipts from one user are
/// ignored; each reader counts once at their earliest read time.
pub fn summarize_receipts(receipts: &[ReadReceipt], author: &UserId) -> ReceiptSummary {
    let mut readers: Vec<&ReadReceipt> = Vec::new();
    for receipt in receipts.iter().filter(|r| &r.user_id != author) {
        match readers.iter_mut().find(|r| r.user_id == receipt.user_id) {
            Some(existing) if receipt.read_at < existing.read_at => *existing = receipt,
            Some(_) => {}
            None => readers.push(receipt),
        }
    }

    if readers.is_empty() {
        return ReceiptSummary::Sent;
    }

    readers.sort_by_key(|r| r.read_at);
    let names: Vec<String> = readers
        .iter()
        .take(2)
        .map(|r| r.display_name().to_string())
        .collect();
    ReceiptSummary::Seen {
        others: readers.len() - names.len(),
        names,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn at(minute: i64) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap() + Duration::minutes(minute)
    }

    fn author() -> UserId {
        UserId::new("me")
    }

    #[test]
    fn test_sent_when_only_author_read() {
        let receipts = vec![ReadReceipt::new("me", at(0))];
        let summary = summarize_receipts(&receipts, &author());
        assert_eq!(summary, ReceiptSummary::Sent);
        assert_eq!(summary.label(), "Sent");
        assert_eq!(summarize_receipts(&[], &author()).reader_count(), 0);
    }

    #[test]
    fn test_single_reader() {
        let receipts = vec![ReadReceipt::new("u1", at(1)).with_user_name("Ann")];
        assert_eq!(summarize_receipts(&receipts, &author()).label(), "Seen by Ann");
    }

    #[test]
    fn test_two_readers_ordered_by_time() {
        let receipts = vec![
            ReadReceipt::new("u1", at(5)).with_user_name("Ann"),
            ReadReceipt::new("u2", at(1)).with_user_name("Ben"),
        ];
        assert_eq!(summarize_receipts(&receipts, &author()).label(), "Seen by Ben and Ann");
    }

    #[test]
    fn test_many_readers() {
        let receipts = vec![
            ReadReceipt::new("u1", at(1)).with_user_name("Ann"),
            ReadReceipt::new("u2", at(2)),
            ReadReceipt::new("u3", at(3)).with_user_name("Cy"),
            ReadReceipt::new("u4", at(4)).with_user_name("Di"),
            ReadReceipt::new("me", at(0)),
        ];
        let summary = summarize_receipts(&receipts, &author());
        assert_eq!(summary.label(), "Seen by Ann, u2 and 2 others");
        assert_eq!(summary.reader_count(), 4);
    }

    #[test]
    fn test_one_other() {
        let receipts = vec![
            ReadReceipt::new("u1", at(1)).with_user_name("Ann"),
            ReadReceipt::new("u2", at(2)).with_user_name("Ben"),
            ReadReceipt::new("u3", at(3)).with_user_name("Cy"),
        ];
        assert_eq!(summarize_receipts(&receipts, &author()).label(), "Seen by Ann, Ben and 1 other");
    }

    #[test]
    fn test_duplicate_receipts_count_once() {
        let receipts = vec![
            ReadReceipt::new("u1", at(9)).with_user_name("Ann"),
            ReadReceipt::new("u2", at(5)).with_user_name("Ben"),
            ReadReceipt::new("u1", at(1)).with_user_name("Ann"),
        ];
        let summary = summarize_receipts(&receipts, &author());
        assert_eq!(summary.reader_count(), 2);
        assert_eq!(summary.label(), "Seen by Ann and Ben");
    }
}
