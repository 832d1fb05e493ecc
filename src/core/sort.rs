//! Stable transaction ordering by a caller-chosen key.

use crate::entities::TransactionModel;
use std::cmp::Ordering;

/// The supported sort orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Calendar date, latest first (the default listing order)
    #[default]
    DateDesc,
    /// Calendar date, earliest first
    DateAsc,
    /// Numeric amount, largest first
    AmountDesc,
    /// Numeric amount, smallest first
    AmountAsc,
    /// Description, lexicographic ascending (case-insensitive)
    DescriptionAsc,
    /// Description, lexicographic descending
    DescriptionDesc,
}

impl SortKey {
    /// Parses a sort key string; `None` for unrecognized keys.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "date-desc" => Some(Self::DateDesc),
            "date-asc" => Some(Self::DateAsc),
            "amount-desc" => Some(Self::AmountDesc),
            "amount-asc" => Some(Self::AmountAsc),
            "desc-asc" => Some(Self::DescriptionAsc),
            "desc-desc" => Some(Self::DescriptionDesc),
            _ => None,
        }
    }
}

/// Returns a new sequence ordered by `key`; the input is never mutated.
///
/// Unrecognized keys return the input order unchanged (no error). The
/// sort is stable, so ties keep their input-relative order - there is no
/// secondary key.
#[must_use]
pub fn sort_transactions(transactions: &[TransactionModel], key: &str) -> Vec<TransactionModel> {
    let mut sorted = transactions.to_vec();
    let Some(key) = SortKey::parse(key) else {
        return sorted;
    };
    sorted.sort_by(|a, b| compare(a, b, key));
    sorted
}

fn compare(a: &TransactionModel, b: &TransactionModel, key: SortKey) -> Ordering {
    match key {
        SortKey::DateDesc => b.date.cmp(&a.date),
        SortKey::DateAsc => a.date.cmp(&b.date),
        SortKey::AmountDesc => b.amount.cmp(&a.amount),
        SortKey::AmountAsc => a.amount.cmp(&b.amount),
        SortKey::DescriptionAsc => compare_descriptions(a, b),
        SortKey::DescriptionDesc => compare_descriptions(b, a),
    }
}

// Case-insensitive comparison stands in for locale-aware collation.
fn compare_descriptions(a: &TransactionModel, b: &TransactionModel) -> Ordering {
    a.description
        .to_lowercase()
        .cmp(&b.description.to_lowercase())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::make_transaction;

    fn sample() -> Vec<TransactionModel> {
        vec![
            make_transaction("t1", "Lunch", "8.00", "Food", "2024-03-02"),
            make_transaction("t2", "bus ticket", "12.50", "Transport", "2024-03-05"),
            make_transaction("t3", "Paperback", "8.00", "Books", "2024-03-01"),
        ]
    }

    #[test]
    fn test_default_key_is_date_desc() {
        assert_eq!(SortKey::default(), SortKey::DateDesc);
    }

    #[test]
    fn test_sort_never_mutates_input() {
        let input = sample();
        let before = input.clone();
        let _ = sort_transactions(&input, "amount-asc");
        assert_eq!(input, before);
    }

    #[test]
    fn test_date_orderings() {
        let ids = |key: &str| -> Vec<String> {
            sort_transactions(&sample(), key)
                .into_iter()
                .map(|t| t.id)
                .collect()
        };
        assert_eq!(ids("date-desc"), ["t2", "t1", "t3"]);
        assert_eq!(ids("date-asc"), ["t3", "t1", "t2"]);
    }

    #[test]
    fn test_amount_asc_is_stable_on_ties() {
        let sorted = sort_transactions(&sample(), "amount-asc");
        let amounts: Vec<String> = sorted.iter().map(|t| t.amount.to_string()).collect();
        assert_eq!(amounts, ["8.00", "8.00", "12.50"]);
        // t1 and t3 tie on amount; input-relative order is kept
        assert_eq!(sorted[0].id, "t1");
        assert_eq!(sorted[1].id, "t3");
    }

    #[test]
    fn test_description_ordering_ignores_case() {
        let sorted = sort_transactions(&sample(), "desc-asc");
        let ids: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["t2", "t1", "t3"]);

        let sorted = sort_transactions(&sample(), "desc-desc");
        let ids: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["t3", "t1", "t2"]);
    }

    #[test]
    fn test_unrecognized_key_keeps_input_order() {
        let sorted = sort_transactions(&sample(), "shuffle");
        let ids: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["t1", "t2", "t3"]);
    }
}
