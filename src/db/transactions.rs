//! Transaction document persistence.
//!
//! The whole collection is written per save - a document overwrite, not a
//! row-level diff - so the durable state always mirrors the store's
//! in-memory list exactly.

use crate::entities::{Transaction, TransactionModel, transaction};
use crate::errors::Result;
use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use tracing::warn;

/// Loads the persisted transaction list.
///
/// Missing or unreadable data yields an empty list rather than an error;
/// the caller starts from defaults.
pub async fn load_transactions(db: &DatabaseConnection) -> Result<Vec<TransactionModel>> {
    match Transaction::find().all(db).await {
        Ok(list) => Ok(list),
        Err(err) => {
            warn!("Stored transactions are unreadable, treating as absent: {err}");
            Ok(Vec::new())
        }
    }
}

/// Durably overwrites the transaction document with `transactions`.
///
/// Delete-all plus insert-all inside one database transaction, so a
/// failure leaves the prior document intact.
pub async fn save_transactions(
    db: &DatabaseConnection,
    transactions: &[TransactionModel],
) -> Result<()> {
    let txn = db.begin().await?;
    Transaction::delete_many().exec(&txn).await?;
    Transaction::insert_many(transactions.iter().map(to_row))
        .on_empty_do_nothing()
        .exec(&txn)
        .await?;
    txn.commit().await?;
    Ok(())
}

fn to_row(t: &TransactionModel) -> transaction::ActiveModel {
    transaction::ActiveModel {
        id: Set(t.id.clone()),
        description: Set(t.description.clone()),
        amount: Set(t.amount),
        category: Set(t.category.clone()),
        date: Set(t.date),
        created_at: Set(t.created_at),
        updated_at: Set(t.updated_at),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{make_transaction, setup_test_db};

    #[tokio::test]
    async fn test_load_from_empty_database() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(load_transactions(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() -> Result<()> {
        let db = setup_test_db().await?;
        let transactions = vec![
            make_transaction("t1", "Lunch", "8.00", "Food", "2024-03-02"),
            make_transaction("t2", "Bus ticket", "12.50", "Transport", "2024-03-05"),
        ];
        save_transactions(&db, &transactions).await?;

        let mut loaded = load_transactions(&db).await?;
        loaded.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(loaded, transactions);
        Ok(())
    }

    #[tokio::test]
    async fn test_save_overwrites_prior_document() -> Result<()> {
        let db = setup_test_db().await?;
        save_transactions(
            &db,
            &[make_transaction("t1", "Lunch", "8.00", "Food", "2024-03-02")],
        )
        .await?;
        save_transactions(
            &db,
            &[make_transaction(
                "t2",
                "Bus ticket",
                "12.50",
                "Transport",
                "2024-03-05",
            )],
        )
        .await?;

        let loaded = load_transactions(&db).await?;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "t2");
        Ok(())
    }

    #[tokio::test]
    async fn test_save_empty_list_clears_document() -> Result<()> {
        let db = setup_test_db().await?;
        save_transactions(
            &db,
            &[make_transaction("t1", "Lunch", "8.00", "Food", "2024-03-02")],
        )
        .await?;
        save_transactions(&db, &[]).await?;
        assert!(load_transactions(&db).await?.is_empty());
        Ok(())
    }
}
