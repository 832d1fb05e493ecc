//! Shared test utilities for `spendlog`.
//!
//! This module provides common helper functions for setting up test
//! databases, session stores, and transaction values with sensible
//! defaults.

#![allow(clippy::unwrap_used)]

use crate::core::store::{Store, TransactionDraft};
use crate::entities::TransactionModel;
use crate::errors::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use std::str::FromStr;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Sets up a complete test environment with an initialized store.
/// Returns (store, db) for common test scenarios.
pub async fn setup_store() -> Result<(Store, DatabaseConnection)> {
    let db = setup_test_db().await?;
    let store = Store::initialize(db.clone()).await?;
    Ok((store, db))
}

/// Builds a transaction with a fixed noon timestamp on its own date, so
/// values compare equal after a persistence round trip.
///
/// `amount` and `date` are given as strings for test readability and
/// parsed here.
#[must_use]
pub fn make_transaction(
    id: &str,
    description: &str,
    amount: &str,
    category: &str,
    date: &str,
) -> TransactionModel {
    let date = NaiveDate::from_str(date).unwrap();
    let stamp = date.and_hms_opt(12, 0, 0).unwrap().and_utc();
    TransactionModel {
        id: id.to_string(),
        description: description.to_string(),
        amount: Decimal::from_str(amount).unwrap(),
        category: category.to_string(),
        date,
        created_at: Some(stamp),
        updated_at: Some(stamp),
    }
}

/// Builds a [`TransactionDraft`] from string literals.
#[must_use]
pub fn draft(description: &str, amount: &str, category: &str, date: &str) -> TransactionDraft {
    TransactionDraft {
        description: description.to_string(),
        amount: Decimal::from_str(amount).unwrap(),
        category: category.to_string(),
        date: NaiveDate::from_str(date).unwrap(),
    }
}
