//! Persistence adapter - document-style load/save over the database.
//!
//! The store treats persistence as two logical documents: the transaction
//! list and the settings record. Every save overwrites the prior value of
//! its document; corrupt or unreadable stored data never propagates a
//! failure upward - it degrades to "absent" and the caller falls back to
//! defaults.

pub mod settings;
pub mod transactions;

pub use settings::{load_settings, save_settings, seed_initial_settings};
pub use transactions::{load_transactions, save_transactions};

use crate::entities::{SettingsEntity, Transaction};
use crate::errors::Result;
use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};

/// Erases both persisted documents.
///
/// In-memory state is not touched; a fresh
/// [`Store::initialize`](crate::core::store::Store::initialize) afterward
/// produces defaults.
pub async fn clear_all(db: &DatabaseConnection) -> Result<()> {
    let txn = db.begin().await?;
    Transaction::delete_many().exec(&txn).await?;
    SettingsEntity::delete_many().exec(&txn).await?;
    txn.commit().await?;
    Ok(())
}
