//! The authoritative transaction/settings store.
//!
//! One [`Store`] exists per session. It owns the in-memory transaction
//! collection and settings record, hands out defensive snapshots, and
//! delegates durability to the persistence adapter: every mutating
//! operation performs exactly one persist call for the document it
//! touches and is durable before it returns. There is one logical actor,
//! so no locking - callers hold `&mut Store`.

use crate::core::settings::{Settings, SettingsPatch};
use crate::core::validate;
use crate::db;
use crate::entities::TransactionModel;
use crate::errors::Result;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use tracing::debug;

/// Field values for a new transaction, already validated and parsed.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    /// Description text
    pub description: String,
    /// Positive decimal amount
    pub amount: Decimal,
    /// Category label from the settings list
    pub category: String,
    /// Calendar date of the transaction
    pub date: NaiveDate,
}

/// A partial transaction update; `None` fields are left untouched.
/// Identity and timestamps are store-managed and cannot appear here.
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    /// New description, if changing
    pub description: Option<String>,
    /// New amount, if changing
    pub amount: Option<Decimal>,
    /// New category, if changing
    pub category: Option<String>,
    /// New date, if changing
    pub date: Option<NaiveDate>,
}

/// The session store: authoritative in-memory state plus its database
/// connection.
#[derive(Debug)]
pub struct Store {
    db: DatabaseConnection,
    transactions: Vec<TransactionModel>,
    settings: Settings,
    id_seq: u64,
}

impl Store {
    /// Loads both persisted documents and builds the session store.
    ///
    /// Absent (or unreadable) documents seed from defaults: an empty
    /// collection and [`Settings::default`]. Call once per session
    /// start; initializing again simply reloads the durable state.
    pub async fn initialize(db: DatabaseConnection) -> Result<Self> {
        let transactions = db::load_transactions(&db).await?;
        let settings = db::load_settings(&db).await?.unwrap_or_default();
        debug!(
            count = transactions.len(),
            "Store initialized from persisted documents"
        );
        Ok(Self {
            db,
            transactions,
            settings,
            id_seq: 0,
        })
    }

    /// Returns a defensive snapshot of the transaction collection.
    /// Mutating the snapshot never affects store-owned data.
    #[must_use]
    pub fn transactions(&self) -> Vec<TransactionModel> {
        self.transactions.clone()
    }

    /// Returns a snapshot copy of the current settings.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings.clone()
    }

    /// Creates a transaction from a draft: fresh unique id, creation and
    /// update timestamps stamped to now, appended and persisted.
    pub async fn add_transaction(&mut self, draft: TransactionDraft) -> Result<TransactionModel> {
        let now = Utc::now();
        let record = TransactionModel {
            id: self.next_id(),
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
            created_at: Some(now),
            updated_at: Some(now),
        };
        self.transactions.push(record.clone());
        db::save_transactions(&self.db, &self.transactions).await?;
        Ok(record)
    }

    /// Merges `patch` over the transaction with `id` and refreshes its
    /// update timestamp.
    ///
    /// Returns `Ok(None)` - absence, not an error - when no such record
    /// exists; the collection is left untouched and nothing is persisted.
    pub async fn update_transaction(
        &mut self,
        id: &str,
        patch: TransactionPatch,
    ) -> Result<Option<TransactionModel>> {
        let Some(record) = self.transactions.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        if let Some(description) = patch.description {
            record.description = description;
        }
        if let Some(amount) = patch.amount {
            record.amount = amount;
        }
        if let Some(category) = patch.category {
            record.category = category;
        }
        if let Some(date) = patch.date {
            record.date = date;
        }
        record.updated_at = Some(Utc::now());
        let updated = record.clone();
        db::save_transactions(&self.db, &self.transactions).await?;
        Ok(Some(updated))
    }

    /// Removes the transaction with `id` if present and persists.
    /// Deleting an absent id is a no-op, not an error.
    pub async fn delete_transaction(&mut self, id: &str) -> Result<()> {
        self.transactions.retain(|t| t.id != id);
        db::save_transactions(&self.db, &self.transactions).await
    }

    /// Bulk-replaces the entire collection (the import path) and
    /// persists. The payload is trusted verbatim; missing timestamps are
    /// not backfilled.
    pub async fn replace_all_transactions(
        &mut self,
        transactions: Vec<TransactionModel>,
    ) -> Result<()> {
        self.transactions = transactions;
        db::save_transactions(&self.db, &self.transactions).await
    }

    /// Merges a settings patch over the current record and persists.
    pub async fn update_settings(&mut self, patch: SettingsPatch) -> Result<Settings> {
        self.settings.merge(patch);
        db::save_settings(&self.db, &self.settings).await?;
        Ok(self.settings.clone())
    }

    /// Adds a free-text category to the settings list after validating
    /// the name pattern and rejecting duplicates; persists.
    pub async fn add_category(&mut self, name: &str) -> Result<Settings> {
        validate::validate_new_category(name, &self.settings.categories)?;
        self.settings.categories.push(name.to_string());
        db::save_settings(&self.db, &self.settings).await?;
        Ok(self.settings.clone())
    }

    /// Removes a category from the settings list and persists.
    /// Existing transactions tagged with the category are left as they
    /// are - removal only detaches the name from the list.
    pub async fn remove_category(&mut self, name: &str) -> Result<Settings> {
        self.settings.remove_category(name);
        db::save_settings(&self.db, &self.settings).await?;
        Ok(self.settings.clone())
    }

    /// Erases both persisted documents. The in-memory state is reset by
    /// a fresh [`Store::initialize`], which then produces defaults.
    pub async fn clear_all(&self) -> Result<()> {
        db::clear_all(&self.db).await
    }

    // Creation instant plus a monotonic sequence; the sequence breaks
    // same-millisecond collisions, and the membership check keeps ids
    // unique even against imported payloads.
    fn next_id(&mut self) -> String {
        loop {
            let id = format!("txn_{}_{}", Utc::now().timestamp_millis(), self.id_seq);
            self.id_seq += 1;
            if !self.transactions.iter().any(|t| t.id == id) {
                return id;
            }
        }
    }
}
