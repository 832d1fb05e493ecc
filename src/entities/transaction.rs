//! Transaction entity - A single recorded monetary event.
//!
//! This model is also the import/export record: it serializes with the
//! payload field names (`createdAt`/`updatedAt`) and tolerates payloads
//! that lack the timestamps, which the store never backfills.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Opaque unique identifier, assigned at creation and immutable
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Human-readable description of the transaction
    pub description: String,
    /// Positive decimal amount with at most 2 fractional digits
    pub amount: Decimal,
    /// Category label; drawn from the settings list at entry time
    pub category: String,
    /// Calendar date of the transaction (`YYYY-MM-DD`)
    pub date: Date,
    /// When the record was created; stamped once by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTimeUtc>,
    /// When the record was last modified; refreshed on every update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTimeUtc>,
}

/// Transactions have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
