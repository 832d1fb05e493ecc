//! Settings entity - The singleton settings document.
//!
//! Exactly one row (`id = 1`) exists once settings have been persisted.
//! `rates` and `categories` are stored as JSON text; the persistence
//! adapter decodes them and falls back to defaults on corrupt data.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Settings database model - a single fixed-shape row
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    /// Row identifier; always `1` for the singleton document
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    /// Display currency code (e.g. `"USD"`)
    pub currency: String,
    /// Budget cap threshold for spend warnings
    pub budget_cap: Decimal,
    /// JSON object mapping currency codes to positive rate multipliers
    pub rates: String,
    /// JSON array of unique category names
    pub categories: String,
    /// When the settings document was last written
    pub updated_at: DateTimeUtc,
}

/// Settings have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
