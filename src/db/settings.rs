//! Settings document persistence.
//!
//! Settings live in a single fixed row; `rates` and `categories` are
//! JSON-encoded text columns. A corrupt column falls back to its default
//! with a warning - defaults are merged under whatever part of the
//! document is still readable.

use crate::core::settings::Settings;
use crate::entities::{SettingsEntity, SettingsModel, settings};
use crate::errors::Result;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::warn;

/// Identifier of the singleton settings row.
const SETTINGS_ROW_ID: i32 = 1;

/// Loads the persisted settings document; `None` when never saved.
///
/// An unreadable row is treated as absent; corrupt JSON columns fall
/// back to their defaults individually.
pub async fn load_settings(db: &DatabaseConnection) -> Result<Option<Settings>> {
    let row = match SettingsEntity::find_by_id(SETTINGS_ROW_ID).one(db).await {
        Ok(row) => row,
        Err(err) => {
            warn!("Stored settings are unreadable, treating as absent: {err}");
            None
        }
    };
    Ok(row.map(decode_row))
}

fn decode_row(row: SettingsModel) -> Settings {
    let defaults = Settings::default();
    let rates = serde_json::from_str(&row.rates).unwrap_or_else(|err| {
        warn!("Corrupt rates column, falling back to defaults: {err}");
        defaults.rates
    });
    let categories = serde_json::from_str(&row.categories).unwrap_or_else(|err| {
        warn!("Corrupt categories column, falling back to defaults: {err}");
        defaults.categories
    });
    Settings {
        currency: row.currency,
        rates,
        budget_cap: row.budget_cap,
        categories,
    }
}

/// Durably overwrites the settings document.
pub async fn save_settings(db: &DatabaseConnection, settings: &Settings) -> Result<()> {
    let row = settings::ActiveModel {
        id: Set(SETTINGS_ROW_ID),
        currency: Set(settings.currency.clone()),
        budget_cap: Set(settings.budget_cap),
        rates: Set(serde_json::to_string(&settings.rates)?),
        categories: Set(serde_json::to_string(&settings.categories)?),
        updated_at: Set(chrono::Utc::now()),
    };
    SettingsEntity::insert(row)
        .on_conflict(
            OnConflict::column(settings::Column::Id)
                .update_columns([
                    settings::Column::Currency,
                    settings::Column::BudgetCap,
                    settings::Column::Rates,
                    settings::Column::Categories,
                    settings::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(db)
        .await?;
    Ok(())
}

/// Writes `settings` only when no settings document exists yet.
/// Returns whether a seed happened.
pub async fn seed_initial_settings(db: &DatabaseConnection, settings: &Settings) -> Result<bool> {
    if SettingsEntity::find_by_id(SETTINGS_ROW_ID)
        .one(db)
        .await?
        .is_some()
    {
        return Ok(false);
    }
    save_settings(db, settings).await?;
    Ok(true)
}
