//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the two persisted documents: the transaction
//! collection and the singleton settings row.

pub mod settings;
pub mod transaction;

// Re-export specific types to avoid conflicts
pub use settings::{Column as SettingsColumn, Entity as SettingsEntity, Model as SettingsModel};
pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Model as TransactionModel,
};
