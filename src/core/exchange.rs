//! JSON export and import of the transaction collection.
//!
//! Export serializes the full collection as pretty-printed JSON with
//! camelCase keys. Import is all-or-nothing: the payload is shape-checked
//! element by element and rejected with a single aggregate message before
//! anything is applied.

use crate::entities::TransactionModel;
use crate::errors::{Error, Result};
use chrono::NaiveDate;
use serde_json::Value;

/// Serializes `transactions` as a pretty-printed JSON array.
pub fn export_transactions(transactions: &[TransactionModel]) -> Result<String> {
    serde_json::to_string_pretty(transactions).map_err(Into::into)
}

/// Suggested download name for an export taken on `today`.
#[must_use]
pub fn export_file_name(today: NaiveDate) -> String {
    format!("finance-export-{}.json", today.format("%Y-%m-%d"))
}

/// Parses and shape-checks an import payload.
///
/// The whole payload is rejected when it is not valid JSON, not an
/// array, or any element lacks the required fields. A `0` amount passes
/// the shape check; import does not re-run field validation.
pub fn import_transactions(payload: &str) -> Result<Vec<TransactionModel>> {
    let value: Value =
        serde_json::from_str(payload).map_err(|_| Error::import("Invalid JSON file"))?;
    let Value::Array(items) = &value else {
        return Err(Error::import("Data must be an array"));
    };
    if !items.iter().all(has_transaction_shape) {
        return Err(Error::import("Invalid transaction structure"));
    }
    serde_json::from_value(value).map_err(|_| Error::import("Invalid transaction structure"))
}

// Required fields: non-empty id/description/category/date strings plus a
// present amount. Timestamps are optional and carried verbatim.
fn has_transaction_shape(item: &Value) -> bool {
    let non_empty = |key: &str| {
        item.get(key)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty())
    };
    item.is_object()
        && non_empty("id")
        && non_empty("description")
        && non_empty("category")
        && non_empty("date")
        && item.get("amount").is_some_and(|v| !v.is_null())
}
