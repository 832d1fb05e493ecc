//! Core business logic - framework-agnostic store, validation, search,
//! sort, reporting, and import/export operations.
//!
//! The presentation layer (whatever renders cards, forms, and toasts)
//! drives these modules: mutate the [`store::Store`], re-read a snapshot,
//! apply [`search`] then [`sort`], and hand the result plus a
//! [`report::Summary`] to the renderer.

/// Import/export payload handling
pub mod exchange;
/// Aggregate spending statistics and budget-cap status
pub mod report;
/// Fail-open regex search, filtering, and highlighting
pub mod search;
/// Domain settings record, defaults, and merge semantics
pub mod settings;
/// Stable transaction ordering by key
pub mod sort;
/// The authoritative transaction/settings store
pub mod store;
/// Pure per-field input validators
pub mod validate;
