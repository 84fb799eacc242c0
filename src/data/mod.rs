//! Persistence access for the dictionary subsystem.
//!
//! Repositories wrap sea-orm queries; the alias row adapter speaks to
//! dynamically-named tables through runtime-built statements. Both recover
//! "table does not exist" conditions through [`is_missing_table`] so callers
//! can treat unprovisioned tables as empty datasets.

pub mod alias_row;
pub mod dict_schema;
pub mod mock;
pub mod store;

use sea_orm::DbErr;

/// Detects the undefined-relation error class across backends.
///
/// Postgres reports SQLSTATE `42P01` ("relation ... does not exist"); SQLite
/// reports "no such table". Every missing-table decision in the crate goes
/// through this single predicate.
pub fn is_missing_table(err: &DbErr) -> bool {
    let text = err.to_string();

    text.contains("42P01")
        || (text.contains("relation") && text.contains("does not exist"))
        || text.contains("no such table")
}
