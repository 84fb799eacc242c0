use async_trait::async_trait;

use crate::{
    error::Error,
    model::{api::OrderChildrenDto, dictionary::AliasRow},
};

/// Uniform row access for one alias, implemented by the persistent adapter
/// and the in-memory fallback store.
///
/// Handlers and services only ever talk to this trait, so the two
/// implementations are interchangeable and share one behavioral contract:
/// uppercase column names on the way out, merge-style updates, and
/// affected-count deletes where zero means "not found".
#[async_trait]
pub trait AliasStore: Send + Sync {
    /// All rows currently backing the alias. An unprovisioned backing table
    /// is zero rows, not an error.
    async fn fetch_rows(&self, alias: &str) -> Result<Vec<AliasRow>, Error>;

    /// Appends one row and returns it as stored.
    async fn insert_row(&self, alias: &str, row: AliasRow) -> Result<AliasRow, Error>;

    /// Merges `patch` over every row whose `field` has the string form
    /// `value`; returns the updated rows (empty when nothing matched).
    async fn update_rows_by_field(
        &self,
        alias: &str,
        field: &str,
        value: &str,
        patch: AliasRow,
    ) -> Result<Vec<AliasRow>, Error>;

    /// Removes every row whose `field` has the string form `value` and
    /// reports how many were removed.
    async fn delete_rows_by_field(
        &self,
        alias: &str,
        field: &str,
        value: &str,
    ) -> Result<u64, Error>;

    /// The item/payment/invoice row sets of one integrated order, scoped by
    /// its composite parent key.
    async fn order_children(
        &self,
        id_ped: &str,
        id_int: &str,
    ) -> Result<OrderChildrenDto, Error>;
}
