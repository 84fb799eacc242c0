//! Response DTOs shared across the API surface.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::dictionary::AliasRow;

/// The response when an error occurs with an API request.
///
/// Errors are always structured: a machine-readable code, a human message,
/// and optionally the underlying diagnostic detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Machine-readable error code, e.g. `ALIAS_NOT_FOUND`.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Underlying diagnostic detail, when available.
    #[serde(rename = "detailedMessage", skip_serializing_if = "Option::is_none")]
    pub detailed_message: Option<String>,
}

/// Paginated collection reporting the exact total row count.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CollectionDto {
    #[serde(rename = "hasNext")]
    pub has_next: bool,
    pub total: u64,
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<AliasRow>,
}

/// Paginated collection reporting the count of rows strictly after the page.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BrowseDto {
    #[serde(rename = "hasNext")]
    pub has_next: bool,
    #[serde(rename = "remainingRecords")]
    pub remaining_records: u64,
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<AliasRow>,
}

/// Unpaginated item set, used by the product x account listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemsDto {
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<AliasRow>,
}

/// Generic acknowledgement for bulk writes.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessDto {
    pub success: bool,
}

/// Child row sets of one integrated order.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct OrderChildrenDto {
    #[serde(rename = "Z03")]
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<AliasRow>,
    #[serde(rename = "Z05")]
    #[schema(value_type = Vec<Object>)]
    pub payments: Vec<AliasRow>,
    #[serde(rename = "Z06")]
    #[schema(value_type = Vec<Object>)]
    pub invoices: Vec<AliasRow>,
}

/// Fixed-shape customer lookup row (SA1 projection).
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomerLookupDto {
    pub a1_cod: String,
    pub a1_loja: String,
    pub a1_nome: String,
}

/// Fixed-shape integrated-order lookup projection.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderLookupDto {
    pub z02_cod: String,
    pub z02_idped: String,
}

/// Per-alias counts written by one schema synchronization.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SyncAliasDto {
    pub alias: String,
    pub fields: usize,
    pub folders: usize,
    pub agrups: usize,
}

/// Result of a dictionary schema synchronization call.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SyncResultDto {
    /// Number of aliases synchronized.
    pub synced: usize,
    pub results: Vec<SyncAliasDto>,
}
