//! Fixed-shape auxiliary lookups: the SA1 customer projection and the Z02
//! integrated-order projection. Unknown tables answer with an empty list.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

use crate::{
    error::Error,
    model::{
        api::{CustomerLookupDto, ErrorDto, OrderLookupDto},
        app::AppState,
    },
    service::dictionary::DictionaryService,
};

pub static LOOKUP_TAG: &str = "lookup";

#[derive(Deserialize, IntoParams)]
pub struct LookupQuery {
    /// Substring filter matched against the projected fields.
    pub filter: Option<String>,
}

/// Auxiliary lookup rows for one table
#[utoipa::path(
    get,
    path = "/api/isp/lookup/{table}",
    tag = LOOKUP_TAG,
    params(
        ("table" = String, Path, description = "Lookup table, SA1 or Z02"),
        LookupQuery
    ),
    responses(
        (status = 200, description = "Lookup rows"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lookup(
    State(state): State<AppState>,
    Path(table): Path<String>,
    Query(query): Query<LookupQuery>,
) -> Result<impl IntoResponse, Error> {
    let service = DictionaryService::new(&state.db, &state.mock);
    let filter = query.filter.unwrap_or_default();

    Ok(match table.to_uppercase().as_str() {
        "SA1" => Json(service.customers(&filter).await?).into_response(),
        "Z02" => Json(service.order_lookup(&filter).await?).into_response(),
        _ => Json(Vec::<Value>::new()).into_response(),
    })
}

/// Auxiliary lookup by identifier
#[utoipa::path(
    get,
    path = "/api/isp/lookup/{table}/{id}",
    tag = LOOKUP_TAG,
    params(
        ("table" = String, Path, description = "Lookup table, SA1 or Z02"),
        ("id" = String, Path, description = "Row identifier")
    ),
    responses(
        (status = 200, description = "Matching lookup rows (zero or one)", body = Vec<CustomerLookupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lookup_by_id(
    State(state): State<AppState>,
    Path((table, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    let service = DictionaryService::new(&state.db, &state.mock);

    Ok(match table.to_uppercase().as_str() {
        "SA1" => Json(service.customer_by_id(&id).await?).into_response(),
        "Z02" => Json(service.order_lookup_by_id(&id).await?).into_response(),
        _ => Json(Vec::<OrderLookupDto>::new()).into_response(),
    })
}
