//! Dictionary endpoints: schema discovery, generic browse, positioned
//! lookup, initializers, triggers, and schema synchronization.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

use crate::{
    controller::util::form,
    error::Error,
    model::{
        api::{BrowseDto, ErrorDto, SyncResultDto},
        app::AppState,
        dictionary::{AliasSchema, SyncRequest},
    },
    service::dictionary::DictionaryService,
};

pub static DICTIONARY_TAG: &str = "dictionary";

#[derive(Deserialize, IntoParams)]
pub struct BrowseQuery {
    /// 1-indexed page number, defaulting to 1.
    pub page: Option<String>,
    /// Page size, defaulting to 10.
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
    /// Substring filter matched against every column.
    pub filter: Option<String>,
    /// Order spec, e.g. `Z10_DESC DESC` or `-Z10_DESC`.
    #[serde(rename = "$order")]
    pub order: Option<String>,
}

/// Full alias schema: columns, folders, and agrups
#[utoipa::path(
    get,
    path = "/api/isp/dictionary/browse/columns/{alias}",
    tag = DICTIONARY_TAG,
    params(("alias" = String, Path, description = "Alias code, e.g. Z10")),
    responses(
        (status = 200, description = "Schema found", body = AliasSchema),
        (status = 404, description = "Alias not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_browse_columns(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = DictionaryService::new(&state.db, &state.mock);

    let schema = service.schema(&alias.to_uppercase()).await?;

    Ok(Json(schema))
}

/// Paginated rows for an alias
#[utoipa::path(
    get,
    path = "/api/isp/dictionary/browse/items/{alias}",
    tag = DICTIONARY_TAG,
    params(
        ("alias" = String, Path, description = "Alias code, e.g. Z10"),
        BrowseQuery
    ),
    responses(
        (status = 200, description = "Paginated row set", body = BrowseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_browse_items(
    State(state): State<AppState>,
    Path(alias): Path<String>,
    Query(query): Query<BrowseQuery>,
) -> Result<impl IntoResponse, Error> {
    let service = DictionaryService::new(&state.db, &state.mock);

    let page = service
        .browse(
            &alias.to_uppercase(),
            query.page.as_deref(),
            query.page_size.as_deref(),
            query.filter.as_deref().unwrap_or_default(),
            query.order.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(page.into_browse()))
}

/// Alias structure (same payload as browse columns)
#[utoipa::path(
    get,
    path = "/api/isp/dictionary/struct/{alias}",
    tag = DICTIONARY_TAG,
    params(("alias" = String, Path, description = "Alias code, e.g. Z10")),
    responses(
        (status = 200, description = "Schema found", body = AliasSchema),
        (status = 404, description = "Alias not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_struct(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = DictionaryService::new(&state.db, &state.mock);

    let schema = service.schema(&alias.to_uppercase()).await?;

    Ok(Json(schema))
}

/// Positioned record lookup from a URL-encoded JSON payload
#[utoipa::path(
    get,
    path = "/api/isp/dictionary/data/{alias}/{item}",
    tag = DICTIONARY_TAG,
    params(
        ("alias" = String, Path, description = "Alias code, e.g. Z10"),
        ("item" = String, Path, description = "URL-encoded JSON carrying the positioned record")
    ),
    responses(
        (status = 200, description = "Matched record, first-row fallback, or empty object"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_data(
    State(state): State<AppState>,
    Path((alias, item)): Path<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    let service = DictionaryService::new(&state.db, &state.mock);

    let record = service
        .positioned_data(&alias.to_uppercase(), &item)
        .await?;

    Ok(Json(record))
}

/// Default blank record shaped by the alias schema
#[utoipa::path(
    get,
    path = "/api/isp/dictionary/initializer/{alias}",
    tag = DICTIONARY_TAG,
    params(("alias" = String, Path, description = "Alias code, e.g. Z10")),
    responses(
        (status = 200, description = "Initializer record"),
        (status = 404, description = "Alias not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_initializer(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = DictionaryService::new(&state.db, &state.mock);

    let initial = service.initializer(&alias.to_uppercase()).await?;

    Ok(Json(initial))
}

/// Field trigger: echoes the normalized form payload
///
/// Extension point for field-level triggers; currently a passthrough.
#[utoipa::path(
    post,
    path = "/api/isp/dictionary/trigger/{field}",
    tag = DICTIONARY_TAG,
    params(("field" = String, Path, description = "Field the trigger fired on")),
    responses(
        (status = 200, description = "Normalized payload")
    ),
)]
pub async fn execute_trigger(
    Path(_field): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    Ok(Json(form::normalize_body(&body)))
}

/// Synchronize alias schemas into the configuration tables
#[utoipa::path(
    post,
    path = "/api/isp/dictionary/sync",
    tag = DICTIONARY_TAG,
    request_body = SyncRequest,
    responses(
        (status = 200, description = "Synchronization result", body = SyncResultDto),
        (status = 400, description = "No schemas supplied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sync_schemas(
    State(state): State<AppState>,
    Json(request): Json<SyncRequest>,
) -> Result<impl IntoResponse, Error> {
    let service = DictionaryService::new(&state.db, &state.mock);

    let result = service.sync(request).await?;

    Ok((StatusCode::OK, Json(result)))
}
