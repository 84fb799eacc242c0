//! Point CRUD for marketplace accounts (alias Z00).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    controller::{util::form, INTEGRATION_TAG},
    error::Error,
    model::{api::ErrorDto, app::AppState},
    service::dictionary::DictionaryService,
};

/// Create a marketplace account; a missing code is generated with the ACC prefix
#[utoipa::path(
    post,
    path = "/api/isp/marketplaces/accounts",
    tag = INTEGRATION_TAG,
    responses(
        (status = 201, description = "Marketplace account created"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_marketplace_account(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let payload = form::normalize_body(&body);
    let service = DictionaryService::new(&state.db, &state.mock);

    let account = service
        .create_record(
            "Z00",
            "Z00_COD",
            payload,
            |count| format!("ACC{:03}", count + 1),
            None,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// Update a marketplace account by code
#[utoipa::path(
    put,
    path = "/api/isp/marketplaces/accounts/{id}",
    tag = INTEGRATION_TAG,
    params(("id" = String, Path, description = "Marketplace account code")),
    responses(
        (status = 200, description = "Marketplace account updated"),
        (status = 404, description = "Marketplace account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_marketplace_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let payload = form::normalize_body(&body);
    let service = DictionaryService::new(&state.db, &state.mock);

    let account = service
        .update_record("Z00", "Z00_COD", &id, payload, None, "Marketplace account")
        .await?;

    Ok(Json(account))
}

/// Delete a marketplace account by code
#[utoipa::path(
    delete,
    path = "/api/isp/marketplaces/accounts/{id}",
    tag = INTEGRATION_TAG,
    params(("id" = String, Path, description = "Marketplace account code")),
    responses(
        (status = 204, description = "Marketplace account deleted"),
        (status = 404, description = "Marketplace account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_marketplace_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = DictionaryService::new(&state.db, &state.mock);

    service
        .delete_record("Z00", "Z00_COD", &id, "Marketplace account")
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
