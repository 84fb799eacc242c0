//! Point CRUD for shipping programs (alias Z11).

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

/// Create a shipping program; a missing code is generated with the ENV prefix
#[utoipa::path(
    post,
    path = "/api/isp/shipping/program",
    tag = INTEGRATION_TAG,
    responses(
        (status = 201, description = "Shipping program created"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_shipping_program(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let payload = form::normalize_body(&body);
    let service = DictionaryService::new(&state.db, &state.mock);

    let program = service
        .create_record(
            "Z11",
            "Z11_COD",
            payload,
            |count| format!("ENV{:03}", count + 1),
            None,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(program)))
}

/// Update a shipping program by code
#[utoipa::path(
    put,
    path = "/api/isp/shipping/program/{id}",
    tag = INTEGRATION_TAG,
    params(("id" = String, Path, description = "Shipping program code")),
    responses(
        (status = 200, description = "Shipping program updated"),
        (status = 404, description = "Shipping program not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_shipping_program(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let payload = form::normalize_body(&body);
    let service = DictionaryService::new(&state.db, &state.mock);

    let program = service
        .update_record("Z11", "Z11_COD", &id, payload, None, "Shipping program")
        .await?;

    Ok(Json(program))
}

/// Delete a shipping program by code
#[utoipa::path(
    delete,
    path = "/api/isp/shipping/program/{id}",
    tag = INTEGRATION_TAG,
    params(("id" = String, Path, description = "Shipping program code")),
    responses(
        (status = 204, description = "Shipping program deleted"),
        (status = 404, description = "Shipping program not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_shipping_program(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = DictionaryService::new(&state.db, &state.mock);

    service
        .delete_record("Z11", "Z11_COD", &id, "Shipping program")
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
