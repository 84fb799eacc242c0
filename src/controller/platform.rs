//! Point CRUD for marketplace platforms (alias Z10).

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

/// Create a platform; a missing code is generated with the PLAT prefix
#[utoipa::path(
    post,
    path = "/api/isp/platforms",
    tag = INTEGRATION_TAG,
    responses(
        (status = 201, description = "Platform created"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_platform(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let payload = form::normalize_body(&body);
    let service = DictionaryService::new(&state.db, &state.mock);

    let platform = service
        .create_record(
            "Z10",
            "Z10_COD",
            payload,
            |count| format!("PLAT{:03}", count + 1),
            Some("Z10_DTALT"),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(platform)))
}

/// Update a platform by code
#[utoipa::path(
    put,
    path = "/api/isp/platforms/{id}",
    tag = INTEGRATION_TAG,
    params(("id" = String, Path, description = "Platform code")),
    responses(
        (status = 200, description = "Platform updated"),
        (status = 404, description = "Platform not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_platform(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let payload = form::normalize_body(&body);
    let service = DictionaryService::new(&state.db, &state.mock);

    let platform = service
        .update_record("Z10", "Z10_COD", &id, payload, Some("Z10_DTALT"), "Platform")
        .await?;

    Ok(Json(platform))
}

/// Delete a platform by code
#[utoipa::path(
    delete,
    path = "/api/isp/platforms/{id}",
    tag = INTEGRATION_TAG,
    params(("id" = String, Path, description = "Platform code")),
    responses(
        (status = 204, description = "Platform deleted"),
        (status = 404, description = "Platform not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_platform(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = DictionaryService::new(&state.db, &state.mock);

    service
        .delete_record("Z10", "Z10_COD", &id, "Platform")
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
