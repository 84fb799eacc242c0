//! Product x account bindings (alias Z01): bulk replacement scoped by the
//! ERP product, listing, and removal.

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
    model::{
        api::{ErrorDto, ItemsDto, SuccessDto},
        app::AppState,
    },
    service::dictionary::DictionaryService,
};

/// Write product x account bindings
///
/// With an `ITENS` list the product's bindings are replaced wholesale;
/// without one a single binding is appended.
#[utoipa::path(
    post,
    path = "/api/isp/productxaccounts",
    tag = INTEGRATION_TAG,
    responses(
        (status = 201, description = "Bindings written", body = SuccessDto),
        (status = 400, description = "Items supplied without an ERP product", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product_accounts(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let payload = form::normalize_body(&body);
    let service = DictionaryService::new(&state.db, &state.mock);

    service.write_product_bindings(payload).await?;

    Ok((StatusCode::CREATED, Json(SuccessDto { success: true })))
}

/// Bindings for one ERP product
#[utoipa::path(
    get,
    path = "/api/isp/productxaccounts/{id}",
    tag = INTEGRATION_TAG,
    params(("id" = String, Path, description = "ERP product code")),
    responses(
        (status = 200, description = "Bindings for the product", body = ItemsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product_accounts(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = DictionaryService::new(&state.db, &state.mock);

    let items = service.product_bindings(&id).await?;

    Ok(Json(ItemsDto { items }))
}

/// Remove all bindings of one ERP product
#[utoipa::path(
    delete,
    path = "/api/isp/productxaccounts/{id}",
    tag = INTEGRATION_TAG,
    params(("id" = String, Path, description = "ERP product code")),
    responses(
        (status = 204, description = "Bindings removed"),
        (status = 404, description = "No bindings for the product", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product_accounts(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = DictionaryService::new(&state.db, &state.mock);

    service.delete_product_bindings(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
