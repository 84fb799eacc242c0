//! Integrated-order child aggregation: items, payments, and invoices scoped
//! by the composite order/integration key.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    controller::INTEGRATION_TAG,
    error::Error,
    model::{
        api::{ErrorDto, OrderChildrenDto},
        app::AppState,
    },
    service::dictionary::DictionaryService,
};

/// Child row sets of one integrated order
#[utoipa::path(
    get,
    path = "/api/isp/integratedorders/{idPed}/{idInt}",
    tag = INTEGRATION_TAG,
    params(
        ("idPed" = String, Path, description = "Order identifier"),
        ("idInt" = String, Path, description = "Integration identifier")
    ),
    responses(
        (status = 200, description = "Item, payment, and invoice sets", body = OrderChildrenDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_integrated_order(
    State(state): State<AppState>,
    Path((id_ped, id_int)): Path<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    let service = DictionaryService::new(&state.db, &state.mock);

    let children = service.order_children(&id_ped, &id_int).await?;

    Ok(Json(children))
}
