//! HTTP routing and OpenAPI documentation configuration.
//!
//! All endpoints are registered through utoipa-axum so the OpenAPI document
//! stays in lockstep with the router. The full route set is also mirrored
//! under `/app-root`, the path a legacy reverse proxy fronts the service
//! with. Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Ponte", description = "Ponte integration API"), tags(
        (name = controller::dictionary::DICTIONARY_TAG, description = "Data dictionary API routes"),
        (name = controller::lookup::LOOKUP_TAG, description = "Auxiliary lookup API routes"),
        (name = controller::INTEGRATION_TAG, description = "Integration entity API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::dictionary::get_browse_columns))
        .routes(routes!(controller::dictionary::get_browse_items))
        .routes(routes!(controller::dictionary::get_struct))
        .routes(routes!(controller::dictionary::get_data))
        .routes(routes!(controller::dictionary::get_initializer))
        .routes(routes!(controller::dictionary::execute_trigger))
        .routes(routes!(controller::dictionary::sync_schemas))
        .routes(routes!(controller::lookup::get_lookup))
        .routes(routes!(controller::lookup::get_lookup_by_id))
        .routes(routes!(controller::platform::create_platform))
        .routes(routes!(
            controller::platform::update_platform,
            controller::platform::delete_platform
        ))
        .routes(routes!(controller::shipping_program::create_shipping_program))
        .routes(routes!(
            controller::shipping_program::update_shipping_program,
            controller::shipping_program::delete_shipping_program
        ))
        .routes(routes!(
            controller::marketplace_account::create_marketplace_account
        ))
        .routes(routes!(
            controller::marketplace_account::update_marketplace_account,
            controller::marketplace_account::delete_marketplace_account
        ))
        .routes(routes!(controller::product_account::create_product_accounts))
        .routes(routes!(
            controller::product_account::get_product_accounts,
            controller::product_account::delete_product_accounts
        ))
        .routes(routes!(controller::integrated_order::get_integrated_order))
        .split_for_parts();

    let mirrored = routes.clone();

    routes
        .nest("/app-root", mirrored)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
