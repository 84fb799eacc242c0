//! Tests for shipping program point CRUD.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use ponte::controller::shipping_program::{
    create_shipping_program, delete_shipping_program, update_shipping_program,
};
use ponte_test_utils::prelude::*;
use serde_json::json;

use crate::util::{app_state, body_json};

/// Generated codes use the ENV prefix; programs carry no update stamp.
#[tokio::test]
async fn create_generates_env_code_without_stamp() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;

    let created = create_shipping_program(
        State(app_state(test.db)),
        Json(json!({ "Z11_DESC": "Envio Teste", "Z11_PRAZO": 3, "Z11_ATIVO": "S" })),
    )
    .await;

    let response = created.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["Z11_COD"], "ENV003");
    assert!(body.get("Z11_DTALT").is_none());

    Ok(())
}

/// The full create/update/delete flow round-trips.
#[tokio::test]
async fn crud_flow_round_trips() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;
    let state = app_state(test.db);

    let created = create_shipping_program(
        State(state.clone()),
        Json(json!({ "Z11_COD": "ENVX01", "Z11_DESC": "Envio Teste", "Z11_PRAZO": 3 })),
    )
    .await;
    assert_eq!(created.unwrap().into_response().status(), StatusCode::CREATED);

    let updated = update_shipping_program(
        State(state.clone()),
        Path("ENVX01".to_string()),
        Json(json!({ "Z11_DESC": "Envio Atualizado" })),
    )
    .await;

    let body = body_json(updated.unwrap().into_response()).await;
    assert_eq!(body["Z11_DESC"], "Envio Atualizado");
    assert_eq!(body["Z11_COD"], "ENVX01");

    let deleted = delete_shipping_program(State(state.clone()), Path("ENVX01".to_string())).await;
    assert_eq!(deleted.unwrap().into_response().status(), StatusCode::NO_CONTENT);

    let missing = delete_shipping_program(State(state), Path("ENVX01".to_string())).await;
    assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
