//! Tests for marketplace account point CRUD.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use ponte::controller::marketplace_account::{
    create_marketplace_account, delete_marketplace_account, update_marketplace_account,
};
use ponte_test_utils::prelude::*;
use serde_json::json;

use crate::util::{app_state, body_json};

/// Generated codes use the ACC prefix.
#[tokio::test]
async fn create_generates_acc_code() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;

    let created = create_marketplace_account(
        State(app_state(test.db)),
        Json(json!({ "Z00_DESC": "Conta Teste", "Z00_TOKEN": "token-test", "Z00_STATUS": "A" })),
    )
    .await;

    let body = body_json(created.unwrap().into_response()).await;
    assert_eq!(body["Z00_COD"], "ACC003");

    Ok(())
}

/// Updates match on the account code only.
#[tokio::test]
async fn update_matches_on_account_code() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;
    let state = app_state(test.db);

    let updated = update_marketplace_account(
        State(state.clone()),
        Path("ACC001".to_string()),
        Json(json!({ "Z00_DESC": "Conta Atualizada" })),
    )
    .await;

    let body = body_json(updated.unwrap().into_response()).await;
    assert_eq!(body["Z00_COD"], "ACC001");
    assert_eq!(body["Z00_DESC"], "Conta Atualizada");

    let missing = update_marketplace_account(
        State(state),
        Path("INT001".to_string()),
        Json(json!({ "Z00_DESC": "Outro" })),
    )
    .await;
    assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Deleting an account removes it and reports not-found afterwards.
#[tokio::test]
async fn delete_removes_account() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;
    let state = app_state(test.db);

    let deleted = delete_marketplace_account(State(state.clone()), Path("ACC002".to_string())).await;
    assert_eq!(deleted.unwrap().into_response().status(), StatusCode::NO_CONTENT);

    let missing = delete_marketplace_account(State(state), Path("ACC002".to_string())).await;
    assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
