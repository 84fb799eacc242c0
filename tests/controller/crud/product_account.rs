//! Tests for product x account binding writes, listing, and removal.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use ponte::controller::product_account::{
    create_product_accounts, delete_product_accounts, get_product_accounts,
};
use ponte_test_utils::prelude::*;
use serde_json::json;

use crate::util::{app_state, body_json};

/// An ITENS list replaces the product's bindings wholesale with codes
/// re-sequenced from 1.
#[tokio::test]
async fn items_list_replaces_bindings_and_resequences_codes() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;
    let state = app_state(test.db);

    let created = create_product_accounts(
        State(state.clone()),
        Json(json!({
            "Z01_PRDERP": "PRD001",
            "Z01_DESCER": "Camisa Polo",
            "ITENS": [
                { "Z01_CONTA": "ACC001", "Z01_SKU": "SKU-N-1", "Z01_ATIVO": "S" },
                { "Z01_CONTA": "ACC002", "Z01_SKU": "SKU-N-2", "Z01_ATIVO": "S" }
            ]
        })),
    )
    .await;

    let response = created.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["success"], true);

    let fetched = get_product_accounts(State(state), Path("PRD001".to_string())).await;
    let body = body_json(fetched.unwrap().into_response()).await;
    let items = body["items"].as_array().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["Z01_COD"], "1");
    assert_eq!(items[1]["Z01_COD"], "2");
    assert_eq!(items[0]["Z01_SKU"], "SKU-N-1");
    // The ITENS envelope itself never lands on stored rows.
    assert!(items[0].get("ITENS").is_none());

    Ok(())
}

/// Items without the parent product key are a validation error.
#[tokio::test]
async fn items_without_parent_key_are_rejected() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;

    let created = create_product_accounts(
        State(app_state(test.db)),
        Json(json!({
            "ITENS": [{ "Z01_CONTA": "ACC001", "Z01_SKU": "SKU-X" }]
        })),
    )
    .await;

    let response = created.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "MISSING_PARENT_KEY");

    Ok(())
}

/// Without an ITENS list a single binding is appended with the next
/// sequence code.
#[tokio::test]
async fn single_binding_appends_with_next_sequence() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;
    let state = app_state(test.db);

    let created = create_product_accounts(
        State(state.clone()),
        Json(json!({ "Z01_PRDERP": "PRD003", "Z01_DESCER": "Bermuda", "Z01_CONTA": "ACC001" })),
    )
    .await;
    assert_eq!(created.unwrap().into_response().status(), StatusCode::CREATED);

    let fetched = get_product_accounts(State(state), Path("PRD003".to_string())).await;
    let body = body_json(fetched.unwrap().into_response()).await;

    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["Z01_COD"], "4");

    Ok(())
}

/// Deleting by product removes every binding and then reports not-found.
#[tokio::test]
async fn delete_removes_all_bindings_of_the_product() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;
    let state = app_state(test.db);

    let deleted = delete_product_accounts(State(state.clone()), Path("PRD001".to_string())).await;
    assert_eq!(deleted.unwrap().into_response().status(), StatusCode::NO_CONTENT);

    let fetched = get_product_accounts(State(state.clone()), Path("PRD001".to_string())).await;
    let body = body_json(fetched.unwrap().into_response()).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 0);

    let missing = delete_product_accounts(State(state), Path("PRD001".to_string())).await;
    assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
