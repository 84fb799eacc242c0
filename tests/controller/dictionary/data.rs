//! Tests for the positioned record lookup endpoint.

use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse};
use ponte::{
    controller::dictionary::get_data,
    model::dictionary::SyncRequest,
    service::dictionary::DictionaryService,
};
use ponte_test_utils::prelude::*;
use serde_json::json;

use crate::util::{app_state, body_json};

fn encode(payload: serde_json::Value) -> String {
    let text = payload.to_string();
    percent_encode(&text)
}

fn percent_encode(text: &str) -> String {
    let mut encoded = String::new();
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            other => encoded.push_str(&format!("%{:02X}", other)),
        }
    }
    encoded
}

/// A payload identifying an existing record resolves to that record.
#[tokio::test]
async fn positioned_payload_matches_record() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;

    let raw = encode(json!({ "item": { "Z10_COD": "PLAT002" } }));
    let result = get_data(
        State(app_state(test.db)),
        Path(("Z10".to_string(), raw)),
    )
    .await;

    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["Z10_COD"], "PLAT002");

    Ok(())
}

/// A payload identifying a nonexistent record falls back to the first row
/// rather than erroring.
#[tokio::test]
async fn unmatched_payload_falls_back_to_first_row() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;

    let raw = encode(json!({ "item": { "Z10_COD": "NOPE" } }));
    let result = get_data(
        State(app_state(test.db)),
        Path(("Z10".to_string(), raw)),
    )
    .await;

    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body["Z10_COD"], "PLAT001");

    Ok(())
}

/// An unparsable payload also falls back to the first row.
#[tokio::test]
async fn unparsable_payload_falls_back_to_first_row() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;

    let result = get_data(
        State(app_state(test.db)),
        Path(("Z10".to_string(), "%7Bnot-json".to_string())),
    )
    .await;

    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body["Z10_COD"], "PLAT001");

    Ok(())
}

/// A registered alias with no backing rows yields an empty object.
#[tokio::test]
async fn empty_alias_yields_empty_object() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!(dict)?;
    let state = app_state(test.db);

    let service = DictionaryService::new(&state.db, &state.mock);
    service
        .sync(SyncRequest {
            use_seed: true,
            ..Default::default()
        })
        .await
        .unwrap();

    let raw = encode(json!({ "Z10_COD": "PLAT001" }));
    let result = get_data(State(state), Path(("Z10".to_string(), raw))).await;

    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body, json!({}));

    Ok(())
}
