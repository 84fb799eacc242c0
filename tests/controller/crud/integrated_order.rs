//! Tests for the integrated-order child aggregation endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use ponte::{
    controller::integrated_order::get_integrated_order,
    model::dictionary::SyncRequest,
    service::dictionary::DictionaryService,
};
use ponte_test_utils::prelude::*;

use crate::util::{app_state, body_json};

/// The seeded order returns one row in each child set.
#[tokio::test]
async fn seeded_order_returns_child_sets() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;

    let result = get_integrated_order(
        State(app_state(test.db)),
        Path(("PED-1001".to_string(), "I1001".to_string())),
    )
    .await;

    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["Z03"].as_array().unwrap().len(), 1);
    assert_eq!(body["Z05"].as_array().unwrap().len(), 1);
    assert_eq!(body["Z06"].as_array().unwrap().len(), 1);
    assert_eq!(body["Z03"][0]["Z03_PROD"], "PRD001");

    Ok(())
}

/// Unknown composite keys answer with empty sets, not an error.
#[tokio::test]
async fn unknown_key_returns_empty_sets() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;

    let result = get_integrated_order(
        State(app_state(test.db)),
        Path(("PED-9999".to_string(), "I9999".to_string())),
    )
    .await;

    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body["Z03"].as_array().unwrap().len(), 0);
    assert_eq!(body["Z05"].as_array().unwrap().len(), 0);
    assert_eq!(body["Z06"].as_array().unwrap().len(), 0);

    Ok(())
}

/// In persistent mode child rows are scoped by the composite parent key
/// columns of each physical table.
#[tokio::test]
async fn persistent_children_are_scoped_by_parent_key() -> Result<(), TestError> {
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

    fixtures::create_alias_table(
        &state.db,
        "Z03",
        &["Z03_ITEM", "Z03_PROD", "Z03_IDPED", "Z03_IDINT"],
    )
    .await?;
    fixtures::insert_alias_row(
        &state.db,
        "Z03",
        &[
            ("Z03_ITEM", "001"),
            ("Z03_PROD", "PRD010"),
            ("Z03_IDPED", "PED-2001"),
            ("Z03_IDINT", "I2001"),
        ],
    )
    .await?;
    fixtures::insert_alias_row(
        &state.db,
        "Z03",
        &[
            ("Z03_ITEM", "002"),
            ("Z03_PROD", "PRD011"),
            ("Z03_IDPED", "PED-2002"),
            ("Z03_IDINT", "I2002"),
        ],
    )
    .await?;

    let result = get_integrated_order(
        State(state),
        Path(("PED-2001".to_string(), "I2001".to_string())),
    )
    .await;

    let body = body_json(result.unwrap().into_response()).await;
    let items = body["Z03"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["Z03_PROD"], "PRD010");
    // Z05/Z06 tables are absent: missing backing tables read as empty sets.
    assert_eq!(body["Z05"].as_array().unwrap().len(), 0);

    Ok(())
}
