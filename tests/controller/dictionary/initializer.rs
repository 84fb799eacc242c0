//! Tests for the initializer endpoint's field-default rules.

use std::collections::BTreeMap;

use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse};
use ponte::{
    controller::dictionary::get_initializer,
    model::dictionary::{AliasSchema, FieldDescriptor, FieldType, SyncRequest},
    service::dictionary::DictionaryService,
    util::time::today_ymd,
};
use ponte_test_utils::prelude::*;
use serde_json::json;

use crate::util::{app_state, body_json};

fn bare_field(name: &str, field_type: FieldType, order: i32) -> FieldDescriptor {
    FieldDescriptor {
        field: name.to_string(),
        title: name.to_string(),
        field_type,
        size: 10,
        required: false,
        editable: true,
        enabled: true,
        is_virtual: false,
        options: Vec::new(),
        decimals: 0,
        exist_trigger: false,
        help: String::new(),
        order,
        agrup: None,
        folder: None,
        standard_query: None,
        standard_query_detail: None,
    }
}

/// The Z10 initializer carries exactly its four schema fields: the first
/// option value for the select-constrained field and today's date for the
/// date field.
#[tokio::test]
async fn platform_initializer_defaults_follow_schema() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;

    let result = get_initializer(State(app_state(test.db)), Path("Z10".to_string())).await;

    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let record = body.as_object().unwrap();
    assert_eq!(record.len(), 4);
    assert_eq!(record["Z10_COD"], "");
    assert_eq!(record["Z10_DESC"], "");
    assert_eq!(record["Z10_ATIVO"], "S");
    assert_eq!(record["Z10_DTALT"], json!(today_ymd()));

    Ok(())
}

/// Numeric fields default to zero.
#[tokio::test]
async fn numeric_fields_default_to_zero() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;

    let result = get_initializer(State(app_state(test.db)), Path("Z11".to_string())).await;

    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body["Z11_PRAZO"], 0);
    assert_eq!(body["Z11_ATIVO"], "S");

    Ok(())
}

/// Logical fields default to false and memo fields to the empty string,
/// through the persistent registry.
#[tokio::test]
async fn logical_and_memo_fields_default_correctly() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!(dict)?;
    let state = app_state(test.db);

    let schema = AliasSchema {
        description: "Flags".to_string(),
        fields: vec![
            bare_field("Z97_OK", FieldType::Logical, 1),
            bare_field("Z97_OBS", FieldType::Memo, 2),
        ],
        folders: Vec::new(),
        agrups: Vec::new(),
    };
    let mut schemas = BTreeMap::new();
    schemas.insert("Z97".to_string(), schema);

    let service = DictionaryService::new(&state.db, &state.mock);
    service
        .sync(SyncRequest {
            alias_schemas: Some(schemas),
            ..Default::default()
        })
        .await
        .unwrap();

    let result = get_initializer(State(state), Path("Z97".to_string())).await;

    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body["Z97_OK"], false);
    assert_eq!(body["Z97_OBS"], "");

    Ok(())
}

/// Unknown aliases are a 404.
#[tokio::test]
async fn unknown_alias_returns_not_found() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;

    let result = get_initializer(State(app_state(test.db)), Path("Z99".to_string())).await;

    let response = result.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
