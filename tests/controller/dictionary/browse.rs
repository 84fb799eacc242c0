//! Tests for the browse columns/items endpoints.
//!
//! Covers schema discovery in both degraded (seed) and persistent modes,
//! the registry's authority over unknown aliases, paging behavior, and the
//! missing-table-is-zero-rows recovery.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use ponte::{
    controller::dictionary::{get_browse_columns, get_browse_items, get_struct, BrowseQuery},
    model::dictionary::SyncRequest,
    service::dictionary::DictionaryService,
};
use ponte_test_utils::prelude::*;

use crate::util::{app_state, body_json};

fn browse_query(page: &str, page_size: &str) -> Query<BrowseQuery> {
    Query(BrowseQuery {
        page: Some(page.to_string()),
        page_size: Some(page_size.to_string()),
        filter: None,
        order: None,
    })
}

/// With no configuration tables at all, columns are served from the
/// compiled-in seed set.
#[tokio::test]
async fn columns_fall_back_to_seed_without_config_tables() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;

    let result = get_browse_columns(State(app_state(test.db)), Path("Z10".to_string())).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["description"], "Plataformas");
    assert_eq!(body["struct"].as_array().unwrap().len(), 4);

    Ok(())
}

/// An alias unknown to both the registry and the seed is a 404.
#[tokio::test]
async fn columns_unknown_alias_returns_not_found() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;

    let result = get_browse_columns(State(app_state(test.db)), Path("Z99".to_string())).await;

    let response = result.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "ALIAS_NOT_FOUND");

    Ok(())
}

/// A reachable registry is authoritative: aliases it does not hold are 404
/// even though the seed knows them.
#[tokio::test]
async fn struct_is_not_found_when_registry_has_no_alias() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!(dict)?;

    let result = get_struct(State(app_state(test.db)), Path("Z10".to_string())).await;

    let response = result.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Struct serves the persistent schema once the alias is synchronized.
#[tokio::test]
async fn struct_serves_synchronized_schema() -> Result<(), TestError> {
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

    let result = get_struct(State(state.clone()), Path("Z10".to_string())).await;

    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["description"], "Plataformas");
    assert_eq!(body["struct"][0]["field"], "Z10_COD");
    assert_eq!(body["struct"][2]["options"][0]["value"], "S");

    Ok(())
}

/// Page 1 of size 1 over the two-row seed has a next page; page 2 does not.
#[tokio::test]
async fn items_paginate_the_two_row_seed() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;
    let state = app_state(test.db);

    let result = get_browse_items(
        State(state.clone()),
        Path("Z10".to_string()),
        browse_query("1", "1"),
    )
    .await;

    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["hasNext"], true);
    assert_eq!(body["remainingRecords"], 1);

    let result = get_browse_items(
        State(state),
        Path("Z10".to_string()),
        browse_query("2", "1"),
    )
    .await;

    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["hasNext"], false);
    assert_eq!(body["remainingRecords"], 0);

    Ok(())
}

/// Filter and order apply before pagination.
#[tokio::test]
async fn items_filter_and_order_before_paging() -> Result<(), TestError> {
    let test = test_setup_with_dict_tables!()?;
    let state = app_state(test.db);

    let filtered = get_browse_items(
        State(state.clone()),
        Path("Z10".to_string()),
        Query(BrowseQuery {
            page: None,
            page_size: None,
            filter: Some("shopee".to_string()),
            order: None,
        }),
    )
    .await;

    let body = body_json(filtered.unwrap().into_response()).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["Z10_COD"], "PLAT002");

    let ordered = get_browse_items(
        State(state),
        Path("Z10".to_string()),
        Query(BrowseQuery {
            page: None,
            page_size: None,
            filter: None,
            order: Some("Z10_COD DESC".to_string()),
        }),
    )
    .await;

    let body = body_json(ordered.unwrap().into_response()).await;
    assert_eq!(body["items"][0]["Z10_COD"], "PLAT002");

    Ok(())
}

/// In persistent mode rows come from the physical table, uppercased.
#[tokio::test]
async fn items_serve_physical_rows_in_persistent_mode() -> Result<(), TestError> {
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
    fixtures::seed_platform_table(&state.db).await?;

    let result = get_browse_items(
        State(state),
        Path("Z10".to_string()),
        browse_query("1", "10"),
    )
    .await;

    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["items"][0]["Z10_COD"], "PLAT001");
    assert_eq!(body["hasNext"], false);

    Ok(())
}

/// A registered alias whose physical table is missing reads as zero rows.
#[tokio::test]
async fn items_treat_missing_backing_table_as_empty() -> Result<(), TestError> {
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

    let result = get_browse_items(
        State(state),
        Path("Z11".to_string()),
        browse_query("1", "10"),
    )
    .await;

    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 0);
    assert_eq!(body["hasNext"], false);

    Ok(())
}
