//! Shared helpers for the integration test suite.

use axum::response::Response;
use ponte::{data::mock::MockStore, model::app::AppState};
use sea_orm::DatabaseConnection;
use serde_json::Value;

/// Builds an [`AppState`] around a test database and a freshly seeded mock
/// store.
pub fn app_state(db: DatabaseConnection) -> AppState {
    AppState {
        db,
        mock: MockStore::new(),
    }
}

/// Reads a response body back as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not valid JSON")
}
