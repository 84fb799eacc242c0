use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use crate::model::api::ErrorDto;

/// Errors raised by the dictionary subsystem and the per-alias CRUD
/// endpoints.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// No schema is configured for the requested alias.
    #[error("Alias not found: {0}")]
    AliasNotFound(String),
    /// A point operation addressed a record that does not exist.
    #[error("{resource} not found: {id}")]
    RecordNotFound { resource: &'static str, id: String },
    /// A sync call supplied none of the accepted schema sources.
    #[error("No schemas supplied for synchronization")]
    NoSchemasSupplied,
    /// A bulk child write arrived without its parent correlation field.
    #[error("Missing required field {0} for item synchronization")]
    MissingParentKey(&'static str),
}

impl DictionaryError {
    fn code(&self) -> &'static str {
        match self {
            DictionaryError::AliasNotFound(_) => "ALIAS_NOT_FOUND",
            DictionaryError::RecordNotFound { .. } => "RECORD_NOT_FOUND",
            DictionaryError::NoSchemasSupplied => "MISSING_SCHEMAS",
            DictionaryError::MissingParentKey(_) => "MISSING_PARENT_KEY",
        }
    }
}

impl IntoResponse for DictionaryError {
    fn into_response(self) -> Response {
        let status = match self {
            DictionaryError::AliasNotFound(_) | DictionaryError::RecordNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            DictionaryError::NoSchemasSupplied | DictionaryError::MissingParentKey(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        debug!("Dictionary error: {}", self);

        (
            status,
            Json(ErrorDto {
                code: self.code().to_string(),
                message: self.to_string(),
                detailed_message: None,
            }),
        )
            .into_response()
    }
}
