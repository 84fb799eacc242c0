//! Error types for the Ponte server application.
//!
//! Domain errors use `thiserror` and implement `IntoResponse`, so handlers
//! can propagate with `?` and still answer with structured `ErrorDto`
//! payloads instead of bare strings.

pub mod dictionary;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::{error::dictionary::DictionaryError, model::api::ErrorDto};

/// Main error type for the Ponte server application.
#[derive(Error, Debug)]
pub enum Error {
    /// Dictionary subsystem error (alias/record lookup, sync validation).
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    /// Missing required environment variable.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Database error (query failures, connection issues, constraint
    /// violations). Missing-table conditions are recovered before they reach
    /// this type; anything arriving here is a real storage fault.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Dictionary(err) => err.into_response(),
            err => {
                error!("Internal server error: {}", err);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        code: "STORAGE_ERROR".to_string(),
                        message: "Internal server error".to_string(),
                        detailed_message: Some(err.to_string()),
                    }),
                )
                    .into_response()
            }
        }
    }
}
