//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. Every response produced from an `AppError`
//! uses the same `{errorCode, data}` envelope as successful responses, with `data` always
//! `null`.

pub mod config;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{BaseResponseDto, ErrorCode, NoDataDto},
    server::error::config::ConfigError,
};

/// Top-level application error type.
///
/// `EntityNotFound` is the only domain error; it is raised by the service layer when a
/// primary-key lookup misses. Extractor rejections are client errors. Every other variant
/// is an opaque fault that surfaces as a 500 with the details kept in the server log.
#[derive(Error, Debug)]
pub enum AppError {
    /// A lookup by primary key found no row.
    ///
    /// Results in 404 Not Found with error code `ENTITY_NOT_FOUND`.
    #[error("{entity} with id {id} not found")]
    EntityNotFound {
        /// Kind of entity that was looked up
        entity: &'static str,
        /// The id that missed
        id: String,
    },

    /// Request body could not be deserialized into the expected DTO.
    ///
    /// Results in the rejection's own 4xx status with error code `BAD_REQUEST`.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Query string could not be deserialized into the expected parameters.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while building the runtime or binding the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

impl AppError {
    /// Builds the not-found error for a missing author.
    pub fn author_not_found(id: impl Into<String>) -> Self {
        Self::EntityNotFound {
            entity: "Author",
            id: id.into(),
        }
    }

    /// Builds the not-found error for a missing book.
    pub fn book_not_found(id: impl Into<String>) -> Self {
        Self::EntityNotFound {
            entity: "Book",
            id: id.into(),
        }
    }
}

/// Converts application errors into enveloped HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `EntityNotFound`
/// - 4xx - For extractor rejections, using the rejection's status
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::EntityNotFound { entity, id } => {
                tracing::debug!("{} with id {} not found", entity, id);
                envelope(StatusCode::NOT_FOUND, ErrorCode::EntityNotFound)
            }
            Self::JsonRejection(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                envelope(rejection.status(), ErrorCode::BadRequest)
            }
            Self::QueryRejection(rejection) => {
                tracing::debug!("Rejected query string: {}", rejection.body_text());
                envelope(rejection.status(), ErrorCode::BadRequest)
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Replaces the bare response of a timed-out request with the `REQUEST_TIMEOUT` envelope.
///
/// No handler answers with 408, so that status only ever comes from the timeout layer.
pub async fn envelope_timeout(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    tracing::warn!("Request timed out");
    envelope(StatusCode::REQUEST_TIMEOUT, ErrorCode::RequestTimeout)
}

fn envelope(status: StatusCode, code: ErrorCode) -> Response {
    (status, Json(BaseResponseDto::<NoDataDto>::error(code))).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns only the `INTERNAL_SERVER_ERROR` code to the client
/// so implementation details never leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        envelope(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::InternalServerError,
        )
    }
}
