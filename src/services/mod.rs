use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde_json::json;
use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod categories;
pub mod products;
pub mod tags;

/// Result type returned by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures propagated out of request handlers.
///
/// Handlers never build error responses themselves; every failure flows
/// through [`ServiceError`] and is formatted in one place by the
/// `ResponseError` impl below.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The addressed record does not exist. Carries the client-visible
    /// message for the resource.
    #[error("{0}")]
    NotFound(String),
    /// The request body failed validation.
    #[error("invalid payload: {0}")]
    Validation(String),
    /// Any persistence-layer failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl actix_web::ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::NotFound(message) => {
                HttpResponse::NotFound().json(json!({ "message": message }))
            }
            // Validation failures carry no dedicated client contract and are
            // reported like any other unexpected failure.
            other => {
                log::error!("request failed: {other}");
                HttpResponse::InternalServerError().json(json!({ "error": "Internal Server Error" }))
            }
        }
    }
}
