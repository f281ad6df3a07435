use std::fmt;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use domain_estate::exception::EstateException;
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP face of [`EstateException`].
#[derive(Debug)]
pub struct ApiError(pub EstateException);

impl From<EstateException> for ApiError {
    fn from(e: EstateException) -> Self {
        Self(e)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            EstateException::Validation(_) | EstateException::Reference { .. } => {
                StatusCode::BAD_REQUEST
            }
            EstateException::NotFound { .. } => StatusCode::NOT_FOUND,
            EstateException::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match &self.0 {
            EstateException::Validation(errors) => json!(errors),
            EstateException::NotFound { .. } => json!({ "detail": "Not found." }),
            EstateException::Reference { .. } => {
                json!({ "non_field_errors": [self.0.to_string()] })
            }
            EstateException::InternalError { source } => {
                tracing::error!("{source:?}");
                json!({ "detail": "Internal server error." })
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
