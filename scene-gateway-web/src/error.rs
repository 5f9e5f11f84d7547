//! Mapping of core errors onto HTTP responses

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use scene_gateway_core::{CoreError, ErrorKind};

use crate::response;

/// Handler error; renders the uniform error envelope.
#[derive(Debug)]
pub struct ApiError(CoreError);

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        self.0.kind()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        if err.is_expected() {
            tracing::warn!(kind = ?err.kind(), "{err}");
        } else {
            tracing::error!(kind = ?err.kind(), "{err}");
        }
        Self(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::InvalidInput => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::UpstreamUnavailable
            | ErrorKind::ProviderRequestFailed
            | ErrorKind::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let summary = self.kind().summary();
        match &self.0 {
            CoreError::InvalidInput(messages) => response::validation_failed(summary, messages),
            CoreError::Provider(err) => {
                response::failure(self.status_code(), summary, &err.to_string())
            }
        }
    }
}
