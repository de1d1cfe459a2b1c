//! HTTP adapter mapping for upstream and request errors.
//!
//! Purpose: keep `UpstreamError` HTTP-agnostic while giving Actix handlers a
//! single place where failures become status codes and plain-text bodies.
//! This is also the one place a failed request is logged at `error` level.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::ports::UpstreamError;
use crate::domain::{MovieValidationError, TRACE_ID_HEADER, TraceId};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// Status and body the gateway answers with for a failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalResponse {
    pub status: StatusCode,
    pub message: String,
}

/// Map a classified upstream failure to the gateway's external answer.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use movies_gateway::domain::ports::UpstreamError;
/// use movies_gateway::inbound::http::error::to_external_response;
///
/// let response = to_external_response(&UpstreamError::not_found("abc"));
/// assert_eq!(response.status, StatusCode::NOT_FOUND);
/// assert_eq!(response.message, "There is no MovieInfo available for the ID : abc");
/// ```
pub fn to_external_response(error: &UpstreamError) -> ExternalResponse {
    match error {
        UpstreamError::ClientError { message, status } => ExternalResponse {
            status: StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            message: message.clone(),
        },
        UpstreamError::NotFound { movie_id } => ExternalResponse {
            status: StatusCode::NOT_FOUND,
            message: format!("There is no MovieInfo available for the ID : {movie_id}"),
        },
        UpstreamError::ServerError { message } => ExternalResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.clone(),
        },
        UpstreamError::TransportFailure { .. } => ExternalResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: INTERNAL_SERVER_ERROR_MESSAGE.to_owned(),
        },
    }
}

/// Failures surfaced by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A path parameter failed domain validation.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] MovieValidationError),
    /// An upstream lookup failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ApiError {
    fn external(&self) -> ExternalResponse {
        match self {
            Self::InvalidRequest(reason) => ExternalResponse {
                status: StatusCode::BAD_REQUEST,
                message: reason.to_string(),
            },
            Self::Upstream(error) => to_external_response(error),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.external().status
    }

    fn error_response(&self) -> HttpResponse {
        let ExternalResponse { status, message } = self.external();
        error!(status = status.as_u16(), error = %self, "request failed");

        let mut builder = HttpResponse::build(status);
        builder.insert_header(ContentType::plaintext());
        builder.insert_header((header::CACHE_CONTROL, "no-store"));
        if let Some(id) = TraceId::current() {
            builder.insert_header((TRACE_ID_HEADER, id.to_string()));
        }
        builder.body(message)
    }
}

#[cfg(test)]
mod tests;
