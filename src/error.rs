use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Client-visible error taxonomy. Every handler failure is one of these;
/// anything unexpected is folded into `Internal` with the cause logged
/// server-side and a scrubbed message on the wire.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("User already exists")]
    EmailTaken,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Invalid or expired token")]
    Unauthenticated,
    #[error("Something went wrong")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::EmailTaken => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(ref e) = self {
            tracing::error!(error = %e, "internal error");
        }
        let body = json!({ "message": self.to_string() });
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Internal(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        assert_eq!(
            ApiError::Validation("amount must be non-negative".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::EmailTaken.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_message_is_scrubbed() {
        let err = ApiError::Internal(anyhow::anyhow!("connection refused at 10.0.0.5:5432"));
        assert_eq!(err.to_string(), "Something went wrong");
    }

    #[test]
    fn credential_failures_share_one_message() {
        // Unknown email and wrong password must be indistinguishable.
        let a = ApiError::InvalidCredentials.to_string();
        let b = ApiError::InvalidCredentials.to_string();
        assert_eq!(a, b);
        assert_eq!(a, "Invalid credentials");
    }

    #[test]
    fn responses_carry_json_message_body() {
        let res = ApiError::EmailTaken.into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let res = ApiError::Unauthenticated.into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
