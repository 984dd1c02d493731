use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Request-level failures surfaced to the caller. Rendering, extraction and
/// analysis are infallible, so a bad payload is the only error the API emits.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "ok": false,
            "error": self.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_maps_to_400() {
        let err = ApiError::InvalidRequest("missing field `keyword`".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "invalid request: missing field `keyword`"
        );
    }
}
