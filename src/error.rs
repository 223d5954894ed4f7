use actix_web::{
    HttpResponse, ResponseError,
    http::{StatusCode, header},
};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced at the request boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No credentials yet; answered with a fresh digest challenge.
    #[error("Authorization required")]
    MissingAuth { challenge: String },

    #[error("Authentication failed")]
    InvalidAuth,

    #[error("{0}")]
    MalformedRequest(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingAuth { .. } | ApiError::InvalidAuth => StatusCode::UNAUTHORIZED,
            ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::MissingAuth { challenge } => HttpResponse::Unauthorized()
                .insert_header((header::WWW_AUTHENTICATE, challenge.as_str()))
                .finish(),
            ApiError::InvalidAuth => {
                HttpResponse::Unauthorized().json(json!({"error": self.to_string()}))
            }
            ApiError::MalformedRequest(msg) => HttpResponse::BadRequest().json(json!({
                "responseStatus": "ERROR",
                "errorMsg": msg
            })),
        }
    }
}

/// Roster entries that cannot be simulated.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("roster has no employees")]
    Empty,

    #[error("employee id must not be empty")]
    EmptyId,

    #[error("duplicate employee id {0}")]
    DuplicateId(String),

    #[error("hour {0} is outside 0-23")]
    HourOutOfRange(u8),

    #[error("window {0:?} has earliest after latest")]
    InvertedWindow([u8; 4]),

    #[error("attendance probability {value} of employee {id} is outside [0, 1]")]
    Probability { id: String, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn challenge_has_empty_body_and_header() {
        let resp = ApiError::MissingAuth {
            challenge: "Digest realm=\"r\"".into(),
        }
        .error_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Digest realm=\"r\""
        );
        assert!(to_bytes(resp.into_body()).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn malformed_request_echoes_message() {
        let resp = ApiError::MalformedRequest("bad date".into()).error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({"responseStatus": "ERROR", "errorMsg": "bad date"}));
    }
}
