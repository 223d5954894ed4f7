use crate::auth::digest;
use crate::auth::nonce::generate_nonce;
use crate::config::Config;
use crate::error::ApiError;
use actix_web::middleware::Next;
use actix_web::{
    Error, ResponseError,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    web::Data,
};
use tracing::{debug, warn};

/// Digest gate in front of the report endpoint.
///
/// No (or a blank) header gets a fresh challenge; a header that fails verification gets
/// a JSON error, not another challenge.
pub async fn digest_auth_middleware(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let config = req
        .app_data::<Data<Config>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("App config missing"))?;
    let credentials = &config.credentials;

    let presented = req
        .headers()
        .get(header::AUTHORIZATION)
        .filter(|h| !h.as_bytes().iter().all(u8::is_ascii_whitespace));

    // a blank header counts as no header
    let header_value = match presented {
        Some(h) => h.to_str().unwrap_or_default().to_owned(),
        None => {
            let nonce = generate_nonce();
            debug!(path = req.path(), "Issuing digest challenge");
            let err = ApiError::MissingAuth {
                challenge: digest::challenge(&credentials.realm, &nonce),
            };
            return Ok(req.into_response(err.error_response()));
        }
    };

    if !digest::verify(&header_value, credentials, req.method().as_str(), req.path()) {
        let attempted = digest::parse_params(&header_value)
            .and_then(|p| p.get("username").map(|u| u.to_string()))
            .unwrap_or_default();
        warn!(username = %attempted, path = req.path(), "Digest authentication failed");
        return Ok(req.into_response(ApiError::InvalidAuth.error_response()));
    }

    next.call(req).await
}
