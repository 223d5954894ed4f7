use crate::{
    api::{
        attendance::{self, SEARCH_RECORD_SHEET_PATH},
        system,
    },
    auth::middleware::digest_auth_middleware,
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};

/// Per-peer limiter, `None` when limiting is off.
fn build_limiter(requests_per_min: u32) -> Option<Governor<PeerIpKeyExtractor, NoOpMiddleware>> {
    if requests_per_min == 0 {
        return None;
    }
    let per_ms = (60_000 / requests_per_min as u64).max(1);
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()?;
    Some(Governor::new(&cfg))
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    // Public routes
    cfg.service(web::resource("/health").route(web::get().to(system::health_check)))
        .service(web::resource("/config").route(web::get().to(system::get_config)));

    // Digest-protected report
    let search = web::resource(SEARCH_RECORD_SHEET_PATH)
        .route(web::post().to(attendance::search_record_sheet))
        .wrap(from_fn(digest_auth_middleware));

    match build_limiter(config.rate_search_per_min) {
        Some(limiter) => cfg.service(search.wrap(limiter)),
        None => cfg.service(search),
    };
}

// SEARCH
//  └─ POST without Authorization
//       └─ 401 + WWW-Authenticate: Digest realm, nonce, qop="auth"

// RETRY
//  └─ Authorization: Digest username, realm, nonce, uri, response
//       ├─ 200 report
//       └─ 401 {"error": "Authentication failed"}
