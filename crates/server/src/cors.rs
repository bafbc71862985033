//! Cross-origin policy for the browser frontend.

use axum::http::{request::Parts, HeaderValue, Method};
use configs::CorsConfig;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Allow-listed origins only, `GET/POST/PUT/DELETE`, credentials allowed.
pub fn build_cors(cfg: &CorsConfig) -> CorsLayer {
    let exact = cfg.allowed_origins.clone();
    let suffixes = cfg.allowed_origin_suffixes.clone();
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _: &Parts| {
            origin
                .to_str()
                .map(|o| origin_allowed(o, &exact, &suffixes))
                .unwrap_or(false)
        }))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Exact match against `exact`, or the whole origin ends with one of `suffixes`.
/// An explicit port therefore never matches a suffix entry.
pub fn origin_allowed(origin: &str, exact: &[String], suffixes: &[String]) -> bool {
    if exact.iter().any(|o| o == origin) {
        return true;
    }
    suffixes.iter().any(|s| !s.is_empty() && origin.ends_with(s.as_str()))
}
