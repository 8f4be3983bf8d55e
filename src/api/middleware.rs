//! Request plumbing shared by every route: CORS and extractor error bodies.

use actix_cors::Cors;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{web, HttpRequest};

use super::ApiError;

/// The admin console may be served from another origin than the API.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Malformed or incomplete JSON bodies become `400 {"error": ...}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        ApiError::BadRequest(err.to_string()).into()
    })
}

/// Unparsable filters such as `?doctor_id=abc` become `400 {"error": ...}`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        ApiError::BadRequest(err.to_string()).into()
    })
}
