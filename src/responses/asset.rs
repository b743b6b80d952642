// responses/asset.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Serve a stylesheet compiled into the binary.
pub fn css_response(css: &'static str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_CSS_UTF_8.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(css))
        .map_err(|_| ServerError::InternalError)
}

/// Serve a script read from the static directory.
pub fn script_response(js: Vec<u8>) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::APPLICATION_JAVASCRIPT_UTF_8.as_ref())
        .header("Cache-Control", "public, max-age=86400")
        .body(Body::from(js))
        .map_err(|_| ServerError::InternalError)
}
