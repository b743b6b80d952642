use crate::errors::ServerError;
use crate::templates::components::error_page;
use crate::templates::pages::prediction_error;
use astra::{Body, Response, ResponseBuilder};
use maud::Markup;
use tracing::{error, warn};

/// Convert a ServerError into an HTML response. `partial` asks for just the
/// fragment an htmx swap needs instead of a whole page.
pub fn error_to_response(err: ServerError, partial: bool) -> Response {
    log_error(&err);

    let status = err.status();
    let message = err.to_string();
    let markup = if partial {
        prediction_error(&message)
    } else {
        error_page(status, &message)
    };

    render(status, markup)
}

/// Server faults log at `error`, caller mistakes at `warn`.
pub fn log_error(err: &ServerError) {
    let status = err.status();
    if status >= 500 {
        error!(status, error = %err, "request failed");
    } else {
        warn!(status, error = %err, "request rejected");
    }
}

fn render(status: u16, markup: Markup) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(markup.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
