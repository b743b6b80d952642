use crate::domain::variant::FormVariant;
use crate::errors::ServerError;
use crate::forms::{collect_listing, parse_form, FormValues};
use crate::model::{predict_listing, ArtifactStore};
use crate::responses::errors::log_error;
use crate::responses::{
    css_response, html_response, html_response_with_status, json_response, script_response,
};
use crate::responses::ResultResp;
use crate::templates::pages::{predict_page, prediction_error, prediction_result};
use astra::Request;
use serde::Serialize;
use std::io::{ErrorKind, Read};
use std::path::PathBuf;
use tracing::{error, warn};

/// Largest form body accepted.
pub const MAX_FORM_BYTES: u64 = 16 * 1024;

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Everything a request handler may read. Shared by all workers, never mutated.
pub struct AppState {
    pub store: ArtifactStore,
    /// Variant shown when the request does not pick one.
    pub variant: FormVariant,
    /// Where `htmx.js` is served from.
    pub static_dir: PathBuf,
}

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => form_page(&req, state),
        ("POST", "/predict") => predict(&mut req, state),
        ("GET", "/health") => health(state),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),
        ("GET", "/static/htmx.js") => htmx_script(state),
        (_, "/" | "/predict" | "/health" | "/static/main.css" | "/static/htmx.js") => {
            Err(ServerError::MethodNotAllowed)
        }
        _ => Err(ServerError::NotFound),
    }
}

/// True for requests issued by htmx, which want a fragment back.
pub fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

fn form_page(req: &Request, state: &AppState) -> ResultResp {
    let query = parse_query(req);
    let variant = requested_variant(query.get("variant"), state.variant)?;
    html_response(predict_page(variant, None, None))
}

fn predict(req: &mut Request, state: &AppState) -> ResultResp {
    let partial = is_htmx(req);
    let form = read_form(req)?;
    let variant = requested_variant(form.get("variant"), state.variant)?;
    let artifacts = state.store.get()?;

    let outcome = collect_listing(variant, &form)
        .map_err(ServerError::from)
        .and_then(|input| predict_listing(&input, variant, &artifacts).map_err(ServerError::from));

    match (outcome, partial) {
        (Ok(result), true) => html_response(prediction_result(&result)),
        (Err(err), true) => Err(err),
        (Ok(result), false) => html_response(predict_page(
            variant,
            Some(&form),
            Some(prediction_result(&result)),
        )),
        // Without htmx, keep the user's input on screen next to the error.
        (Err(err), false) => {
            log_error(&err);
            html_response_with_status(
                err.status(),
                predict_page(variant, Some(&form), Some(prediction_error(&err.to_string()))),
            )
        }
    }
}

#[derive(Serialize)]
struct Health<'a> {
    status: &'static str,
    variant: &'static str,
    expected_columns: Option<&'a [String]>,
    model_sha256: &'a str,
    preprocessor_sha256: &'a str,
    loaded_at: &'a str,
}

fn health(state: &AppState) -> ResultResp {
    let artifacts = state.store.get()?;
    json_response(&Health {
        status: "ok",
        variant: state.variant.slug(),
        expected_columns: artifacts.preprocessor.expected_columns(),
        model_sha256: &artifacts.info.model_sha256,
        preprocessor_sha256: &artifacts.info.preprocessor_sha256,
        loaded_at: &artifacts.info.loaded_at,
    })
}

fn htmx_script(state: &AppState) -> ResultResp {
    let path = state.static_dir.join("htmx.js");
    match std::fs::read(&path) {
        Ok(js) => script_response(js),
        // Without the script the form still works as a plain POST.
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "htmx.js is missing from the static directory");
            Err(ServerError::NotFound)
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to read htmx.js");
            Err(ServerError::InternalError)
        }
    }
}

fn requested_variant(
    slug: Option<&String>,
    fallback: FormVariant,
) -> Result<FormVariant, ServerError> {
    match slug {
        None => Ok(fallback),
        Some(slug) => FormVariant::from_slug(slug)
            .ok_or_else(|| ServerError::BadRequest(format!("unknown form variant '{slug}'"))),
    }
}

fn read_form(req: &mut Request) -> Result<FormValues, ServerError> {
    let content_type = req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or(mime::APPLICATION_WWW_FORM_URLENCODED.as_ref())
        .to_owned();
    if !content_type.starts_with(mime::APPLICATION_WWW_FORM_URLENCODED.as_ref()) {
        return Err(ServerError::BadRequest(format!(
            "expected a urlencoded form, got '{content_type}'"
        )));
    }

    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("failed to read form body: {e}")))?;
    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form body too large".into()));
    }

    Ok(parse_form(&body))
}

fn parse_query(req: &Request) -> FormValues {
    req.uri()
        .query()
        .map(|q| parse_form(q.as_bytes()))
        .unwrap_or_default()
}
