pub mod asset;
pub mod errors;
pub mod html;
pub mod json;

use crate::errors::ServerError;
use astra::Response;

// Type alias used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

pub use asset::{css_response, script_response};
pub use errors::error_to_response;
pub use html::{html_response, html_response_with_status};
pub use json::json_response;
