pub mod predict;
pub mod result;

pub use predict::predict_page;
pub use result::{prediction_error, prediction_result};
