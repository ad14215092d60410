mod cors;
mod json_config;
mod response;

pub use cors::{cors_headers, preflight_handler, preflight_item_handler};
pub use json_config::custom_json_config;
pub use response::{ApiError, ApiResponse};
