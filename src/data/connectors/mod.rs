mod json;
mod types;
mod validator;

pub use json::JsonConnector;
pub use types::{ClinicRequest, PreferenceMatrix};
pub use validator::RequestValidator;
