pub mod domain;
pub mod errors;
pub mod ports;
pub mod validation;

pub use errors::CoreError;
pub use validation::{ValidationConfig, Validator};
