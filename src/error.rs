//! Error taxonomy. The picker has no I/O, so the only failures are startup
//! configuration defects.
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::catalog::CategoryKey;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("catalog has no list for category '{0}'")]
    MissingCategory(CategoryKey),

    #[error("catalog list for category '{0}' is empty")]
    EmptyCategory(CategoryKey),

    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("malformed settings: {0}")]
    MalformedSettings(String),
}

impl From<ConfigurationError> for JsValue {
    fn from(err: ConfigurationError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
