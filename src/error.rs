use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced by the outer layers (config loading, canvas setup).
///
/// The per-frame simulation is infallible; a spawn that cannot find room is
/// simply skipped.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("YAML parse error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("canvas unavailable: {0}")]
    Canvas(String),
}

impl From<FieldError> for JsValue {
    fn from(err: FieldError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
