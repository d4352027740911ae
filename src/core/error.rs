use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced to the host. The simulation itself never fails at runtime;
/// these only come out of configuration, the asset cache and browser glue.
#[derive(Debug, Error)]
pub enum GlassError {
    #[error("invalid pane config: {0}")]
    InvalidConfig(String),
    #[error("could not parse pane config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("unknown glass type: {0}")]
    UnknownGlassType(String),
    #[error("network request for {url} failed: {reason}")]
    Network { url: String, reason: String },
    #[error("browser call failed: {0}")]
    Js(String),
}

impl GlassError {
    /// Wrap a `JsValue` thrown by a browser API
    pub fn js(err: &JsValue) -> Self {
        Self::Js(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

impl From<GlassError> for JsValue {
    fn from(err: GlassError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
