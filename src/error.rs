/// Error type for the dashboard glue
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("invalid dashboard config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid dashboard config value: {0}")]
    ConfigValue(String),

    #[error("invalid page url: {0}")]
    Url(#[from] url::ParseError),

    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("javascript error: {0}")]
    Js(String),
}

impl DashboardError {
    pub fn missing(selector: impl Into<String>) -> Self {
        DashboardError::MissingElement(selector.into())
    }
}

impl From<JsValue> for DashboardError {
    fn from(value: JsValue) -> Self {
        DashboardError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<DashboardError> for JsValue {
    fn from(err: DashboardError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
