use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Invalid configuration block: {source}")]
    Config {
        #[from]
        source: serde_json::Error,
    },

    #[error("Missing browser global: {name}")]
    MissingGlobal { name: &'static str },
}

#[cfg(target_arch = "wasm32")]
impl From<PortfolioError> for wasm_bindgen::JsValue {
    fn from(err: PortfolioError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
