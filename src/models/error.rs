use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThemeError {
    #[error("Configuration error: no element with id '{0}'")]
    MissingControl(String),

    #[error("Configuration error: no document available")]
    MissingDocument,

    #[error("Configuration error: document has no root element")]
    MissingRoot,

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

impl ThemeError {
    /// Configuration errors leave nothing to bind to; the rest are recoverable.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ThemeError::MissingControl(_) | ThemeError::MissingDocument | ThemeError::MissingRoot
        )
    }
}

impl From<JsValue> for ThemeError {
    fn from(value: JsValue) -> Self {
        ThemeError::Dom(format!("{value:?}"))
    }
}
