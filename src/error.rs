//! Structured error types for fastgrid.
//!
//! The grid core never returns these: out-of-range indices are caller bugs
//! and trip assertions. Errors only come out of the edges of the crate
//! (construction helpers, configuration parsing, the CLI).

/// All recoverable errors fastgrid can report.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A 2-D input row does not have as many values as the first row.
    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A style name that does not match any built-in style.
    #[error("unknown style: {0}")]
    UnknownStyle(String),

    /// Malformed JSON configuration.
    #[error("config: {0}")]
    Config(#[from] serde_json::Error),

    /// Unreadable delimited input.
    #[error("delimited input: {0}")]
    Delimited(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
