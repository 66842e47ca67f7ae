// Error types for the tornado backend.
//
// The simulation itself never fails; only the configuration edge does.

use std::fmt;
use wasm_bindgen::JsValue;

/// Errors raised while loading or saving vortex configuration.
#[derive(Debug)]
pub enum SimError {
    /// The configuration document could not be parsed or serialized.
    Config(serde_json::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Config(e) => write!(f, "Invalid vortex configuration: {}", e),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Config(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::Config(e)
    }
}

impl From<SimError> for JsValue {
    fn from(e: SimError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
