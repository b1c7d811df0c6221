//! JSON schema types for the print API.
//!
//! Field names are accepted both lower-case and capitalised
//! (`{"Action": "text", "Data": "hi"}`), since existing clients send both.

use serde::Deserialize;

/// Top-level print request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrintRequest {
    /// Operations, in print order.
    #[serde(default, alias = "Operations")]
    pub operations: Vec<Operation>,
    /// Destination printer identifier.
    #[serde(default, alias = "Printer")]
    pub printer: String,
}

/// A single print operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Operation {
    /// Action tag, e.g. `"fontSize"` or `"text"`.
    #[serde(alias = "Action")]
    pub action: String,
    /// Operand; its format depends on the action.
    #[serde(default, alias = "Data")]
    pub data: String,
}

impl Operation {
    pub fn new(action: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            data: data.into(),
        }
    }
}
