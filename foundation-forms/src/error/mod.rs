//! Error types and error handling

use thiserror::Error;

use crate::forms::RowType;

/// Form rendering error type
#[derive(Debug, Error)]
pub enum FormError {
    /// The model has no such attribute
    #[error("Unknown attribute '{attribute}' on model {model}")]
    UnknownAttribute {
        /// Model form name
        model: String,
        /// Requested attribute
        attribute: String,
    },

    /// A row was rendered without the data it needs
    #[error("{row} row requires {expected} data")]
    MissingRowData {
        /// Row being rendered
        row: RowType,
        /// Kind of data expected
        expected: &'static str,
    },

    /// A model did not serialize to a JSON object
    #[error("Model {model} must serialize to an object, got {kind}")]
    NotAnObject {
        /// Model form name
        model: String,
        /// JSON kind produced instead
        kind: &'static str,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FormError {
    pub(crate) fn unknown_attribute(model: &str, attribute: &str) -> Self {
        tracing::warn!(model, attribute, "unknown model attribute");
        Self::UnknownAttribute {
            model: model.to_string(),
            attribute: attribute.to_string(),
        }
    }
}
