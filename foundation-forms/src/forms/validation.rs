//! Client-side validation wiring
//!
//! [`ActiveForm::error`](super::ActiveForm::error) records one
//! [`AttributeValidation`] per input. [`ActiveForm::end`](super::ActiveForm::end)
//! serialises them into [`ClientOptions`] for the browser. The
//! [`ValidationResponse`] is the JSON payload returned by an AJAX
//! validation endpoint.

use std::collections::BTreeMap;

use axum::response::{IntoResponse, Json, Response};
use http::StatusCode;
use serde::Serialize;

use super::model::FormModel;
use crate::html::{active_id, HtmlOptions};

/// A client-side validation rule
///
/// Rules are emitted as data and interpreted by the client script, never as
/// generated JavaScript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientRule {
    /// Value must not be blank
    Required {
        /// Message shown when the rule fails
        message: String,
    },
    /// String length bounds
    Length {
        /// Minimum length
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<usize>,
        /// Maximum length
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
        /// Message shown when the rule fails
        message: String,
    },
    /// Value must look like an email address
    Email {
        /// Message shown when the rule fails
        message: String,
    },
    /// Value must match a regular expression
    Pattern {
        /// Regular expression source
        pattern: String,
        /// Message shown when the rule fails
        message: String,
    },
    /// Numeric bounds
    Range {
        /// Lower bound
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<String>,
        /// Upper bound
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<String>,
        /// Message shown when the rule fails
        message: String,
    },
    /// Value must equal another input
    Compare {
        /// Id of the other input
        other: String,
        /// Message shown when the rule fails
        message: String,
    },
    /// Name of a client-side function registered by the page
    Script {
        /// Registered function name
        function: String,
    },
}

impl ClientRule {
    /// Required rule
    #[must_use]
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required {
            message: message.into(),
        }
    }

    /// Length rule
    #[must_use]
    pub fn length(min: Option<usize>, max: Option<usize>, message: impl Into<String>) -> Self {
        Self::Length {
            min,
            max,
            message: message.into(),
        }
    }

    /// Email rule
    #[must_use]
    pub fn email(message: impl Into<String>) -> Self {
        Self::Email {
            message: message.into(),
        }
    }

    /// Pattern rule
    #[must_use]
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

/// Options for [`ActiveForm::error`](super::ActiveForm::error)
///
/// The typed fields are the client options that may be set per attribute.
/// They go into the validation bag and never reach the HTML attributes.
#[derive(Debug, Clone)]
pub struct ErrorOptions {
    /// Attributes for the error element
    pub html: HtmlOptions,
    /// Id of the input the error belongs to (defaults to the attribute id)
    pub input_id: Option<String>,
    /// Enable AJAX validation for this attribute
    pub enable_ajax_validation: bool,
    /// Enable client-side validation for this attribute
    pub enable_client_validation: bool,
    /// Extra client-side function run before the model rules
    pub client_validation: Option<String>,
    /// Delay in milliseconds before validating after input
    pub validation_delay: Option<u64>,
    /// Validate when the input changes
    pub validate_on_change: Option<bool>,
    /// Validate while typing
    pub validate_on_type: Option<bool>,
    /// Hide the error message, only toggle CSS classes
    pub hide_error_message: Option<bool>,
    /// Selector of the container that receives state classes
    pub input_container: Option<String>,
    /// Class set on the container on error
    pub error_css_class: Option<String>,
    /// Class set on the container on success
    pub success_css_class: Option<String>,
    /// Class set on the container while validating
    pub validating_css_class: Option<String>,
    /// Client function called before validating the attribute
    pub before_validate_attribute: Option<String>,
    /// Client function called after validating the attribute
    pub after_validate_attribute: Option<String>,
}

impl Default for ErrorOptions {
    fn default() -> Self {
        Self {
            html: HtmlOptions::new(),
            input_id: None,
            enable_ajax_validation: true,
            enable_client_validation: true,
            client_validation: None,
            validation_delay: None,
            validate_on_change: None,
            validate_on_type: None,
            hide_error_message: None,
            input_container: None,
            error_css_class: None,
            success_css_class: None,
            validating_css_class: None,
            before_validate_attribute: None,
            after_validate_attribute: None,
        }
    }
}

impl ErrorOptions {
    /// Options with attributes for the error element
    #[must_use]
    pub fn with_html(html: HtmlOptions) -> Self {
        Self {
            html,
            ..Self::default()
        }
    }

    /// Options with AJAX and client validation switched off
    #[must_use]
    pub fn static_only() -> Self {
        Self {
            enable_ajax_validation: false,
            enable_client_validation: false,
            ..Self::default()
        }
    }
}

/// Validation bag recorded for one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeValidation {
    /// Bare model attribute, used to look errors up again
    #[serde(skip)]
    pub(crate) attribute: String,
    /// Attribute id
    pub id: String,
    /// Input element id
    #[serde(rename = "inputID")]
    pub input_id: String,
    /// Error element id
    #[serde(rename = "errorID")]
    pub error_id: String,
    /// Model form name
    pub model: String,
    /// Input name
    pub name: String,
    /// Whether AJAX validation runs for this input
    pub enable_ajax_validation: bool,
    /// Container selector receiving state classes
    pub input_container: String,
    /// `1` when the model is already persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u8>,
    /// Client-side rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_validation: Option<Vec<ClientRule>>,
    /// Delay in milliseconds before validating after input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_delay: Option<u64>,
    /// Validate when the input changes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_on_change: Option<bool>,
    /// Validate while typing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_on_type: Option<bool>,
    /// Hide the error message, only toggle CSS classes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_error_message: Option<bool>,
    /// Class set on the container on error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_css_class: Option<String>,
    /// Class set on the container on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_css_class: Option<String>,
    /// Class set on the container while validating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validating_css_class: Option<String>,
    /// Client function called before validating the attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_validate_attribute: Option<String>,
    /// Client function called after validating the attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_validate_attribute: Option<String>,
}

impl AttributeValidation {
    /// Copy the allow-listed per-attribute options
    pub(crate) fn apply(&mut self, options: &ErrorOptions) {
        if let Some(ref container) = options.input_container {
            self.input_container.clone_from(container);
        }
        self.validation_delay = options.validation_delay;
        self.validate_on_change = options.validate_on_change;
        self.validate_on_type = options.validate_on_type;
        self.hide_error_message = options.hide_error_message;
        self.error_css_class.clone_from(&options.error_css_class);
        self.success_css_class.clone_from(&options.success_css_class);
        self.validating_css_class
            .clone_from(&options.validating_css_class);
        self.before_validate_attribute
            .clone_from(&options.before_validate_attribute);
        self.after_validate_attribute
            .clone_from(&options.after_validate_attribute);
    }
}

/// Client configuration emitted after the closing form tag
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientOptions<'a> {
    /// Validation bags in recording order
    pub attributes: Vec<&'a AttributeValidation>,
    /// Id of the error summary, if one was rendered
    #[serde(rename = "summaryID", skip_serializing_if = "Option::is_none")]
    pub summary_id: Option<&'a str>,
    /// URL receiving AJAX validation requests
    pub validation_url: &'a str,
    /// Validate the whole form on submit
    pub validate_on_submit: bool,
    /// Validate attributes when they change
    pub validate_on_change: bool,
    /// Validate attributes while typing
    pub validate_on_type: bool,
    /// Delay in milliseconds before validating after input
    pub validation_delay: u64,
    /// Class for inputs in error state
    pub error_css: &'a str,
    /// Class for inputs that passed validation
    pub success_css: &'a str,
    /// Class for inputs being validated
    pub validating_css: &'a str,
    /// Default container selector receiving state classes
    pub input_container: &'a str,
}

/// Validation errors keyed by input id
///
/// Serialises to `{"User_email": ["is required"]}` and can be returned from
/// an axum handler directly.
///
/// ```rust
/// use foundation_forms::forms::{validation_response, ModelForm, ValidationErrors};
///
/// let mut errors = ValidationErrors::new();
/// errors.add("email", "is required");
/// let model = ModelForm::new("User", &serde_json::json!({"email": ""}))
///     .unwrap()
///     .with_errors(errors);
///
/// let response = validation_response(&[&model]);
/// assert_eq!(response.to_json(), r#"{"User_email":["is required"]}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResponse {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationResponse {
    /// Whether no errors were collected
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages for one input id
    #[must_use]
    pub fn for_input(&self, input_id: &str) -> &[String] {
        self.errors.get(input_id).map_or(&[], Vec::as_slice)
    }

    /// Serialise to a JSON string
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.errors).unwrap_or_else(|_| "{}".to_string())
    }
}

impl IntoResponse for ValidationResponse {
    fn into_response(self) -> Response {
        let status = if self.is_valid() {
            StatusCode::OK
        } else {
            StatusCode::UNPROCESSABLE_ENTITY
        };
        (status, Json(self.errors)).into_response()
    }
}

/// Collect the errors of several models keyed by input id
#[must_use]
pub fn validation_response(models: &[&dyn FormModel]) -> ValidationResponse {
    let mut response = ValidationResponse::default();
    for model in models {
        for (attribute, errors) in model.errors().iter() {
            if errors.is_empty() {
                continue;
            }
            response
                .errors
                .entry(active_id(model.form_name(), attribute))
                .or_default()
                .extend(errors.iter().map(|e| e.message.clone()));
        }
    }
    tracing::debug!(inputs = response.errors.len(), "collected validation response");
    response
}
