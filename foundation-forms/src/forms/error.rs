//! Validation error collection
//!
//! Holds the errors a model reports per attribute. Errors come from the
//! `validator` crate or are added by hand; the form only reads them.

/// A single validation error for an attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The error message
    pub message: String,
    /// Optional error code for programmatic handling
    pub code: Option<String>,
}

impl FieldError {
    /// Create a new field error with just a message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Create a field error with a message and code
    #[must_use]
    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validation errors keyed by attribute, in the order attributes first failed
///
/// # Examples
///
/// ```rust
/// use foundation_forms::forms::ValidationErrors;
///
/// let mut errors = ValidationErrors::new();
/// errors.add("email", "is required");
/// errors.add("email", "must be a valid email address");
/// errors.add("password", "must be at least 8 characters");
///
/// assert!(errors.has_errors());
/// assert_eq!(errors.first("email"), Some("is required"));
/// assert_eq!(errors.for_field("email").len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<(String, Vec<FieldError>)>,
}

impl ValidationErrors {
    /// Create a new empty error collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, field: String) -> &mut Vec<FieldError> {
        let pos = match self.errors.iter().position(|(f, _)| *f == field) {
            Some(pos) => pos,
            None => {
                self.errors.push((field, Vec::new()));
                self.errors.len() - 1
            }
        };
        &mut self.errors[pos].1
    }

    /// Add an error for an attribute
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entry(field.into()).push(FieldError::new(message));
    }

    /// Add an error with a code for an attribute
    pub fn add_with_code(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) {
        self.entry(field.into())
            .push(FieldError::with_code(message, code));
    }

    /// Check if there are any errors
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(|(_, e)| !e.is_empty())
    }

    /// Check if a specific attribute has errors
    #[must_use]
    pub fn has_field_error(&self, field: &str) -> bool {
        !self.for_field(field).is_empty()
    }

    /// Get all errors for a specific attribute
    #[must_use]
    pub fn for_field(&self, field: &str) -> &[FieldError] {
        self.errors
            .iter()
            .find(|(f, _)| f == field)
            .map_or(&[], |(_, e)| e.as_slice())
    }

    /// First error message for an attribute
    #[must_use]
    pub fn first(&self, field: &str) -> Option<&str> {
        self.for_field(field).first().map(|e| e.message.as_str())
    }

    /// Get all attribute names that have errors
    #[must_use]
    pub fn fields_with_errors(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|(_, e)| !e.is_empty())
            .map(|(f, _)| f.as_str())
            .collect()
    }

    /// Iterate over all errors in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FieldError])> {
        self.errors
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Convert from validator crate's `ValidationErrors`
///
/// Attributes are sorted by name since the validator crate reports them
/// from a hash map.
impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut result = Self::new();
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        for (field, field_errors) in fields {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                result.add_with_code(field.to_string(), message, error.code.to_string());
            }
        }
        result
    }
}
