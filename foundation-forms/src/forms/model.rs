//! Model binding seam
//!
//! [`FormModel`] is everything the form needs from a data model: its
//! input name prefix, attribute values, validation errors, labels and
//! client-side rules. [`ModelForm`] implements it for any serde-serialisable
//! struct, optionally validated with the `validator` crate.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use serde_json::Value;
use validator::Validate;

use super::error::ValidationErrors;
use super::validation::ClientRule;
use crate::error::FormError;

/// Current value of a model attribute
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttributeValue {
    /// No value (null or unset)
    #[default]
    Empty,
    /// A single value, compared as a string
    Single(String),
    /// Several values (checkbox lists, multi-selects)
    Multiple(Vec<String>),
}

impl AttributeValue {
    /// Whether `candidate` is selected by this value
    ///
    /// A single value selects by string equality, a list by containment.
    /// An empty value selects the empty string.
    #[must_use]
    pub fn selects(&self, candidate: &str) -> bool {
        match self {
            Self::Empty => candidate.is_empty(),
            Self::Single(value) => value == candidate,
            Self::Multiple(values) => values.iter().any(|v| v == candidate),
        }
    }

    /// Whether the value reads as "on" for a single checkbox
    ///
    /// Empty text, `"0"` and empty lists are off.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Single(value) => !value.is_empty() && value != "0",
            Self::Multiple(values) => !values.is_empty(),
        }
    }

    /// The value as text for `value` attributes and textareas
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Empty | Self::Multiple(_) => None,
        }
    }

    fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::String(s) => Self::Single(s.clone()),
            Value::Bool(b) => Self::Single(if *b { "1" } else { "0" }.to_string()),
            Value::Number(n) => Self::Single(n.to_string()),
            Value::Array(items) => Self::Multiple(
                items
                    .iter()
                    .filter_map(|item| match Self::from_json(item) {
                        Self::Single(s) => Some(s),
                        Self::Empty | Self::Multiple(_) => None,
                    })
                    .collect(),
            ),
            Value::Object(_) => Self::Single(value.to_string()),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

/// A data model rendered by an active form
pub trait FormModel {
    /// Prefix for input names (`User` in `User[email]`)
    fn form_name(&self) -> &str;

    /// Current value of an attribute, `None` if the model has no such attribute
    fn attribute_value(&self, attribute: &str) -> Option<AttributeValue>;

    /// Validation errors for the model
    fn errors(&self) -> &ValidationErrors;

    /// Display label for an attribute
    fn attribute_label(&self, attribute: &str) -> String {
        humanize(attribute)
    }

    /// Whether the attribute must be filled in
    fn is_attribute_required(&self, _attribute: &str) -> bool {
        false
    }

    /// Client-side rules mirroring the server validators for an attribute
    fn client_rules(&self, _attribute: &str) -> Vec<ClientRule> {
        Vec::new()
    }

    /// Whether the model has not been persisted yet
    fn is_new_record(&self) -> bool {
        true
    }

    /// Whether an attribute has validation errors
    fn has_errors(&self, attribute: &str) -> bool {
        self.errors().has_field_error(attribute)
    }
}

/// Turn an attribute name into a label
///
/// ```rust
/// use foundation_forms::forms::humanize;
///
/// assert_eq!(humanize("first_name"), "First Name");
/// assert_eq!(humanize("createdAt"), "Created At");
/// ```
#[must_use]
pub fn humanize(attribute: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for c in attribute.chars() {
        if c == '_' || c == '-' || c == '.' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// [`FormModel`] adapter over a serde-serialisable struct
///
/// Attribute values are read from the struct's serde representation, so the
/// field names the form uses are the serialised names.
///
/// # Examples
///
/// ```rust
/// use foundation_forms::forms::{FormModel, ModelForm};
/// use serde::Serialize;
/// use validator::Validate;
///
/// #[derive(Serialize, Validate)]
/// struct Signup {
///     #[validate(email(message = "is not a valid email"))]
///     email: String,
/// }
///
/// let signup = Signup { email: "nope".into() };
/// let model = ModelForm::validated("Signup", &signup).unwrap().required("email");
///
/// assert!(model.has_errors("email"));
/// assert!(model.is_attribute_required("email"));
/// ```
#[derive(Debug, Clone)]
pub struct ModelForm {
    name: String,
    values: serde_json::Map<String, Value>,
    errors: ValidationErrors,
    labels: HashMap<String, String>,
    required: HashSet<String>,
    rules: Vec<(String, ClientRule)>,
    new_record: bool,
}

impl ModelForm {
    /// Bind a struct without running validation
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Serialization`] if the struct does not serialise
    /// to a JSON object.
    pub fn new<T: Serialize>(name: impl Into<String>, data: &T) -> Result<Self, FormError> {
        let name = name.into();
        let values = match serde_json::to_value(data)? {
            Value::Object(map) => map,
            other => {
                return Err(FormError::NotAnObject {
                    model: name,
                    kind: json_kind(&other),
                })
            }
        };
        Ok(Self {
            name,
            values,
            errors: ValidationErrors::new(),
            labels: HashMap::new(),
            required: HashSet::new(),
            rules: Vec::new(),
            new_record: true,
        })
    }

    /// Bind a struct and collect its `validator` errors
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Serialization`] if the struct does not serialise
    /// to a JSON object.
    pub fn validated<T: Serialize + Validate>(
        name: impl Into<String>,
        data: &T,
    ) -> Result<Self, FormError> {
        let mut model = Self::new(name, data)?;
        if let Err(errors) = data.validate() {
            model.errors = errors.into();
        }
        Ok(model)
    }

    /// Replace the validation errors
    #[must_use]
    pub fn with_errors(mut self, errors: ValidationErrors) -> Self {
        self.errors = errors;
        self
    }

    /// Override the label of an attribute
    #[must_use]
    pub fn label(mut self, attribute: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(attribute.into(), label.into());
        self
    }

    /// Mark an attribute as required and add a client-side required rule
    #[must_use]
    pub fn required(mut self, attribute: impl Into<String>) -> Self {
        let attribute = attribute.into();
        let label = self.attribute_label(&attribute);
        self.rules.push((
            attribute.clone(),
            ClientRule::Required {
                message: format!("{label} cannot be blank."),
            },
        ));
        self.required.insert(attribute);
        self
    }

    /// Add a client-side rule for an attribute
    #[must_use]
    pub fn rule(mut self, attribute: impl Into<String>, rule: ClientRule) -> Self {
        self.rules.push((attribute.into(), rule));
        self
    }

    /// Mark the model as already persisted
    #[must_use]
    pub const fn persisted(mut self) -> Self {
        self.new_record = false;
        self
    }
}

impl FormModel for ModelForm {
    fn form_name(&self) -> &str {
        &self.name
    }

    fn attribute_value(&self, attribute: &str) -> Option<AttributeValue> {
        self.values.get(attribute).map(AttributeValue::from_json)
    }

    fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    fn attribute_label(&self, attribute: &str) -> String {
        self.labels
            .get(attribute)
            .cloned()
            .unwrap_or_else(|| humanize(attribute))
    }

    fn is_attribute_required(&self, attribute: &str) -> bool {
        self.required.contains(attribute)
    }

    fn client_rules(&self, attribute: &str) -> Vec<ClientRule> {
        self.rules
            .iter()
            .filter(|(a, _)| a == attribute)
            .map(|(_, rule)| rule.clone())
            .collect()
    }

    fn is_new_record(&self) -> bool {
        self.new_record
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Validate)]
    struct Profile {
        #[validate(length(min = 2, message = "is too short"))]
        name: String,
        age: u32,
        newsletter: bool,
        tags: Vec<String>,
        nickname: Option<String>,
    }

    fn profile() -> Profile {
        Profile {
            name: "A".into(),
            age: 42,
            newsletter: true,
            tags: vec!["rust".into(), "web".into()],
            nickname: None,
        }
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("email"), "Email");
        assert_eq!(humanize("first_name"), "First Name");
        assert_eq!(humanize("createdAt"), "Created At");
        assert_eq!(humanize("address_line2"), "Address Line2");
    }

    #[test]
    fn test_attribute_values() {
        let model = ModelForm::new("Profile", &profile()).unwrap();
        assert_eq!(model.attribute_value("name"), Some(AttributeValue::Single("A".into())));
        assert_eq!(model.attribute_value("age"), Some(AttributeValue::Single("42".into())));
        assert_eq!(model.attribute_value("newsletter"), Some(AttributeValue::Single("1".into())));
        assert_eq!(
            model.attribute_value("tags"),
            Some(AttributeValue::Multiple(vec!["rust".into(), "web".into()]))
        );
        assert_eq!(model.attribute_value("nickname"), Some(AttributeValue::Empty));
        assert_eq!(model.attribute_value("missing"), None);
    }

    #[test]
    fn test_validated_collects_errors() {
        let model = ModelForm::validated("Profile", &profile()).unwrap();
        assert!(model.has_errors("name"));
        assert_eq!(model.errors().first("name"), Some("is too short"));
        assert!(!model.has_errors("age"));
    }

    #[test]
    fn test_non_object_is_rejected() {
        let result = ModelForm::new("Scalar", &42);
        assert!(matches!(result, Err(FormError::NotAnObject { kind: "number", .. })));
    }

    #[test]
    fn test_required_adds_rule_and_flag() {
        let model = ModelForm::new("Profile", &profile())
            .unwrap()
            .label("name", "Full name")
            .required("name")
            .persisted();

        assert!(model.is_attribute_required("name"));
        assert!(!model.is_new_record());
        assert_eq!(model.attribute_label("name"), "Full name");
        assert_eq!(
            model.client_rules("name"),
            vec![ClientRule::Required {
                message: "Full name cannot be blank.".into()
            }]
        );
        assert!(model.client_rules("age").is_empty());
    }

    #[test]
    fn test_selects() {
        let single = AttributeValue::from("b");
        assert!(single.selects("b"));
        assert!(!single.selects("a"));

        let multiple = AttributeValue::from(vec!["a".to_string(), "c".to_string()]);
        assert!(multiple.selects("a"));
        assert!(!multiple.selects("b"));

        assert!(AttributeValue::Empty.selects(""));
        assert!(!AttributeValue::Empty.selects("0"));
    }

    #[test]
    fn test_is_truthy() {
        assert!(AttributeValue::from("1").is_truthy());
        assert!(AttributeValue::from("yes").is_truthy());
        assert!(!AttributeValue::from("0").is_truthy());
        assert!(!AttributeValue::from("").is_truthy());
        assert!(!AttributeValue::Empty.is_truthy());
        assert!(AttributeValue::from(vec!["a".to_string()]).is_truthy());
        assert!(!AttributeValue::from(Vec::<String>::new()).is_truthy());
    }
}
