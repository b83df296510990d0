//! Row types and per-row options
//!
//! Defines the kinds of input rows an active form renders and the options
//! that tune a single row or list.

use crate::html::HtmlOptions;

use super::validation::ErrorOptions;

/// Kind of input row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowType {
    /// Text input (default)
    #[default]
    Text,
    /// Password input (masked)
    Password,
    /// Multi-line text
    TextArea,
    /// File upload
    File,
    /// Single checkbox
    Checkbox,
    /// Single radio button
    Radio,
    /// Checkbox list
    CheckboxList,
    /// Radio button list
    RadioList,
    /// Drop-down list
    DropDown,
    /// Captcha image plus text input
    Captcha,
}

impl RowType {
    /// Get the HTML type attribute value for single-input rows
    #[must_use]
    pub const fn input_type(&self) -> Option<&'static str> {
        match self {
            Self::Text | Self::Captcha => Some("text"),
            Self::Password => Some("password"),
            Self::File => Some("file"),
            Self::Checkbox => Some("checkbox"),
            Self::Radio => Some("radio"),
            Self::TextArea | Self::CheckboxList | Self::RadioList | Self::DropDown => None,
        }
    }

    /// Whether the row takes list data
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::CheckboxList | Self::RadioList | Self::DropDown)
    }

    /// Whether the row renders its label around the input
    #[must_use]
    pub const fn wraps_label(&self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio)
    }

    /// Whether the row is a text-like input
    #[must_use]
    pub const fn is_text_like(&self) -> bool {
        matches!(self, Self::Text | Self::Password | Self::TextArea | Self::Captcha)
    }
}

impl std::fmt::Display for RowType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::TextArea => "textarea",
            Self::File => "file",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::CheckboxList => "checkboxlist",
            Self::RadioList => "radiolist",
            Self::DropDown => "dropdown",
            Self::Captcha => "captcha",
        };
        f.write_str(name)
    }
}

/// One value/label pair of list data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Submitted value
    pub value: String,
    /// Display text
    pub label: String,
}

impl ListItem {
    /// Create a new list item
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Ordered value/label pairs for checkbox lists, radio lists and drop-downs
///
/// ```rust
/// use foundation_forms::forms::ListData;
///
/// let data = ListData::from([("s", "Small"), ("m", "Medium")]);
/// assert_eq!(data.len(), 2);
/// assert_eq!(data.label_of("m"), Some("Medium"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListData {
    items: Vec<ListItem>,
}

impl ListData {
    /// Create empty list data
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item and return the list (builder style)
    #[must_use]
    pub fn item(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.items.push(ListItem::new(value, label));
        self
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over items in order
    pub fn iter(&self) -> std::slice::Iter<'_, ListItem> {
        self.items.iter()
    }

    /// Label of the item with the given value
    #[must_use]
    pub fn label_of(&self, value: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.value == value)
            .map(|item| item.label.as_str())
    }
}

impl<V: Into<String>, L: Into<String>> FromIterator<(V, L)> for ListData {
    fn from_iter<I: IntoIterator<Item = (V, L)>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|(value, label)| ListItem::new(value, label))
                .collect(),
        }
    }
}

impl<const N: usize> From<[(&str, &str); N]> for ListData {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a ListData {
    type Item = &'a ListItem;
    type IntoIter = std::slice::Iter<'a, ListItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Options for checkbox lists, radio lists and drop-downs
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Attributes applied to every input (or to the `<select>`)
    pub html: HtmlOptions,
    /// Attributes for each item label
    pub label_options: HtmlOptions,
    /// Value submitted when nothing is checked; `None` omits the hidden field
    pub uncheck_value: Option<String>,
    /// Leading drop-down option with an empty value
    pub prompt: Option<String>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            html: HtmlOptions::new(),
            label_options: HtmlOptions::new(),
            uncheck_value: Some(String::new()),
            prompt: None,
        }
    }
}

impl ListOptions {
    /// Options with attributes for the inputs
    #[must_use]
    pub fn with_html(html: HtmlOptions) -> Self {
        Self {
            html,
            ..Self::default()
        }
    }

    /// Suppress the hidden uncheck field
    #[must_use]
    pub fn without_uncheck(mut self) -> Self {
        self.uncheck_value = None;
        self
    }

    /// Set the drop-down prompt
    #[must_use]
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }
}

/// Captcha image settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptchaOptions {
    /// URL of the captcha image
    pub image_url: String,
    /// Alternative text for the image
    pub alt: String,
    /// URL that serves a fresh image, rendered as a link when set
    pub refresh_url: Option<String>,
}

impl CaptchaOptions {
    /// Captcha served from `image_url`
    #[must_use]
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            alt: String::new(),
            refresh_url: None,
        }
    }
}

/// Data passed to a row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RowData {
    /// No data
    #[default]
    None,
    /// Items for list rows
    List(ListData),
    /// Settings for captcha rows
    Captcha(CaptchaOptions),
}

impl RowData {
    /// List items, empty for non-list data
    #[must_use]
    pub fn list(&self) -> ListData {
        match self {
            Self::List(data) => data.clone(),
            Self::None | Self::Captcha(_) => ListData::new(),
        }
    }
}

impl From<ListData> for RowData {
    fn from(data: ListData) -> Self {
        Self::List(data)
    }
}

impl From<CaptchaOptions> for RowData {
    fn from(options: CaptchaOptions) -> Self {
        Self::Captcha(options)
    }
}

/// Options for a single input row
#[derive(Debug, Clone, Default)]
pub struct RowOptions {
    /// Attributes for the input element
    pub html: HtmlOptions,
    /// Attributes for the label
    pub label_options: HtmlOptions,
    /// Label text overriding the model label
    pub label: Option<String>,
    /// Help text rendered below the input
    pub hint: Option<String>,
    /// Checkbox/radio/list uncheck value; `None` keeps the row default
    pub uncheck_value: Option<Option<String>>,
    /// Drop-down prompt
    pub prompt: Option<String>,
    /// Options for the row's error element
    pub error: ErrorOptions,
}

impl RowOptions {
    /// Options with attributes for the input
    #[must_use]
    pub fn with_html(html: HtmlOptions) -> Self {
        Self {
            html,
            ..Self::default()
        }
    }

    /// Set the label text
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the hint text
    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Set the error element options
    #[must_use]
    pub fn error(mut self, error: ErrorOptions) -> Self {
        self.error = error;
        self
    }

    /// List options derived from this row
    pub(crate) fn list_options(&self) -> ListOptions {
        let mut options = ListOptions {
            html: self.html.clone(),
            label_options: HtmlOptions::new(),
            prompt: self.prompt.clone(),
            ..ListOptions::default()
        };
        if let Some(ref uncheck) = self.uncheck_value {
            options.uncheck_value.clone_from(uncheck);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_types() {
        assert_eq!(RowType::Password.input_type(), Some("password"));
        assert_eq!(RowType::Captcha.input_type(), Some("text"));
        assert_eq!(RowType::DropDown.input_type(), None);
    }

    #[test]
    fn test_row_type_classification() {
        assert!(RowType::CheckboxList.is_list());
        assert!(!RowType::Checkbox.is_list());
        assert!(RowType::Radio.wraps_label());
        assert!(RowType::TextArea.is_text_like());
        assert!(!RowType::File.is_text_like());
        assert_eq!(RowType::RadioList.to_string(), "radiolist");
    }

    #[test]
    fn test_list_data_order() {
        let data = ListData::new().item("b", "Bee").item("a", "Ay");
        let values: Vec<_> = data.iter().map(|i| i.value.as_str()).collect();
        assert_eq!(values, ["b", "a"]);
        assert_eq!(data.label_of("z"), None);
    }

    #[test]
    fn test_list_options_default_uncheck() {
        let options = ListOptions::default();
        assert_eq!(options.uncheck_value.as_deref(), Some(""));
        assert!(options.without_uncheck().uncheck_value.is_none());
    }

    #[test]
    fn test_row_list_options() {
        let row = RowOptions {
            uncheck_value: Some(None),
            prompt: Some("Pick one".into()),
            ..RowOptions::default()
        };
        let list = row.list_options();
        assert!(list.uncheck_value.is_none());
        assert_eq!(list.prompt.as_deref(), Some("Pick one"));

        assert_eq!(RowOptions::default().list_options().uncheck_value.as_deref(), Some(""));
    }

    #[test]
    fn test_row_data_list() {
        let data: RowData = ListData::from([("1", "One")]).into();
        assert_eq!(data.list().len(), 1);
        assert!(RowData::None.list().is_empty());
    }
}
