//! HTML attribute maps, tag assembly and escaping
//!
//! Every element emitted by the form renderers goes through [`tag`], so
//! escaping and attribute order are decided in one place. Input-like
//! elements render `type`, `name`, `id` and `value` first, then caller
//! attributes in insertion order, then boolean attributes.
//!
//! # Examples
//!
//! ```rust
//! use foundation_forms::html::{tag, HtmlOptions};
//!
//! let options = HtmlOptions::new().with("class", "error").with("id", "User_email_em_");
//! let html = tag("small", &options, Some("is required"));
//! assert_eq!(html, r#"<small class="error" id="User_email_em_">is required</small>"#);
//! ```

/// Attributes that input-like elements render before all others.
const LEADING_ATTRS: [&str; 4] = ["type", "name", "id", "value"];

/// Insertion-ordered HTML attribute map
///
/// A `None` value is a boolean attribute such as `checked` or `required`.
/// Setting a name that already exists replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlOptions {
    attrs: Vec<(String, Option<String>)>,
}

impl HtmlOptions {
    /// Create an empty attribute map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute and return the map (builder style)
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a boolean attribute and return the map (builder style)
    #[must_use]
    pub fn with_flag(mut self, name: impl Into<String>) -> Self {
        self.set_flag(name);
        self
    }

    /// Set an attribute value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.insert(name.into(), Some(value.into()));
    }

    /// Set a boolean attribute
    pub fn set_flag(&mut self, name: impl Into<String>) {
        self.insert(name.into(), None);
    }

    fn insert(&mut self, name: String, value: Option<String>) {
        if let Some(slot) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    /// Get an attribute value. Boolean attributes yield an empty string.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    /// Check whether an attribute is present
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n == name)
    }

    /// Remove an attribute, returning its value
    ///
    /// Boolean attributes yield an empty string.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|(n, _)| n == name)?;
        Some(self.attrs.remove(pos).1.unwrap_or_default())
    }

    /// Set an attribute only if it is not present yet
    pub fn set_default(&mut self, name: &str, value: impl Into<String>) {
        if !self.contains(name) {
            self.set(name, value);
        }
    }

    /// Append a CSS class, separated by a space from any existing classes
    pub fn append_class(&mut self, class: &str) {
        if class.is_empty() {
            return;
        }
        match self.get("class") {
            Some(existing) if !existing.is_empty() => {
                let merged = format!("{existing} {class}");
                self.set("class", merged);
            }
            _ => self.set("class", class),
        }
    }

    /// Append an inline style declaration
    ///
    /// Trailing semicolons on the existing style are trimmed before joining
    /// with `;`.
    pub fn append_style(&mut self, style: &str) {
        match self.get("style") {
            Some(existing) if !existing.is_empty() => {
                let merged = format!("{};{style}", existing.trim_end_matches(';'));
                self.set("style", merged);
            }
            _ => self.set("style", style),
        }
    }

    /// Copy every attribute of `other` into this map
    pub fn merge(&mut self, other: &Self) {
        for (name, value) in &other.attrs {
            self.insert(name.clone(), value.clone());
        }
    }

    /// Number of attributes
    #[must_use]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Whether the map is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterate over attributes in render order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v.as_deref()))
    }

    /// Reorder for input-like elements: `type`, `name`, `id`, `value`, then
    /// valued attributes in insertion order, then boolean attributes.
    #[must_use]
    pub fn input_order(&self) -> Self {
        let mut attrs = Vec::with_capacity(self.attrs.len());
        for lead in LEADING_ATTRS {
            if let Some(entry) = self.attrs.iter().find(|(n, _)| n == lead) {
                attrs.push(entry.clone());
            }
        }
        let rest = self
            .attrs
            .iter()
            .filter(|(n, _)| !LEADING_ATTRS.contains(&n.as_str()));
        let (valued, flags): (Vec<_>, Vec<_>) = rest.partition(|(_, v)| v.is_some());
        attrs.extend(valued.into_iter().cloned());
        attrs.extend(flags.into_iter().cloned());
        Self { attrs }
    }

    /// Render as a leading-space attribute string (` a="b" c`)
    #[must_use]
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(self.attrs.len() * 16);
        for (name, value) in &self.attrs {
            html.push(' ');
            html.push_str(name);
            if let Some(value) = value {
                html.push_str("=\"");
                html.push_str(&escape_attr(value));
                html.push('"');
            }
        }
        html
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for HtmlOptions {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (name, value) in iter {
            options.set(name, value);
        }
        options
    }
}

impl<const N: usize> From<[(&str, &str); N]> for HtmlOptions {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Render an element
///
/// `None` content renders a void element (`<input ...>`). Content is
/// inserted as-is; escape text with [`escape_html`] first.
#[must_use]
pub fn tag(name: &str, options: &HtmlOptions, content: Option<&str>) -> String {
    let attrs = options.render();
    content.map_or_else(
        || format!("<{name}{attrs}>"),
        |content| format!("<{name}{attrs}>{content}</{name}>"),
    )
}

/// Render an `<input>` with the input attribute order
#[must_use]
pub fn input_tag(input_type: &str, name: &str, value: Option<&str>, options: &HtmlOptions) -> String {
    let mut attrs = options.clone();
    attrs.set("type", input_type);
    attrs.set("name", name);
    if let Some(value) = value {
        attrs.set("value", value);
    }
    tag("input", &attrs.input_order(), None)
}

/// Render a hidden input. `id` of `None` omits the attribute.
#[must_use]
pub fn hidden_field(name: &str, value: &str, id: Option<&str>) -> String {
    let mut attrs = HtmlOptions::new();
    if let Some(id) = id {
        attrs.set("id", id);
    }
    input_tag("hidden", name, Some(value), &attrs)
}

/// Escape a string for use in HTML attribute values
#[must_use]
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a string for use in HTML content
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Resolve the input name for a model attribute
///
/// Returns the full input name and the bare attribute used to read the
/// model value:
///
/// - `email` gives `User[email]` and `email`
/// - `tags[0]` gives `User[tags][0]` and `tags`
/// - `[3]email` gives `User[3][email]` and `email`
///
/// ```rust
/// use foundation_forms::html::resolve_name;
///
/// assert_eq!(resolve_name("User", "tags[0]"), ("User[tags][0]".to_string(), "tags".to_string()));
/// ```
#[must_use]
pub fn resolve_name(form_name: &str, attribute: &str) -> (String, String) {
    match attribute.find('[') {
        Some(0) => match attribute.rfind(']') {
            Some(end) if end + 1 < attribute.len() => {
                let (prefix, bare) = attribute.split_at(end + 1);
                (format!("{form_name}{prefix}[{bare}]"), bare.to_string())
            }
            _ => (format!("{form_name}{attribute}"), attribute.to_string()),
        },
        Some(pos) => {
            let (bare, suffix) = attribute.split_at(pos);
            (format!("{form_name}[{bare}]{suffix}"), bare.to_string())
        }
        None => (format!("{form_name}[{attribute}]"), attribute.to_string()),
    }
}

/// Derive an element id from an input name
///
/// ```rust
/// use foundation_forms::html::id_by_name;
///
/// assert_eq!(id_by_name("User[tags][]"), "User_tags");
/// assert_eq!(id_by_name("User[3][email]"), "User_3_email");
/// ```
#[must_use]
pub fn id_by_name(name: &str) -> String {
    name.replace("[]", "")
        .replace("][", "_")
        .replace('[', "_")
        .replace(']', "")
        .replace(' ', "_")
}

/// Element id for a model attribute
#[must_use]
pub fn active_id(form_name: &str, attribute: &str) -> String {
    id_by_name(&resolve_name(form_name, attribute).0)
}
