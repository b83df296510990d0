//! The active form
//!
//! [`ActiveForm`] opens and closes the form, renders input rows bound to a
//! [`FormModel`], and records the client validation settings of every
//! attribute it renders an error element for. Closing the form emits those
//! settings as a JSON script block.
//!
//! # Examples
//!
//! ```rust
//! use foundation_forms::forms::{ActiveForm, FormType, ModelForm, RowOptions};
//!
//! # fn main() -> Result<(), foundation_forms::error::FormError> {
//! let model = ModelForm::new("User", &serde_json::json!({"email": ""}))?.required("email");
//! let mut form = ActiveForm::new("signup", "/signup").form_type(FormType::Nice);
//!
//! let mut html = form.begin();
//! html.push_str(&form.text_field_row(&model, "email", RowOptions::default())?);
//! html.push_str(&form.end()?);
//!
//! assert!(html.starts_with(r#"<form action="/signup" method="post" id="signup" class="nice">"#));
//! assert!(html.contains(r#"data-active-form="signup""#));
//! # Ok(())
//! # }
//! ```

use super::field::{CaptchaOptions, ListData, ListOptions, RowData, RowOptions, RowType};
use super::input::{Checkable, FormType};
use super::list::{drop_down_list, inputs_list, resolve_input, ListContext, ResolvedInput};
use super::model::FormModel;
use super::summary::{collect_messages, render_client_script, render_summary};
use super::validation::{AttributeValidation, ClientOptions, ClientRule, ErrorOptions};
use crate::config::{FormConfig, FormSettings, ValidationSettings};
use crate::error::FormError;
use crate::html::{escape_html, hidden_field, id_by_name, input_tag, resolve_name, tag, HtmlOptions};

/// Style that keeps placeholders in the DOM but out of sight
const HIDDEN_STYLE: &str = "display: none";

/// Name of the hidden CSRF token input
const CSRF_FIELD: &str = "_csrf_token";

/// Value of a single checkbox or radio row when none is given
const DEFAULT_CHECKED_VALUE: &str = "1";

/// Uncheck value of a single checkbox or radio row when none is given
const DEFAULT_UNCHECK_VALUE: &str = "0";

/// Text of the captcha refresh link
const CAPTCHA_REFRESH_TEXT: &str = "Get a new code";

/// A form bound to one or more models
#[derive(Debug, Clone)]
pub struct ActiveForm {
    id: String,
    action: String,
    method: String,
    form_type: FormType,
    html: HtmlOptions,
    csrf_token: Option<String>,
    enable_ajax_validation: bool,
    enable_client_validation: bool,
    validation_url: Option<String>,
    settings: FormSettings,
    validation: ValidationSettings,
    attributes: Vec<AttributeValidation>,
    summary_id: Option<String>,
}

impl ActiveForm {
    /// Create a form with the default configuration
    #[must_use]
    pub fn new(id: impl Into<String>, action: impl Into<String>) -> Self {
        Self::from_config(id, action, &FormConfig::default())
    }

    /// Create a form from loaded configuration
    #[must_use]
    pub fn from_config(id: impl Into<String>, action: impl Into<String>, config: &FormConfig) -> Self {
        Self {
            id: id.into(),
            action: action.into(),
            method: "post".to_string(),
            form_type: config.form.default_type,
            html: HtmlOptions::new(),
            csrf_token: None,
            enable_ajax_validation: config.validation.enable_ajax_validation,
            enable_client_validation: config.validation.enable_client_validation,
            validation_url: None,
            settings: config.form.clone(),
            validation: config.validation.clone(),
            attributes: Vec::new(),
            summary_id: None,
        }
    }

    /// Set the HTTP method
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Set the form type
    #[must_use]
    pub const fn form_type(mut self, form_type: FormType) -> Self {
        self.form_type = form_type;
        self
    }

    /// Add a CSS class to the form tag
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.html.append_class(class);
        self
    }

    /// Set an attribute on the form tag
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.html.set(name, value);
        self
    }

    /// Encode the form as `multipart/form-data` (for file uploads)
    #[must_use]
    pub fn multipart(mut self) -> Self {
        self.html.set("enctype", "multipart/form-data");
        self
    }

    /// Include a CSRF token field in non-GET forms
    #[must_use]
    pub fn csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// Switch AJAX validation on or off
    #[must_use]
    pub const fn enable_ajax_validation(mut self, enabled: bool) -> Self {
        self.enable_ajax_validation = enabled;
        self
    }

    /// Switch client-side validation on or off
    #[must_use]
    pub const fn enable_client_validation(mut self, enabled: bool) -> Self {
        self.enable_client_validation = enabled;
        self
    }

    /// URL receiving AJAX validation requests (defaults to the action)
    #[must_use]
    pub fn validation_url(mut self, url: impl Into<String>) -> Self {
        self.validation_url = Some(url.into());
        self
    }

    /// Form id
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Active form type
    #[must_use]
    pub const fn current_type(&self) -> FormType {
        self.form_type
    }

    /// Validation settings recorded so far, in recording order
    #[must_use]
    pub fn attributes(&self) -> &[AttributeValidation] {
        &self.attributes
    }

    /// Id of the rendered error summary, if any
    #[must_use]
    pub fn summary_id(&self) -> Option<&str> {
        self.summary_id.as_deref()
    }

    const fn validates(&self) -> bool {
        self.enable_ajax_validation || self.enable_client_validation
    }

    fn list_context(&self) -> ListContext<'_> {
        ListContext {
            renderer: self.form_type.renderer(),
            error_css: &self.settings.error_css,
            hidden_id_prefix: &self.settings.hidden_id_prefix,
        }
    }

    /// Render the opening form tag
    ///
    /// The form type class is appended to any class set on the form.
    /// Non-GET forms with a CSRF token get a hidden token field.
    #[must_use]
    pub fn begin(&self) -> String {
        let mut attrs = HtmlOptions::new()
            .with("action", self.action.as_str())
            .with("method", self.method.as_str())
            .with("id", self.id.as_str());
        attrs.merge(&self.html);
        attrs.append_class(self.form_type.css_class());

        let mut html = tag("form", &attrs, None);
        if let Some(ref token) = self.csrf_token {
            if !self.method.eq_ignore_ascii_case("get") {
                html.push_str(&hidden_field(CSRF_FIELD, token, None));
            }
        }
        html
    }

    /// Render the closing form tag and the client configuration
    ///
    /// The `<script type="application/json">` block is emitted when AJAX or
    /// client validation is on and at least one attribute was recorded.
    pub fn end(&self) -> Result<String, FormError> {
        let mut html = "</form>".to_string();
        if self.validates() && !self.attributes.is_empty() {
            let options = serde_json::to_string(&self.client_options())?;
            html.push_str(&render_client_script(&self.id, &options)?);
            tracing::debug!(
                form = %self.id,
                attributes = self.attributes.len(),
                "emitted client validation options"
            );
        }
        Ok(html)
    }

    /// Client configuration for the recorded attributes
    #[must_use]
    pub fn client_options(&self) -> ClientOptions<'_> {
        ClientOptions {
            attributes: self.attributes.iter().collect(),
            summary_id: self.summary_id.as_deref(),
            validation_url: self.validation_url.as_deref().unwrap_or(&self.action),
            validate_on_submit: self.validation.validate_on_submit,
            validate_on_change: self.validation.validate_on_change,
            validate_on_type: self.validation.validate_on_type,
            validation_delay: self.validation.validation_delay_ms,
            error_css: &self.settings.error_css,
            success_css: &self.settings.success_css,
            validating_css: &self.settings.validating_css,
            input_container: &self.settings.input_container,
        }
    }

    /// Render one row: label, input, hint and error element
    ///
    /// List rows take [`RowData::List`] and captcha rows take
    /// [`RowData::Captcha`].
    #[tracing::instrument(skip(self, model, data, options), fields(model = model.form_name()))]
    pub fn input_row(
        &mut self,
        row_type: RowType,
        model: &dyn FormModel,
        attribute: &str,
        data: RowData,
        options: RowOptions,
    ) -> Result<String, FormError> {
        let (name, bare) = resolve_name(model.form_name(), attribute);
        let has_error = model.has_errors(&bare);
        let input_id = options.html.get("id").map_or_else(
            || id_by_name(options.html.get("name").unwrap_or(&name)),
            str::to_string,
        );

        let mut content = String::new();
        if !row_type.wraps_label() {
            content.push_str(&self.label(model, &bare, &options, &input_id, has_error));
        }
        content.push_str(&self.row_input(row_type, model, attribute, data, &options)?);
        if let Some(ref hint) = options.hint {
            content.push_str(&tag(
                "p",
                &HtmlOptions::new().with("class", self.settings.hint_css.as_str()),
                Some(&escape_html(hint)),
            ));
        }

        let mut error_options = options.error;
        if error_options.input_id.is_none() && options.html.contains("id") {
            error_options.input_id = Some(input_id);
        }
        content.push_str(&self.error(model, attribute, error_options));

        let mut wrapper = HtmlOptions::new().with("class", self.settings.row_css.as_str());
        if has_error {
            wrapper.append_class(&self.settings.error_css);
        }
        tracing::trace!(row = %row_type, attribute, has_error, "rendered row");
        Ok(tag("div", &wrapper, Some(&content)))
    }

    fn row_input(
        &self,
        row_type: RowType,
        model: &dyn FormModel,
        attribute: &str,
        data: RowData,
        options: &RowOptions,
    ) -> Result<String, FormError> {
        match (row_type, data) {
            (RowType::Text | RowType::Password | RowType::File, _) => {
                self.single_input(row_type, model, attribute, &options.html)
            }
            (RowType::TextArea, _) => self.text_area(model, attribute, &options.html),
            (RowType::Checkbox, _) => self.checkable(Checkable::Checkbox, model, attribute, options),
            (RowType::Radio, _) => self.checkable(Checkable::Radio, model, attribute, options),
            (RowType::CheckboxList, RowData::List(items)) => {
                self.check_box_list(model, attribute, &items, &options.list_options())
            }
            (RowType::RadioList, RowData::List(items)) => {
                self.radio_button_list(model, attribute, &items, &options.list_options())
            }
            (RowType::DropDown, RowData::List(items)) => {
                self.drop_down_list(model, attribute, &items, &options.list_options())
            }
            (RowType::Captcha, RowData::Captcha(captcha)) => {
                self.captcha(model, attribute, &captcha, &options.html)
            }
            (RowType::CheckboxList | RowType::RadioList | RowType::DropDown, _) => {
                Err(FormError::MissingRowData {
                    row: row_type,
                    expected: "list",
                })
            }
            (RowType::Captcha, _) => Err(FormError::MissingRowData {
                row: row_type,
                expected: "captcha",
            }),
        }
    }

    fn label_text(model: &dyn FormModel, bare: &str, options: &RowOptions) -> String {
        let text = options
            .label
            .clone()
            .unwrap_or_else(|| model.attribute_label(bare));
        let mut html = escape_html(&text);
        if model.is_attribute_required(bare) {
            html.push_str(r#" <span class="required">*</span>"#);
        }
        html
    }

    fn label_attrs(&self, options: &RowOptions, for_id: &str, has_error: bool) -> HtmlOptions {
        let mut attrs = options.label_options.clone();
        attrs.set_default("for", for_id);
        if has_error {
            attrs.append_class(&self.settings.error_css);
        }
        attrs
    }

    fn label(
        &self,
        model: &dyn FormModel,
        bare: &str,
        options: &RowOptions,
        for_id: &str,
        has_error: bool,
    ) -> String {
        tag(
            "label",
            &self.label_attrs(options, for_id, has_error),
            Some(&Self::label_text(model, bare, options)),
        )
    }

    fn single_input(
        &self,
        row_type: RowType,
        model: &dyn FormModel,
        attribute: &str,
        html: &HtmlOptions,
    ) -> Result<String, FormError> {
        let ResolvedInput {
            name,
            id,
            selection,
            html: mut attrs,
        } = resolve_input(&self.list_context(), model, attribute, html)?;
        self.form_type.renderer().decorate_input(row_type, &mut attrs);
        attrs.set("id", id);

        let value = match row_type {
            RowType::File => None,
            _ => Some(selection.as_text().unwrap_or_default()),
        };
        Ok(input_tag(
            row_type.input_type().unwrap_or("text"),
            &name,
            value,
            &attrs,
        ))
    }

    fn text_area(
        &self,
        model: &dyn FormModel,
        attribute: &str,
        html: &HtmlOptions,
    ) -> Result<String, FormError> {
        let ResolvedInput {
            name,
            id,
            selection,
            html: mut attrs,
        } = resolve_input(&self.list_context(), model, attribute, html)?;
        self.form_type
            .renderer()
            .decorate_input(RowType::TextArea, &mut attrs);
        attrs.set("name", name);
        attrs.set("id", id);

        let text = escape_html(selection.as_text().unwrap_or_default());
        Ok(tag("textarea", &attrs.input_order(), Some(&text)))
    }

    /// Single checkbox or radio wrapped in its label, preceded by the
    /// hidden uncheck field
    fn checkable(
        &self,
        kind: Checkable,
        model: &dyn FormModel,
        attribute: &str,
        options: &RowOptions,
    ) -> Result<String, FormError> {
        let (_, bare) = resolve_name(model.form_name(), attribute);
        let ResolvedInput {
            name,
            id,
            selection,
            html: mut attrs,
        } = resolve_input(&self.list_context(), model, attribute, &options.html)?;

        let explicit = attrs.remove("value");
        let checked = attrs.contains("checked")
            || explicit
                .as_deref()
                .map_or_else(|| selection.is_truthy(), |value| selection.selects(value));
        let value = explicit.unwrap_or_else(|| DEFAULT_CHECKED_VALUE.to_string());
        if checked {
            attrs.set_flag("checked");
        }
        let row_type = match kind {
            Checkable::Checkbox => RowType::Checkbox,
            Checkable::Radio => RowType::Radio,
        };
        let renderer = self.form_type.renderer();
        renderer.decorate_input(row_type, &mut attrs);
        attrs.set("id", id.as_str());

        let uncheck = options
            .uncheck_value
            .clone()
            .unwrap_or_else(|| Some(DEFAULT_UNCHECK_VALUE.to_string()));
        let mut html = uncheck
            .map(|uncheck| {
                let hidden_id = format!("{}{id}", self.settings.hidden_id_prefix);
                hidden_field(&name, &uncheck, Some(&hidden_id))
            })
            .unwrap_or_default();

        let content = format!(
            "{}{}{}",
            input_tag(kind.input_type(), &name, Some(&value), &attrs),
            renderer.after_checkable(kind, checked),
            Self::label_text(model, &bare, options)
        );
        let label_attrs = self.label_attrs(options, &id, model.has_errors(&bare));
        html.push_str(&tag("label", &label_attrs, Some(&content)));
        Ok(html)
    }

    fn captcha(
        &self,
        model: &dyn FormModel,
        attribute: &str,
        captcha: &CaptchaOptions,
        html: &HtmlOptions,
    ) -> Result<String, FormError> {
        let image = HtmlOptions::new()
            .with("src", captcha.image_url.as_str())
            .with("alt", captcha.alt.as_str());
        let mut output = tag("img", &image, None);
        if let Some(ref refresh_url) = captcha.refresh_url {
            let link = HtmlOptions::new()
                .with("href", refresh_url.as_str())
                .with("class", "captcha-refresh");
            output.push_str(&tag("a", &link, Some(CAPTCHA_REFRESH_TEXT)));
        }
        output.push_str(&self.single_input(RowType::Captcha, model, attribute, html)?);
        Ok(output)
    }

    /// Render a checkbox list without a row
    pub fn check_box_list(
        &self,
        model: &dyn FormModel,
        attribute: &str,
        data: &ListData,
        options: &ListOptions,
    ) -> Result<String, FormError> {
        inputs_list(
            &self.list_context(),
            Checkable::Checkbox,
            model,
            attribute,
            data,
            options,
        )
    }

    /// Render a radio button list without a row
    pub fn radio_button_list(
        &self,
        model: &dyn FormModel,
        attribute: &str,
        data: &ListData,
        options: &ListOptions,
    ) -> Result<String, FormError> {
        inputs_list(
            &self.list_context(),
            Checkable::Radio,
            model,
            attribute,
            data,
            options,
        )
    }

    /// Render a drop-down list without a row
    pub fn drop_down_list(
        &self,
        model: &dyn FormModel,
        attribute: &str,
        data: &ListData,
        options: &ListOptions,
    ) -> Result<String, FormError> {
        drop_down_list(&self.list_context(), model, attribute, data, options)
    }

    /// Text input row
    pub fn text_field_row(
        &mut self,
        model: &dyn FormModel,
        attribute: &str,
        options: RowOptions,
    ) -> Result<String, FormError> {
        self.input_row(RowType::Text, model, attribute, RowData::None, options)
    }

    /// Password input row
    pub fn password_field_row(
        &mut self,
        model: &dyn FormModel,
        attribute: &str,
        options: RowOptions,
    ) -> Result<String, FormError> {
        self.input_row(RowType::Password, model, attribute, RowData::None, options)
    }

    /// Textarea row
    pub fn text_area_row(
        &mut self,
        model: &dyn FormModel,
        attribute: &str,
        options: RowOptions,
    ) -> Result<String, FormError> {
        self.input_row(RowType::TextArea, model, attribute, RowData::None, options)
    }

    /// File input row
    pub fn file_field_row(
        &mut self,
        model: &dyn FormModel,
        attribute: &str,
        options: RowOptions,
    ) -> Result<String, FormError> {
        self.input_row(RowType::File, model, attribute, RowData::None, options)
    }

    /// Single checkbox row
    pub fn check_box_row(
        &mut self,
        model: &dyn FormModel,
        attribute: &str,
        options: RowOptions,
    ) -> Result<String, FormError> {
        self.input_row(RowType::Checkbox, model, attribute, RowData::None, options)
    }

    /// Single radio button row
    pub fn radio_button_row(
        &mut self,
        model: &dyn FormModel,
        attribute: &str,
        options: RowOptions,
    ) -> Result<String, FormError> {
        self.input_row(RowType::Radio, model, attribute, RowData::None, options)
    }

    /// Checkbox list row
    pub fn check_box_list_row(
        &mut self,
        model: &dyn FormModel,
        attribute: &str,
        data: ListData,
        options: RowOptions,
    ) -> Result<String, FormError> {
        self.input_row(RowType::CheckboxList, model, attribute, data.into(), options)
    }

    /// Radio button list row
    pub fn radio_button_list_row(
        &mut self,
        model: &dyn FormModel,
        attribute: &str,
        data: ListData,
        options: RowOptions,
    ) -> Result<String, FormError> {
        self.input_row(RowType::RadioList, model, attribute, data.into(), options)
    }

    /// Drop-down list row
    pub fn drop_down_list_row(
        &mut self,
        model: &dyn FormModel,
        attribute: &str,
        data: ListData,
        options: RowOptions,
    ) -> Result<String, FormError> {
        self.input_row(RowType::DropDown, model, attribute, data.into(), options)
    }

    /// Captcha row
    pub fn captcha_row(
        &mut self,
        model: &dyn FormModel,
        attribute: &str,
        captcha: CaptchaOptions,
        options: RowOptions,
    ) -> Result<String, FormError> {
        self.input_row(RowType::Captcha, model, attribute, captcha.into(), options)
    }

    /// Render the error element of an attribute and record its client
    /// validation settings
    ///
    /// Without an error the element is still rendered, empty and hidden, so
    /// client validation has a place to put messages. With AJAX and client
    /// validation both off this is [`ActiveForm::error_html`] and nothing is
    /// recorded.
    pub fn error(&mut self, model: &dyn FormModel, attribute: &str, options: ErrorOptions) -> String {
        let ajax = self.enable_ajax_validation && options.enable_ajax_validation;
        let client = self.enable_client_validation && options.enable_client_validation;
        let mut html = options.html.clone();
        if !ajax && !client {
            return Self::error_html(model, attribute, &html);
        }

        let (name, bare) = resolve_name(model.form_name(), attribute);
        let id = id_by_name(&name);
        let input_id = options.input_id.clone().unwrap_or_else(|| id.clone());
        let error_id = html
            .get("id")
            .map_or_else(|| format!("{input_id}_em_"), str::to_string);
        html.set("id", error_id.as_str());

        let mut bag = AttributeValidation {
            attribute: bare.clone(),
            id,
            input_id,
            error_id,
            model: model.form_name().to_string(),
            name,
            enable_ajax_validation: ajax,
            input_container: self.settings.input_container.clone(),
            status: (!model.is_new_record()).then_some(1),
            client_validation: None,
            validation_delay: None,
            validate_on_change: None,
            validate_on_type: None,
            hide_error_message: None,
            error_css_class: None,
            success_css_class: None,
            validating_css_class: None,
            before_validate_attribute: None,
            after_validate_attribute: None,
        };
        bag.apply(&options);

        if client {
            let mut rules: Vec<ClientRule> = options
                .client_validation
                .map(|function| ClientRule::Script { function })
                .into_iter()
                .collect();
            rules.extend(model.client_rules(&bare));
            if !rules.is_empty() {
                bag.client_validation = Some(rules);
            }
        }
        self.record(bag);

        let markup = Self::error_html(model, attribute, &html);
        if markup.is_empty() {
            html.append_style(HIDDEN_STYLE);
            tag("small", &html, Some(""))
        } else {
            markup
        }
    }

    fn record(&mut self, bag: AttributeValidation) {
        tracing::debug!(
            form = %self.id,
            input_id = %bag.input_id,
            ajax = bag.enable_ajax_validation,
            rules = bag.client_validation.as_ref().map_or(0, Vec::len),
            "recorded attribute validation"
        );
        if let Some(existing) = self
            .attributes
            .iter_mut()
            .find(|existing| existing.input_id == bag.input_id)
        {
            *existing = bag;
        } else {
            self.attributes.push(bag);
        }
    }

    /// First error of an attribute in a `<small>` element, or an empty
    /// string when the attribute has no error
    #[must_use]
    pub fn error_html(model: &dyn FormModel, attribute: &str, html: &HtmlOptions) -> String {
        let (_, bare) = resolve_name(model.form_name(), attribute);
        model
            .errors()
            .first(&bare)
            .filter(|message| !message.is_empty())
            .map(|message| tag("small", html, Some(&escape_html(message))))
            .unwrap_or_default()
    }

    /// Summary of the errors of all given models
    ///
    /// `header` defaults to a short notice and `footer` to nothing; both are
    /// raw HTML. When AJAX or client validation is on the summary gets an id
    /// (`{form_id}_es_` unless given) and is rendered hidden when there are
    /// no errors yet.
    pub fn error_summary(
        &mut self,
        models: &[&dyn FormModel],
        header: Option<&str>,
        footer: Option<&str>,
        html: HtmlOptions,
    ) -> Result<String, FormError> {
        let messages = collect_messages(models);
        if !self.validates() && messages.is_empty() {
            return Ok(String::new());
        }

        let mut html = html;
        html.set_default("class", self.settings.error_summary_css.as_str());
        if self.validates() {
            let id = html
                .get("id")
                .map_or_else(|| format!("{}_es_", self.id), str::to_string);
            html.set("id", id.as_str());
            self.summary_id = Some(id);
            if messages.is_empty() {
                html.append_style(HIDDEN_STYLE);
            }
        }
        render_summary(&html, header, footer, messages)
    }

    /// Out-of-band error elements for every recorded attribute
    ///
    /// Each element replaces the error element with the same id when swapped
    /// in by htmx. Attributes without an error get the hidden placeholder so
    /// stale messages are cleared.
    #[must_use]
    pub fn error_fragments(&self, models: &[&dyn FormModel]) -> String {
        let mut html = String::new();
        for bag in &self.attributes {
            let message = models
                .iter()
                .find(|model| model.form_name() == bag.model)
                .and_then(|model| model.errors().first(&bag.attribute))
                .filter(|message| !message.is_empty());

            let mut attrs = HtmlOptions::new()
                .with("id", bag.error_id.as_str())
                .with("hx-swap-oob", "true");
            let content = message.map_or_else(
                || {
                    attrs.set("style", HIDDEN_STYLE);
                    String::new()
                },
                escape_html,
            );
            html.push_str(&tag("small", &attrs, Some(&content)));
        }
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::error::ValidationErrors;
    use crate::forms::model::ModelForm;
    use serde_json::json;

    fn user() -> ModelForm {
        ModelForm::new(
            "User",
            &json!({
                "email": "a@b.c",
                "bio": "<b>hi</b>",
                "avatar": "x.png",
                "terms": true,
                "role": "admin",
                "tags": ["rust"],
                "code": ""
            }),
        )
        .unwrap()
    }

    fn user_with_error(attribute: &str, message: &str) -> ModelForm {
        let mut errors = ValidationErrors::new();
        errors.add(attribute, message);
        user().with_errors(errors)
    }

    #[test]
    fn test_begin_merges_type_class_and_csrf() {
        let form = ActiveForm::new("signup", "/signup")
            .class("wide")
            .form_type(FormType::Custom)
            .csrf_token("tok");
        assert_eq!(
            form.begin(),
            concat!(
                r#"<form action="/signup" method="post" id="signup" class="wide custom">"#,
                r#"<input type="hidden" name="_csrf_token" value="tok">"#,
            )
        );

        let search = ActiveForm::new("search", "/search").method("get").csrf_token("tok");
        assert_eq!(search.begin(), r#"<form action="/search" method="get" id="search">"#);
    }

    #[test]
    fn test_text_row_without_errors() {
        let mut form = ActiveForm::new("f", "/");
        let html = form.text_field_row(&user(), "email", RowOptions::default()).unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div class="form-field">"#,
                r#"<label for="User_email">Email</label>"#,
                r#"<input type="text" name="User[email]" id="User_email" value="a@b.c">"#,
                r#"<small id="User_email_em_" style="display: none"></small>"#,
                "</div>",
            )
        );
        assert_eq!(form.attributes().len(), 1);
    }

    #[test]
    fn test_row_with_error_marks_wrapper_label_and_input() {
        let mut form = ActiveForm::new("f", "/");
        let model = user_with_error("email", "Email is <invalid>").required("email");
        let html = form.text_field_row(&model, "email", RowOptions::default()).unwrap();

        assert!(html.starts_with(r#"<div class="form-field error">"#));
        assert!(html.contains(
            r#"<label for="User_email" class="error">Email <span class="required">*</span></label>"#
        ));
        assert!(html.contains(r#"id="User_email" value="a@b.c" class="error">"#));
        assert!(html.contains(r#"<small id="User_email_em_">Email is &lt;invalid&gt;</small>"#));
    }

    #[test]
    fn test_nice_password_and_hint() {
        let mut form = ActiveForm::new("f", "/").form_type(FormType::Nice);
        let model = ModelForm::new("User", &json!({"password": "secret"})).unwrap();
        let html = form
            .password_field_row(&model, "password", RowOptions::default().hint("8+ characters"))
            .unwrap();

        assert!(html.contains(
            r#"<input type="password" name="User[password]" id="User_password" value="secret" class="input-text">"#
        ));
        assert!(html.contains(r#"<p class="hint">8+ characters</p>"#));
    }

    #[test]
    fn test_text_area_escapes_content() {
        let mut form = ActiveForm::new("f", "/").enable_client_validation(false);
        let html = form.text_area_row(&user(), "bio", RowOptions::default()).unwrap();
        assert!(html.contains(
            r#"<textarea name="User[bio]" id="User_bio">&lt;b&gt;hi&lt;/b&gt;</textarea>"#
        ));
        assert!(form.attributes().is_empty());
    }

    #[test]
    fn test_file_row_has_no_value() {
        let mut form = ActiveForm::new("f", "/");
        let html = form.file_field_row(&user(), "avatar", RowOptions::default()).unwrap();
        assert!(html.contains(r#"<input type="file" name="User[avatar]" id="User_avatar">"#));
    }

    #[test]
    fn test_check_box_row_wraps_label() {
        let mut form = ActiveForm::new("f", "/");
        let html = form.check_box_row(&user(), "terms", RowOptions::default()).unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div class="form-field">"#,
                r#"<input type="hidden" name="User[terms]" id="hidden_User_terms" value="0">"#,
                r#"<label for="User_terms"><input type="checkbox" name="User[terms]" id="User_terms" value="1" checked>Terms</label>"#,
                r#"<small id="User_terms_em_" style="display: none"></small>"#,
                "</div>",
            )
        );
    }

    #[test]
    fn test_custom_radio_row_without_uncheck() {
        let mut form = ActiveForm::new("f", "/").form_type(FormType::Custom);
        let options = RowOptions {
            html: HtmlOptions::from([("value", "editor")]),
            uncheck_value: Some(None),
            ..RowOptions::default()
        };
        let html = form.radio_button_row(&user(), "role", options).unwrap();

        assert!(!html.contains(r#"type="hidden""#));
        assert!(html.contains(
            r#"<input type="radio" name="User[role]" id="User_role" value="editor" style="display: none;"><span class="custom radio"></span>Role</label>"#
        ));
    }

    #[test]
    fn test_check_box_row_checks_truthy_values() {
        let mut form = ActiveForm::new("f", "/");
        let model = ModelForm::new("User", &json!({"on": "yes", "off": "0", "blank": ""})).unwrap();

        let on = form.check_box_row(&model, "on", RowOptions::default()).unwrap();
        assert!(on.contains(r#"id="User_on" value="1" checked>"#));

        let off = form.check_box_row(&model, "off", RowOptions::default()).unwrap();
        let blank = form.check_box_row(&model, "blank", RowOptions::default()).unwrap();
        assert!(!off.contains(" checked"));
        assert!(!blank.contains(" checked"));

        let explicit = RowOptions {
            html: HtmlOptions::from([("value", "1")]),
            ..RowOptions::default()
        };
        let html = form.check_box_row(&model, "on", explicit).unwrap();
        assert!(!html.contains(" checked"));
    }

    #[test]
    fn test_label_follows_caller_name() {
        let mut form = ActiveForm::new("f", "/");
        let options = RowOptions {
            html: HtmlOptions::from([("name", "contact[email]")]),
            ..RowOptions::default()
        };
        let html = form.text_field_row(&user(), "email", options).unwrap();

        assert!(html.contains(r#"<label for="contact_email">Email</label>"#));
        assert!(html.contains(r#"<input type="text" name="contact[email]" id="contact_email" value="a@b.c">"#));
    }

    #[test]
    fn test_list_rows() {
        let mut form = ActiveForm::new("f", "/");
        let tags = ListData::from([("rust", "Rust"), ("go", "Go")]);
        let html = form
            .check_box_list_row(&user(), "tags", tags.clone(), RowOptions::default())
            .unwrap();
        assert!(html.contains(r#"<label for="User_tags">Tags</label><input type="hidden" name="User[tags]" id="hidden_User_tags" value="">"#));
        assert!(html.contains(r#"id="User_tags_0" value="rust" checked>Rust"#));
        assert!(html.contains(r#"id="User_tags_1" value="go">Go"#));

        let roles = ListData::from([("user", "User"), ("admin", "Admin")]);
        let html = form
            .drop_down_list_row(&user(), "role", roles, RowOptions::default())
            .unwrap();
        assert!(html.contains(r#"<option value="admin" selected>Admin</option>"#));
    }

    #[test]
    fn test_list_row_requires_list_data() {
        let mut form = ActiveForm::new("f", "/");
        let result = form.input_row(
            RowType::RadioList,
            &user(),
            "role",
            RowData::None,
            RowOptions::default(),
        );
        assert!(matches!(
            result,
            Err(FormError::MissingRowData {
                row: RowType::RadioList,
                expected: "list"
            })
        ));
    }

    #[test]
    fn test_captcha_row() {
        let mut form = ActiveForm::new("f", "/");
        let mut captcha = CaptchaOptions::new("/captcha.png");
        captcha.refresh_url = Some("/captcha?refresh=1".into());
        let html = form
            .captcha_row(&user(), "code", captcha, RowOptions::default())
            .unwrap();

        assert!(html.contains(r#"<img src="/captcha.png" alt="">"#));
        assert!(html.contains(r#"<a href="/captcha?refresh=1" class="captcha-refresh">Get a new code</a>"#));
        assert!(html.contains(r#"<input type="text" name="User[code]" id="User_code" value="">"#));

        let missing = form.input_row(RowType::Captcha, &user(), "code", RowData::None, RowOptions::default());
        assert!(matches!(missing, Err(FormError::MissingRowData { .. })));
    }

    #[test]
    fn test_unknown_attribute_is_error() {
        let mut form = ActiveForm::new("f", "/");
        let result = form.text_field_row(&user(), "nickname", RowOptions::default());
        assert!(matches!(result, Err(FormError::UnknownAttribute { .. })));
    }

    #[test]
    fn test_error_html_empty_without_error() {
        assert_eq!(ActiveForm::error_html(&user(), "email", &HtmlOptions::new()), "");

        let model = user_with_error("email", "is required");
        assert_eq!(
            ActiveForm::error_html(&model, "email", &HtmlOptions::from([("class", "error")])),
            r#"<small class="error">is required</small>"#
        );
    }

    #[test]
    fn test_error_placeholder_appends_hidden_style() {
        let mut form = ActiveForm::new("f", "/");
        let options = ErrorOptions::with_html(HtmlOptions::from([("style", "color: red;")]));
        assert_eq!(
            form.error(&user(), "email", options),
            r#"<small style="color: red;display: none" id="User_email_em_"></small>"#
        );
    }

    #[test]
    fn test_error_static_records_nothing() {
        let mut form = ActiveForm::new("f", "/");
        let html = form.error(&user(), "email", ErrorOptions::static_only());
        assert_eq!(html, "");
        assert!(form.attributes().is_empty());
    }

    #[test]
    fn test_error_records_bag() {
        let mut form = ActiveForm::new("f", "/").enable_ajax_validation(true);
        let model = user().required("email").persisted();
        let options = ErrorOptions {
            client_validation: Some("checkDomain".into()),
            validate_on_type: Some(true),
            ..ErrorOptions::default()
        };
        form.error(&model, "email", options);

        let bag = &form.attributes()[0];
        assert_eq!(bag.id, "User_email");
        assert_eq!(bag.error_id, "User_email_em_");
        assert_eq!(bag.name, "User[email]");
        assert_eq!(bag.status, Some(1));
        assert!(bag.enable_ajax_validation);
        assert_eq!(bag.validate_on_type, Some(true));
        assert_eq!(
            bag.client_validation,
            Some(vec![
                ClientRule::Script {
                    function: "checkDomain".into()
                },
                ClientRule::required("Email cannot be blank."),
            ])
        );
    }

    #[test]
    fn test_error_replaces_bag_for_same_input() {
        let mut form = ActiveForm::new("f", "/");
        form.error(&user(), "email", ErrorOptions::default());
        form.error(&user(), "role", ErrorOptions::default());
        form.error(
            &user(),
            "email",
            ErrorOptions {
                hide_error_message: Some(true),
                ..ErrorOptions::default()
            },
        );

        let ids: Vec<_> = form.attributes().iter().map(|b| b.input_id.as_str()).collect();
        assert_eq!(ids, ["User_email", "User_role"]);
        assert_eq!(form.attributes()[0].hide_error_message, Some(true));
    }

    #[test]
    fn test_custom_input_id_in_row() {
        let mut form = ActiveForm::new("f", "/");
        let options = RowOptions::with_html(HtmlOptions::from([("id", "signup-email")]));
        let html = form.text_field_row(&user(), "email", options).unwrap();

        assert!(html.contains(r#"<label for="signup-email">"#));
        assert!(html.contains(r#"id="signup-email_em_""#));
        assert_eq!(form.attributes()[0].input_id, "signup-email");
        assert_eq!(form.attributes()[0].id, "User_email");
    }

    #[test]
    fn test_error_summary_visibility() {
        let mut form = ActiveForm::new("signup", "/");
        let html = form
            .error_summary(&[&user()], None, None, HtmlOptions::new())
            .unwrap();
        assert!(html.starts_with(
            r#"<div class="alert-box error" id="signup_es_" style="display: none">"#
        ));
        assert!(html.contains("<ul></ul>"));
        assert_eq!(form.summary_id(), Some("signup_es_"));

        let mut plain = ActiveForm::new("signup", "/")
            .enable_ajax_validation(false)
            .enable_client_validation(false);
        assert_eq!(
            plain
                .error_summary(&[&user()], None, None, HtmlOptions::new())
                .unwrap(),
            ""
        );
        let model = user_with_error("email", "is required");
        let html = plain
            .error_summary(&[&model], Some("<h5>Oops</h5>"), None, HtmlOptions::new())
            .unwrap();
        assert!(html.starts_with(r#"<div class="alert-box error"><h5>Oops</h5>"#));
        assert!(html.contains("<li>is required</li>"));
        assert_eq!(plain.summary_id(), None);
    }

    #[test]
    fn test_end_emits_client_options() {
        let mut form = ActiveForm::new("signup", "/signup").validation_url("/signup/validate");
        assert_eq!(form.end().unwrap(), "</form>");

        form.error(&user(), "email", ErrorOptions::default());
        let html = form.end().unwrap();
        assert!(html.starts_with(
            r#"</form><script type="application/json" data-active-form="signup">"#
        ));

        let json = html
            .trim_start_matches("</form>")
            .split_once('>')
            .map(|(_, rest)| rest.trim_end_matches("</script>"))
            .unwrap();
        let options: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(options["validationUrl"], "/signup/validate");
        assert_eq!(options["validationDelay"], 200);
        assert_eq!(options["errorCss"], "error");
        assert_eq!(options["attributes"][0]["inputID"], "User_email");
        assert!(options.get("summaryID").is_none());
    }

    #[test]
    fn test_error_fragments() {
        let mut form = ActiveForm::new("f", "/");
        form.error(&user(), "email", ErrorOptions::default());
        form.error(&user(), "role", ErrorOptions::default());

        let model = user_with_error("email", "is taken");
        assert_eq!(
            form.error_fragments(&[&model]),
            concat!(
                r#"<small id="User_email_em_" hx-swap-oob="true">is taken</small>"#,
                r#"<small id="User_role_em_" hx-swap-oob="true" style="display: none"></small>"#,
            )
        );
    }

    #[test]
    fn test_from_config() {
        let mut config = FormConfig::default();
        config.form.default_type = FormType::Nice;
        config.form.row_css = "row".into();
        config.validation.enable_client_validation = false;

        let mut form = ActiveForm::from_config("f", "/", &config);
        assert_eq!(form.current_type(), FormType::Nice);
        let html = form.text_field_row(&user(), "email", RowOptions::default()).unwrap();
        assert!(html.starts_with(r#"<div class="row">"#));
        assert!(!html.contains("<small"));
    }
}
