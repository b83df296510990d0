//! Error summary and client script templates

use askama::Template;

use super::model::FormModel;
use crate::error::FormError;
use crate::html::HtmlOptions;

/// Header rendered above the summary list when none is given
pub const DEFAULT_SUMMARY_HEADER: &str = "<p>Please fix the following input errors:</p>";

#[derive(Template)]
#[template(path = "error_summary.html")]
struct ErrorSummaryTemplate<'a> {
    attrs: String,
    header: &'a str,
    footer: &'a str,
    messages: Vec<&'a str>,
}

#[derive(Template)]
#[template(path = "client_script.html")]
struct ClientScriptTemplate<'a> {
    form_id: &'a str,
    options: String,
}

/// Every non-empty error message of the given models, in model order
pub(crate) fn collect_messages<'a>(models: &[&'a dyn FormModel]) -> Vec<&'a str> {
    let mut messages = Vec::new();
    for &model in models {
        for (_, errors) in model.errors().iter() {
            messages.extend(
                errors
                    .iter()
                    .map(|error| error.message.as_str())
                    .filter(|message| !message.is_empty()),
            );
        }
    }
    messages
}

/// Render the summary container
pub(crate) fn render_summary(
    html: &HtmlOptions,
    header: Option<&str>,
    footer: Option<&str>,
    messages: Vec<&str>,
) -> Result<String, FormError> {
    let template = ErrorSummaryTemplate {
        attrs: html.render(),
        header: header.unwrap_or(DEFAULT_SUMMARY_HEADER),
        footer: footer.unwrap_or_default(),
        messages,
    };
    Ok(template.render()?)
}

/// Render the JSON client configuration block
///
/// `</` is escaped so message text cannot close the script element.
pub(crate) fn render_client_script(form_id: &str, options_json: &str) -> Result<String, FormError> {
    let template = ClientScriptTemplate {
        form_id,
        options: options_json.replace("</", "<\\/"),
    };
    Ok(template.render()?)
}
