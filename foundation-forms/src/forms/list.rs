//! Checkbox lists, radio lists and drop-down lists
//!
//! Items are checked (or selected) when the model value equals the item
//! value, or when the model value is a list containing it.

use super::field::{ListData, ListOptions, RowType};
use super::input::{Checkable, InputRenderer};
use super::model::{AttributeValue, FormModel};
use crate::error::FormError;
use crate::html::{escape_html, hidden_field, id_by_name, input_tag, resolve_name, tag, HtmlOptions};

/// Settings shared by list renderers
pub(crate) struct ListContext<'a> {
    pub renderer: &'a dyn InputRenderer,
    pub error_css: &'a str,
    pub hidden_id_prefix: &'a str,
}

/// Name, id, current value and remaining attributes of a model input
///
/// `name` and `id` come from the caller's attributes when present and are
/// removed from `html`.
pub(crate) struct ResolvedInput {
    pub name: String,
    pub id: String,
    pub selection: AttributeValue,
    pub html: HtmlOptions,
}

pub(crate) fn resolve_input(
    ctx: &ListContext<'_>,
    model: &dyn FormModel,
    attribute: &str,
    html: &HtmlOptions,
) -> Result<ResolvedInput, FormError> {
    let (resolved_name, bare) = resolve_name(model.form_name(), attribute);
    let mut html = html.clone();
    let name = html.remove("name").unwrap_or(resolved_name);
    let id = html.remove("id").unwrap_or_else(|| id_by_name(&name));
    let selection = model
        .attribute_value(&bare)
        .ok_or_else(|| FormError::unknown_attribute(model.form_name(), &bare))?;
    if model.has_errors(&bare) {
        html.append_class(ctx.error_css);
    }
    Ok(ResolvedInput {
        name,
        id,
        selection,
        html,
    })
}

/// Render a checkbox or radio list
pub(crate) fn inputs_list(
    ctx: &ListContext<'_>,
    kind: Checkable,
    model: &dyn FormModel,
    attribute: &str,
    data: &ListData,
    options: &ListOptions,
) -> Result<String, FormError> {
    let ResolvedInput {
        mut name,
        id,
        selection,
        mut html,
    } = resolve_input(ctx, model, attribute, &options.html)?;

    let mut output = options
        .uncheck_value
        .as_deref()
        .map(|uncheck| {
            let hidden_id = format!("{}{id}", ctx.hidden_id_prefix);
            hidden_field(&name, uncheck, Some(&hidden_id))
        })
        .unwrap_or_default();

    if kind == Checkable::Checkbox && !name.ends_with("[]") {
        name.push_str("[]");
    }

    let row_type = match kind {
        Checkable::Checkbox => RowType::CheckboxList,
        Checkable::Radio => RowType::RadioList,
    };
    ctx.renderer.decorate_input(row_type, &mut html);

    let base_id = id_by_name(&name);
    for (index, item) in data.iter().enumerate() {
        let checked = selection.selects(&item.value);
        let item_id = format!("{base_id}_{index}");

        let mut attrs = html.clone();
        attrs.set("id", item_id.as_str());
        if checked {
            attrs.set_flag("checked");
        }
        let input = input_tag(kind.input_type(), &name, Some(&item.value), &attrs);

        let mut label_attrs = options.label_options.clone();
        label_attrs.set("for", item_id);
        let content = format!(
            "{input}{}{}",
            ctx.renderer.after_checkable(kind, checked),
            escape_html(&item.label)
        );
        output.push_str(&tag("label", &label_attrs, Some(&content)));
    }

    tracing::trace!(
        attribute,
        items = data.len(),
        kind = kind.input_type(),
        "rendered input list"
    );
    Ok(output)
}

/// Render a drop-down list
pub(crate) fn drop_down_list(
    ctx: &ListContext<'_>,
    model: &dyn FormModel,
    attribute: &str,
    data: &ListData,
    options: &ListOptions,
) -> Result<String, FormError> {
    let ResolvedInput {
        mut name,
        id,
        selection,
        mut html,
    } = resolve_input(ctx, model, attribute, &options.html)?;

    if html.contains("multiple") || matches!(selection, AttributeValue::Multiple(_)) {
        html.set_flag("multiple");
        if !name.ends_with("[]") {
            name.push_str("[]");
        }
    }
    html.set("name", name);
    html.set("id", id);
    ctx.renderer.decorate_input(RowType::DropDown, &mut html);

    let mut body = String::new();
    if let Some(ref prompt) = options.prompt {
        body.push_str(&tag(
            "option",
            &HtmlOptions::new().with("value", ""),
            Some(&escape_html(prompt)),
        ));
    }
    for item in data {
        let mut attrs = HtmlOptions::new().with("value", item.value.as_str());
        if selection.selects(&item.value) {
            attrs.set_flag("selected");
        }
        body.push_str(&tag("option", &attrs, Some(&escape_html(&item.label))));
    }

    let mut output = tag("select", &html.input_order(), Some(&body));
    output.push_str(&ctx.renderer.after_drop_down(
        data,
        &selection,
        options.prompt.as_deref(),
    ));
    Ok(output)
}
