//! Foundation custom forms
//!
//! Native checkboxes, radios and selects stay in the DOM for submission but
//! are hidden; the visible replacement markup follows each of them and is
//! wired up by Foundation's custom forms script.

use super::{Checkable, FormType, InputRenderer};
use crate::forms::field::{ListData, RowType};
use crate::forms::model::AttributeValue;
use crate::html::{escape_html, tag, HtmlOptions};

const HIDDEN_STYLE: &str = "display: none;";

/// Hides native controls and appends Foundation's custom replacements
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomInput;

impl InputRenderer for CustomInput {
    fn form_type(&self) -> FormType {
        FormType::Custom
    }

    fn decorate_input(&self, row_type: RowType, html: &mut HtmlOptions) {
        if matches!(
            row_type,
            RowType::Checkbox
                | RowType::Radio
                | RowType::CheckboxList
                | RowType::RadioList
                | RowType::DropDown
        ) {
            html.append_style(HIDDEN_STYLE);
        }
    }

    fn after_checkable(&self, kind: Checkable, checked: bool) -> String {
        let mut class = format!("custom {}", kind.input_type());
        if checked {
            class.push_str(" checked");
        }
        tag("span", &HtmlOptions::new().with("class", class), Some(""))
    }

    fn after_drop_down(
        &self,
        data: &ListData,
        selection: &AttributeValue,
        prompt: Option<&str>,
    ) -> String {
        let current = data
            .iter()
            .find(|item| selection.selects(&item.value))
            .map(|item| item.label.as_str())
            .or(prompt)
            .or_else(|| data.iter().next().map(|item| item.label.as_str()))
            .unwrap_or_default();

        let mut items = String::new();
        if let Some(prompt) = prompt {
            items.push_str(&tag("li", &HtmlOptions::new(), Some(&escape_html(prompt))));
        }
        for item in data {
            let mut attrs = HtmlOptions::new();
            if selection.selects(&item.value) {
                attrs.set("class", "selected");
            }
            items.push_str(&tag("li", &attrs, Some(&escape_html(&item.label))));
        }

        let content = format!(
            "{}{}{}",
            tag(
                "a",
                &HtmlOptions::from([("href", "#"), ("class", "current")]),
                Some(&escape_html(current)),
            ),
            tag(
                "a",
                &HtmlOptions::from([("href", "#"), ("class", "selector")]),
                Some(""),
            ),
            tag("ul", &HtmlOptions::new(), Some(&items)),
        );
        tag(
            "div",
            &HtmlOptions::new().with("class", "custom dropdown"),
            Some(&content),
        )
    }
}
