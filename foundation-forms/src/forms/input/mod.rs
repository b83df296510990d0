//! Form types and their input rendering strategies
//!
//! A [`FormType`] selects one [`InputRenderer`]. Row and list assembly is
//! shared; a renderer only adjusts input attributes and adds the extra
//! markup its CSS framework variant expects.

mod custom;
mod nice;
mod normal;

use serde::{Deserialize, Serialize};

pub use custom::CustomInput;
pub use nice::NiceInput;
pub use normal::NormalInput;

use super::field::{ListData, RowType};
use super::model::AttributeValue;
use crate::html::HtmlOptions;

/// Form type, selecting the input rendering strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    /// Plain inputs
    #[default]
    Normal,
    /// Foundation "nice" forms: styled text inputs
    Nice,
    /// Foundation custom forms: styled checkboxes, radios and drop-downs
    Custom,
}

impl FormType {
    /// CSS class added to the form tag
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Nice => "nice",
            Self::Custom => "custom",
        }
    }

    /// Rendering strategy for this form type
    #[must_use]
    pub fn renderer(&self) -> &'static dyn InputRenderer {
        match self {
            Self::Normal => &NormalInput,
            Self::Nice => &NiceInput,
            Self::Custom => &CustomInput,
        }
    }
}

impl std::fmt::Display for FormType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Normal => "normal",
            Self::Nice => "nice",
            Self::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// Checkbox or radio button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkable {
    /// Checkbox
    Checkbox,
    /// Radio button
    Radio,
}

impl Checkable {
    /// HTML type attribute value
    #[must_use]
    pub const fn input_type(&self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
        }
    }
}

/// Input rendering strategy
///
/// The default methods render plain markup; [`NormalInput`] uses them as is.
pub trait InputRenderer: Send + Sync {
    /// Form type implemented by this renderer
    fn form_type(&self) -> FormType;

    /// Adjust the attributes of an input, textarea or select before rendering
    fn decorate_input(&self, _row_type: RowType, _html: &mut HtmlOptions) {}

    /// Markup placed right after a checkbox or radio input
    fn after_checkable(&self, _kind: Checkable, _checked: bool) -> String {
        String::new()
    }

    /// Markup placed right after a `<select>`
    fn after_drop_down(
        &self,
        _data: &ListData,
        _selection: &AttributeValue,
        _prompt: Option<&str>,
    ) -> String {
        String::new()
    }
}
