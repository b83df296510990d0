//! Foundation "nice" forms

use super::{FormType, InputRenderer};
use crate::forms::field::RowType;
use crate::html::HtmlOptions;

/// Class Foundation styles nice text inputs with
const TEXT_INPUT_CLASS: &str = "input-text";

/// Adds the `input-text` class to text-like inputs
#[derive(Debug, Clone, Copy, Default)]
pub struct NiceInput;

impl InputRenderer for NiceInput {
    fn form_type(&self) -> FormType {
        FormType::Nice
    }

    fn decorate_input(&self, row_type: RowType, html: &mut HtmlOptions) {
        if row_type.is_text_like() {
            html.append_class(TEXT_INPUT_CLASS);
        }
    }
}
