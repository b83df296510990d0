//! Plain inputs

use super::{FormType, InputRenderer};

/// Renders inputs without framework decoration
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalInput;

impl InputRenderer for NormalInput {
    fn form_type(&self) -> FormType {
        FormType::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::super::Checkable;
    use super::*;
    use crate::forms::field::RowType;
    use crate::html::HtmlOptions;

    #[test]
    fn test_leaves_inputs_alone() {
        let mut html = HtmlOptions::new().with("class", "wide");
        NormalInput.decorate_input(RowType::Text, &mut html);
        assert_eq!(html.render(), r#" class="wide""#);
        assert!(NormalInput.after_checkable(Checkable::Checkbox, true).is_empty());
    }
}
