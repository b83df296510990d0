//! Active forms bound to data models
//!
//! This module renders Foundation-style form markup from a [`FormModel`]:
//! - Input rows with label, input, hint and error element
//! - Checkbox lists, radio lists and drop-downs with checked state taken
//!   from the model
//! - Hidden "uncheck" fields so unchecked groups still submit a value
//! - Per-attribute client validation settings emitted as JSON
//! - Error summaries and AJAX validation responses
//!
//! # Quick Start
//!
//! ```rust
//! use foundation_forms::forms::{ActiveForm, ListData, ModelForm, RowOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Shirt {
//!     size: String,
//!     colors: Vec<String>,
//! }
//!
//! # fn main() -> Result<(), foundation_forms::error::FormError> {
//! let shirt = Shirt { size: "m".into(), colors: vec!["red".into()] };
//! let model = ModelForm::new("Shirt", &shirt)?;
//!
//! let mut form = ActiveForm::new("shirt-form", "/shirts");
//! let sizes = ListData::from([("s", "Small"), ("m", "Medium")]);
//! let colors = ListData::from([("red", "Red"), ("blue", "Blue")]);
//!
//! let html = [
//!     form.begin(),
//!     form.radio_button_list_row(&model, "size", sizes, RowOptions::default())?,
//!     form.check_box_list_row(&model, "colors", colors, RowOptions::default())?,
//!     form.end()?,
//! ]
//! .concat();
//!
//! assert!(html.contains(r#"value="m" checked"#));
//! assert!(html.contains(r#"name="Shirt[colors][]""#));
//! # Ok(())
//! # }
//! ```
//!
//! # Validation Errors
//!
//! Errors are read from the model. With validation switched off the error
//! element only appears when there is an error:
//!
//! ```rust
//! use foundation_forms::forms::{ActiveForm, ErrorOptions, ModelForm, ValidationErrors};
//!
//! let mut errors = ValidationErrors::new();
//! errors.add("email", "is required");
//! let model = ModelForm::new("User", &serde_json::json!({"email": ""}))
//!     .unwrap()
//!     .with_errors(errors);
//!
//! let mut form = ActiveForm::new("signup", "/signup").enable_client_validation(false);
//! let html = form.error(&model, "email", ErrorOptions::default());
//! assert_eq!(html, "<small>is required</small>");
//! ```

mod active;
mod error;
mod field;
mod input;
mod list;
mod model;
mod summary;
mod validation;

pub use active::ActiveForm;
pub use error::{FieldError, ValidationErrors};
pub use field::{CaptchaOptions, ListData, ListItem, ListOptions, RowData, RowOptions, RowType};
pub use input::{Checkable, CustomInput, FormType, InputRenderer, NiceInput, NormalInput};
pub use model::{humanize, AttributeValue, FormModel, ModelForm};
pub use summary::DEFAULT_SUMMARY_HEADER;
pub use validation::{
    validation_response, AttributeValidation, ClientOptions, ClientRule, ErrorOptions,
    ValidationResponse,
};
