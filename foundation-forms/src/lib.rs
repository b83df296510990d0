//! foundation-forms: active forms for the Foundation CSS framework
//!
//! Renders form markup bound to a data model: input rows, labels,
//! validation errors, checkbox and radio lists, drop-downs and error
//! summaries, following Foundation's normal, "nice" and custom form
//! conventions. Client-side validation is wired through a JSON
//! configuration block emitted when the form closes.
//!
//! # Quick Start
//!
//! ```rust
//! use foundation_forms::prelude::*;
//! use serde::Serialize;
//! use validator::Validate;
//!
//! #[derive(Serialize, Validate)]
//! struct Login {
//!     #[validate(email(message = "is not a valid email address"))]
//!     email: String,
//!     remember_me: bool,
//! }
//!
//! # fn main() -> Result<(), FormError> {
//! let login = Login { email: "nope".into(), remember_me: true };
//! let model = ModelForm::validated("Login", &login)?.required("email");
//!
//! let mut form = ActiveForm::new("login", "/login").form_type(FormType::Custom);
//! let html = [
//!     form.begin(),
//!     form.text_field_row(&model, "email", RowOptions::default())?,
//!     form.check_box_row(&model, "remember_me", RowOptions::default())?,
//!     form.end()?,
//! ]
//! .concat();
//!
//! assert!(html.contains("is not a valid email address"));
//! assert!(html.contains(r#"<span class="custom checkbox checked"></span>"#));
//! # Ok(())
//! # }
//! ```
//!
//! # Serving Validation
//!
//! [`forms::ValidationResponse`] implements axum's `IntoResponse`, so an
//! AJAX validation endpoint is an ordinary handler. HTMX requests can be
//! answered with [`forms::ActiveForm::error_fragments`] instead.

// Lint configuration is handled at the workspace level in Cargo.toml
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod forms;
pub mod html;
pub mod observability;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! ```rust
    //! use foundation_forms::prelude::*;
    //! ```

    pub use crate::config::FormConfig;
    pub use crate::error::FormError;
    pub use crate::forms::{
        validation_response, ActiveForm, AttributeValue, CaptchaOptions, ClientRule,
        ErrorOptions, FieldError, FormModel, FormType, ListData, ListOptions, ModelForm,
        RowData, RowOptions, RowType, ValidationErrors, ValidationResponse,
    };
    pub use crate::html::HtmlOptions;

    // Re-export key dependencies
    pub use askama;
    pub use axum;
    pub use validator;
}
