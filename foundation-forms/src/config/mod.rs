//! Configuration management for foundation-forms
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `FOUNDATION_FORMS_` prefix,
//!    `__` separates sections: `FOUNDATION_FORMS_FORM__ERROR_CSS`)
//! 2. `./foundation-forms.toml` (or an explicit path)
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # foundation-forms.toml
//! [form]
//! default_type = "nice"
//! error_css = "error"
//! error_summary_css = "alert-box error"
//! input_container = "div.form-field"
//!
//! [validation]
//! enable_ajax_validation = true
//! enable_client_validation = true
//! validation_delay_ms = 300
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use foundation_forms::config::FormConfig;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = FormConfig::load()?;
//! let error_class = &config.form.error_css;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::forms::FormType;

/// Default configuration file, relative to the working directory
pub const CONFIG_FILE: &str = "foundation-forms.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "FOUNDATION_FORMS_";

/// Markup and CSS conventions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Form type used when none is chosen explicitly
    pub default_type: FormType,

    /// Class of the container wrapping each row
    pub row_css: String,

    /// Class marking rows, labels and inputs in error state
    pub error_css: String,

    /// Class the client sets on rows that passed validation
    pub success_css: String,

    /// Class the client sets on rows being validated
    pub validating_css: String,

    /// Default class of the error summary
    pub error_summary_css: String,

    /// Class of row hints
    pub hint_css: String,

    /// Selector of the container receiving client state classes
    pub input_container: String,

    /// Prefix for ids of hidden uncheck fields
    pub hidden_id_prefix: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            default_type: FormType::Normal,
            row_css: "form-field".to_string(),
            error_css: "error".to_string(),
            success_css: "success".to_string(),
            validating_css: "validating".to_string(),
            error_summary_css: "alert-box error".to_string(),
            hint_css: "hint".to_string(),
            input_container: "div.form-field".to_string(),
            hidden_id_prefix: "hidden_".to_string(),
        }
    }
}

/// Client and AJAX validation switches
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Validate attributes through the validation endpoint
    pub enable_ajax_validation: bool,

    /// Validate attributes in the browser
    pub enable_client_validation: bool,

    /// Validate the whole form on submit
    pub validate_on_submit: bool,

    /// Validate attributes when they change
    pub validate_on_change: bool,

    /// Validate attributes while typing
    pub validate_on_type: bool,

    /// Delay in milliseconds before validating after input
    pub validation_delay_ms: u64,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            enable_ajax_validation: false,
            enable_client_validation: true,
            validate_on_submit: false,
            validate_on_change: true,
            validate_on_type: false,
            validation_delay_ms: 200,
        }
    }
}

/// Complete foundation-forms configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Markup and CSS settings
    #[serde(default)]
    pub form: FormSettings,

    /// Validation settings
    #[serde(default)]
    pub validation: ValidationSettings,
}

impl FormConfig {
    /// Load configuration from `./foundation-forms.toml` and the environment
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load() -> Result<Self, FormError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from a specific file and the environment
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use foundation_forms::config::FormConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = FormConfig::load_from("./config/forms.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, FormError> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| FormError::Config(e.to_string()))?;
        tracing::debug!(
            path = %path.as_ref().display(),
            form_type = %config.form.default_type,
            "loaded form configuration"
        );
        Ok(config)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, FormError> {
        toml::to_string_pretty(self).map_err(|e| FormError::Config(e.to_string()))
    }
}
