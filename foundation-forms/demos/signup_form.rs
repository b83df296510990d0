//! Signup form with server-side validation
//!
//! Renders a Foundation "nice" form, validates posts with `validator` and
//! answers the validation endpoint with out-of-band error fragments for
//! HTMX requests or JSON for everything else.
//!
//! Run with:
//! ```bash
//! cargo run --example signup_form
//! ```

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use axum_htmx::HxRequest;
use foundation_forms::{observability, prelude::*};
use http::StatusCode;
use serde::Serialize;
use tracing::info;
use validator::Validate;

const MODEL: &str = "Signup";

#[derive(Debug, Default, Serialize, Validate)]
struct Signup {
    #[validate(email(message = "Email is not a valid email address."))]
    email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters."))]
    password: String,
    #[validate(length(min = 1, message = "Please pick a plan."))]
    plan: String,
    newsletter: bool,
    interests: Vec<String>,
}

impl Signup {
    /// Read the submitted `Signup[...]` fields
    fn from_fields(fields: &[(String, String)]) -> Self {
        let value = |name: &str| {
            let key = format!("{MODEL}[{name}]");
            fields
                .iter()
                .rev()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        };
        let list_key = format!("{MODEL}[interests][]");
        Self {
            email: value("email"),
            password: value("password"),
            plan: value("plan"),
            newsletter: value("newsletter") == "1",
            interests: fields
                .iter()
                .filter(|(k, _)| *k == list_key)
                .map(|(_, v)| v.clone())
                .collect(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init()?;

    let config = Arc::new(FormConfig::load()?);

    let app = Router::new()
        .route("/", get(index))
        .route("/signup", post(submit))
        .route("/signup/validate", post(validate))
        .with_state(config);

    info!("Starting signup demo on http://127.0.0.1:3000");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn bind(signup: &Signup, validate: bool) -> Result<ModelForm, FormError> {
    let model = if validate {
        ModelForm::validated(MODEL, signup)?
    } else {
        ModelForm::new(MODEL, signup)?
    };
    Ok(model
        .required("email")
        .required("password")
        .rule("email", ClientRule::email("Email is not a valid email address."))
        .rule(
            "password",
            ClientRule::length(Some(8), None, "Password must be at least 8 characters."),
        )
        .label("newsletter", "Send me the monthly newsletter"))
}

/// Render the form and return it with the form state used to render it
fn render_form(config: &FormConfig, model: &ModelForm) -> Result<(ActiveForm, String), FormError> {
    let mut form = ActiveForm::from_config("signup", "/signup", config)
        .form_type(FormType::Nice)
        .validation_url("/signup/validate");
    let plans = ListData::from([("free", "Free"), ("pro", "Pro"), ("team", "Team")]);
    let interests = ListData::from([("rust", "Rust"), ("css", "CSS"), ("htmx", "htmx")]);

    let html = [
        form.begin(),
        form.error_summary(&[model], None, None, HtmlOptions::new())?,
        form.text_field_row(model, "email", RowOptions::default().hint("We never share it."))?,
        form.password_field_row(model, "password", RowOptions::default())?,
        form.drop_down_list_row(
            model,
            "plan",
            plans,
            RowOptions {
                prompt: Some("Choose a plan".into()),
                ..RowOptions::default()
            },
        )?,
        form.check_box_list_row(model, "interests", interests, RowOptions::default())?,
        form.check_box_row(model, "newsletter", RowOptions::default())?,
        r#"<input type="submit" class="button" value="Sign up">"#.to_string(),
        form.end()?,
    ]
    .concat();
    Ok((form, html))
}

fn page(body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html><html><head><title>Sign up</title></head><body>{body}</body></html>"
    ))
}

fn server_error(error: &FormError) -> Response {
    tracing::error!(%error, "failed to render signup form");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

async fn index(State(config): State<Arc<FormConfig>>) -> Response {
    let rendered = bind(&Signup::default(), false).and_then(|m| render_form(&config, &m));
    match rendered {
        Ok((_, html)) => page(&html).into_response(),
        Err(error) => server_error(&error),
    }
}

async fn submit(
    State(config): State<Arc<FormConfig>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let signup = Signup::from_fields(&fields);
    let model = match bind(&signup, true) {
        Ok(model) => model,
        Err(error) => return server_error(&error),
    };
    if !model.errors().has_errors() {
        info!(email = %signup.email, plan = %signup.plan, "signed up");
        return page("<div class=\"alert-box success\">Welcome aboard!</div>").into_response();
    }
    match render_form(&config, &model) {
        Ok((_, html)) => (StatusCode::UNPROCESSABLE_ENTITY, page(&html)).into_response(),
        Err(error) => server_error(&error),
    }
}

async fn validate(
    State(config): State<Arc<FormConfig>>,
    HxRequest(is_htmx): HxRequest,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let signup = Signup::from_fields(&fields);
    let model = match bind(&signup, true) {
        Ok(model) => model,
        Err(error) => return server_error(&error),
    };
    if !is_htmx {
        return validation_response(&[&model]).into_response();
    }
    match render_form(&config, &model) {
        Ok((form, _)) => Html(form.error_fragments(&[&model])).into_response(),
        Err(error) => server_error(&error),
    }
}
