//! Integration tests for active form rendering
//!
//! Renders complete forms through the public API, with configuration
//! loaded from files and environment variables.

use figment::Jail;
use foundation_forms::config::{FormConfig, CONFIG_FILE};
use foundation_forms::forms::{
    ActiveForm, ErrorOptions, FormModel, FormType, ListData, ListOptions, ModelForm, RowOptions,
    ValidationErrors,
};
use foundation_forms::html::HtmlOptions;
use serde_json::json;

fn order() -> ModelForm {
    ModelForm::new(
        "Order",
        &json!({
            "size": "m",
            "toppings": ["ham", "olives"],
            "quantity": 2,
            "gift": false,
            "note": ""
        }),
    )
    .unwrap()
}

fn sizes() -> ListData {
    ListData::from([("s", "Small"), ("m", "Medium"), ("l", "Large")])
}

#[test]
fn test_custom_form_from_config_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            CONFIG_FILE,
            r#"
            [form]
            default_type = "custom"
            hidden_id_prefix = "unchecked_"

            [validation]
            enable_client_validation = false
            "#,
        )?;
        let config = FormConfig::load().map_err(|e| e.to_string())?;

        let mut form = ActiveForm::from_config("order", "/orders", &config);
        let html = form
            .drop_down_list_row(&order(), "size", sizes(), RowOptions::default())
            .map_err(|e| e.to_string())?;

        assert!(html.contains(
            r#"<select name="Order[size]" id="Order_size" style="display: none;">"#
        ));
        assert!(html.contains(r##"<a href="#" class="current">Medium</a>"##));
        assert!(html.contains(r#"<li class="selected">Medium</li>"#));

        let html = form
            .check_box_list(&order(), "toppings", &ListData::from([("ham", "Ham")]), &ListOptions::default())
            .map_err(|e| e.to_string())?;
        assert!(html.starts_with(
            r#"<input type="hidden" name="Order[toppings]" id="unchecked_Order_toppings" value="">"#
        ));
        assert!(html.contains(r#"<span class="custom checkbox checked"></span>Ham</label>"#));

        assert_eq!(form.end().map_err(|e| e.to_string())?, "</form>");
        Ok(())
    });
}

#[test]
fn test_environment_overrides_form_type() {
    Jail::expect_with(|jail| {
        jail.set_env("FOUNDATION_FORMS_FORM__DEFAULT_TYPE", "nice");
        let config = FormConfig::load().map_err(|e| e.to_string())?;

        let form = ActiveForm::from_config("order", "/orders", &config);
        assert_eq!(form.current_type(), FormType::Nice);
        assert_eq!(
            form.begin(),
            r#"<form action="/orders" method="post" id="order" class="nice">"#
        );
        Ok(())
    });
}

#[test]
fn test_radio_list_checks_exactly_one_item() {
    let form = ActiveForm::new("order", "/orders");
    let quantities = ListData::from([("1", "One"), ("2", "Two"), ("3", "Three")]);
    let html = form
        .radio_button_list(&order(), "quantity", &quantities, &ListOptions::default())
        .unwrap();

    assert_eq!(html.matches(" checked").count(), 1);
    assert!(html.contains(
        r#"<label for="Order_quantity_1"><input type="radio" name="Order[quantity]" id="Order_quantity_1" value="2" checked>Two</label>"#
    ));
}

#[test]
fn test_checkbox_list_with_preset_array_name() {
    let form = ActiveForm::new("order", "/orders");
    let options = ListOptions::with_html(HtmlOptions::from([("name", "extras[]")])).without_uncheck();
    let toppings = ListData::from([("ham", "Ham"), ("olives", "Olives"), ("corn", "Corn")]);
    let html = form.check_box_list(&order(), "toppings", &toppings, &options).unwrap();

    assert!(!html.contains("hidden"));
    assert!(!html.contains("extras[][]"));
    assert_eq!(html.matches(r#"name="extras[]""#).count(), 3);
    assert!(html.contains(r#"id="extras_0" value="ham" checked"#));
    assert!(html.contains(r#"id="extras_2" value="corn">"#));
}

#[test]
fn test_error_states_round_trip_through_rows() {
    let mut errors = ValidationErrors::new();
    errors.add("note", "Note is too long.");
    let model = order().with_errors(errors).label("note", "Delivery note");
    assert!(model.has_errors("note"));

    let mut form = ActiveForm::new("order", "/orders").enable_ajax_validation(true);
    let summary = form
        .error_summary(&[&model], None, Some("<p>Call us if stuck.</p>"), HtmlOptions::new())
        .unwrap();
    let row = form
        .text_area_row(&model, "note", RowOptions::default().hint("Optional"))
        .unwrap();
    let gift = form.check_box_row(&model, "gift", RowOptions::default()).unwrap();

    assert!(summary.contains(r#"id="order_es_""#));
    assert!(!summary.contains("display: none"));
    assert!(summary.contains("<li>Note is too long.</li>"));
    assert!(summary.ends_with("<p>Call us if stuck.</p></div>"));

    assert_eq!(
        row,
        concat!(
            r#"<div class="form-field error">"#,
            r#"<label for="Order_note" class="error">Delivery note</label>"#,
            r#"<textarea name="Order[note]" id="Order_note" class="error"></textarea>"#,
            r#"<p class="hint">Optional</p>"#,
            r#"<small id="Order_note_em_">Note is too long.</small>"#,
            "</div>",
        )
    );
    assert!(gift.contains(r#"<small id="Order_gift_em_" style="display: none"></small>"#));
    assert!(!gift.contains(" checked"));

    let hidden_errors = form.error(&model, "gift", ErrorOptions::static_only());
    assert_eq!(hidden_errors, "");
    assert_eq!(form.attributes().len(), 2);
    assert_eq!(form.summary_id(), Some("order_es_"));
}
