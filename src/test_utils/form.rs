use scraper::{ElementRef, Html, Selector};

use crate::transaction::StatusKind;

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let hx_post = form
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        hx_post, endpoint,
        "want form with attribute {attribute}=\"{endpoint}\", got {hx_post:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    let input = must_get_input(form, name);
    let input_type = input.value().attr("type").unwrap_or_default();
    let input_required = input.value().attr("required");

    assert_eq!(
        input_type, type_,
        "want input with type \"{type_}\", got {input_type:?}"
    );
    assert!(
        input_required.is_some(),
        "want input with name {name} to have the required attribute but got none"
    );
}

#[track_caller]
pub(crate) fn assert_input_value(form: &ElementRef<'_>, name: &str, value: &str) {
    let input = must_get_input(form, name);
    let input_value = input.value().attr("value").unwrap_or_default();

    assert_eq!(
        input_value, value,
        "want input {name} with value \"{value}\", got {input_value:?}"
    );
}

#[track_caller]
pub(crate) fn assert_selected_option(element: &ElementRef<'_>, name: &str, value: &str) {
    let select = element
        .select(&Selector::parse(&format!("select[name={name}]")).unwrap())
        .next()
        .unwrap_or_else(|| panic!("No select found with name \"{name}\""));
    let selected = select
        .select(&Selector::parse("option[selected]").unwrap())
        .map(|option| option.value().attr("value").unwrap_or_default())
        .collect::<Vec<_>>();

    assert_eq!(
        selected,
        vec![value],
        "want {name} to have \"{value}\" selected, got {selected:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let submit_button = form
        .select(&Selector::parse("button").unwrap())
        .next()
        .expect("No button found");

    assert_eq!(
        submit_button.value().attr("type").unwrap_or_default(),
        "submit",
        "want submit button with type=\"submit\""
    );
    let got_text = submit_button.text().collect::<Vec<_>>().join("");
    let got_text = got_text.trim();
    assert_eq!(text, got_text);
}

#[track_caller]
pub(crate) fn assert_status_message(html: &Html, kind: StatusKind, want_message: &str) {
    let status = html
        .select(&Selector::parse("#submission-status").unwrap())
        .next()
        .expect("No status message found");
    let got_message = status.text().collect::<String>();
    let class = status.value().attr("class").unwrap_or_default();
    let want_class = match kind {
        StatusKind::Success => "bg-green-100",
        StatusKind::Error => "bg-red-100",
    };

    assert_eq!(want_message, got_message.trim());
    assert!(
        class.contains(want_class),
        "want {kind:?} message styled with {want_class}, got class {class:?}"
    );
}

#[track_caller]
fn must_get_input<'a>(form: &ElementRef<'a>, name: &str) -> ElementRef<'a> {
    form.select(&Selector::parse(&format!("input[name={name}]")).unwrap())
        .next()
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""))
}
