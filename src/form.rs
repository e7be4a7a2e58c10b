use crate::constants::*;
use crate::dom;
use motion_core::{FormConfig, FormStatus, InputEvent, MotionEngine, SubmitError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Endpoint and labels from markup override the defaults.
pub fn config_from_markup(document: &web::Document) -> FormConfig {
    let mut config = FormConfig::default();
    let Some(form) = dom::query(document, SEL_FORM) else {
        return config;
    };
    config.endpoint = form
        .get_attribute(FORM_ENDPOINT_ATTR)
        .or_else(|| form.get_attribute("action"))
        .filter(|s| !s.trim().is_empty());
    if let Some(label) = dom::query(document, SEL_SUBMIT_LABEL).and_then(|el| el.text_content()) {
        config.idle_label = label.trim().to_string();
    }
    for (attr, slot) in [
        ("data-sending-label", &mut config.sending_label),
        ("data-success-label", &mut config.success_label),
        ("data-error-label", &mut config.failure_label),
    ] {
        if let Some(v) = form.get_attribute(attr) {
            *slot = v;
        }
    }
    config
}

/// Send the form and feed the outcome back into the engine's queue.
pub fn send(engine: Rc<RefCell<MotionEngine>>, document: web::Document) {
    let endpoint = engine.borrow().form().config().endpoint.clone();
    spawn_local(async move {
        let form = dom::query(&document, SEL_FORM).and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok());
        let result = match (form.as_ref(), endpoint) {
            (Some(form), Some(endpoint)) => post(form, &endpoint).await,
            (None, _) => Err(SubmitError::Transport("form not found".into())),
            (_, None) => Err(SubmitError::Transport("no endpoint configured".into())),
        };
        if let (Ok(status), Some(form)) = (&result, &form) {
            if (200..300).contains(status) {
                form.reset();
            }
        }
        engine.borrow_mut().push(InputEvent::FormResolved(result));
    });
}

async fn post(form: &web::HtmlFormElement, endpoint: &str) -> Result<u16, SubmitError> {
    let transport = |e: wasm_bindgen::JsValue| SubmitError::Transport(format!("{:?}", e));
    let window = web::window().ok_or_else(|| SubmitError::Transport("no window".into()))?;
    let data = web::FormData::new_with_form(form).map_err(transport)?;
    let body = web::UrlSearchParams::new_with_str_sequence_sequence(&data).map_err(transport)?;

    let headers = web::Headers::new().map_err(transport)?;
    headers
        .set("Content-Type", "application/x-www-form-urlencoded;charset=UTF-8")
        .map_err(transport)?;
    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&body);
    let request = web::Request::new_with_str_and_init(endpoint, &init).map_err(transport)?;

    log::info!("[form] POST {}", endpoint);
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let response: web::Response = response.dyn_into().map_err(transport)?;
    Ok(response.status())
}

/// Show the button label and success/error tint for the current status.
pub fn paint_label(document: &web::Document, label: &str, status: FormStatus) {
    let Some(span) = dom::query(document, SEL_SUBMIT_LABEL) else {
        return;
    };
    span.set_text_content(Some(label));
    if let Some(button) = span.parent_element() {
        crate::overlay::set_class(&button, CLASS_SUBMIT_OK, matches!(status, FormStatus::Succeeded { .. }));
        crate::overlay::set_class(&button, CLASS_SUBMIT_FAILED, matches!(status, FormStatus::Failed { .. }));
    }
}
