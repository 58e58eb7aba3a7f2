use enhancer_core as enhancer;
use enhancer::EnhancerError;
use gloo::utils::document;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Best readable rendering of a thrown or rejected JS value.
pub(crate) fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(err.name()), String::from(err.message()));
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub(crate) fn js_error(value: JsValue) -> EnhancerError {
    EnhancerError::Browser(describe_js(&value))
}

pub(crate) fn element_by_id(id: &str) -> enhancer::Result<Element> {
    document()
        .get_element_by_id(id)
        .ok_or_else(|| EnhancerError::MissingElement(id.to_string()))
}

/// Elements matching `selector`, in document order.
pub(crate) fn query_all(selector: &str) -> enhancer::Result<Vec<Element>> {
    let nodes = document().query_selector_all(selector).map_err(js_error)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
