use crate::utils::*;
use enhancer_core as enhancer;
use wasm_bindgen::prelude::*;
use web_sys::Element;

// highlight.js, loaded by the page before the enhancer.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = hljs, js_name = highlightElement, catch)]
    fn hljs_highlight_element(element: &Element) -> Result<(), JsValue>;
}

pub(crate) fn highlight_code_blocks(config: &enhancer::PageConfig) -> enhancer::Result<usize> {
    let blocks = query_all(&config.code_selector)?;
    enhancer::highlight_all(&blocks, &|block: &Element| -> enhancer::Result<()> {
        hljs_highlight_element(block).map_err(js_error)
    })
}
