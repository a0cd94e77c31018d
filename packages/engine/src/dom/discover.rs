use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

/// Marker for the page region that hosts floating elements
pub(crate) const CONTAINER_SELECTOR: &str = "[data-zero-g]";
/// Class tagging each element the engine should float
pub(crate) const ELEMENT_SELECTOR: &str = ".zero-g-element";

pub(crate) fn find_container(document: &Document) -> Result<Option<HtmlElement>, JsValue> {
    let Some(element) = document.query_selector(CONTAINER_SELECTOR)? else {
        return Ok(None);
    };
    Ok(element.dyn_into::<HtmlElement>().ok())
}

pub(crate) fn find_elements(document: &Document) -> Result<Vec<HtmlElement>, JsValue> {
    let nodes = document.query_selector_all(ELEMENT_SELECTOR)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            elements.push(el);
        }
    }
    Ok(elements)
}

pub(crate) fn prepare_container(container: &HtmlElement) -> Result<(), JsValue> {
    set_styles(
        container,
        &[
            ("position", "relative"),
            ("width", "100vw"),
            ("height", "100vh"),
            ("overflow", "hidden"),
        ],
    )
}

/// Must run after `measure`: absolute positioning can change the box.
pub(crate) fn prepare_element(element: &HtmlElement) -> Result<(), JsValue> {
    set_styles(
        element,
        &[
            ("position", "absolute"),
            ("left", "0"),
            ("top", "0"),
            ("will-change", "transform"),
            ("user-select", "none"),
            ("cursor", "grab"),
        ],
    )
}

pub(crate) fn measure(element: &HtmlElement) -> (f32, f32) {
    let rect = element.get_bounding_client_rect();
    (rect.width() as f32, rect.height() as f32)
}

pub(crate) fn viewport_size(window: &Window) -> (f32, f32) {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    (read(window.inner_width()), read(window.inner_height()))
}

fn set_styles(element: &HtmlElement, props: &[(&str, &str)]) -> Result<(), JsValue> {
    let style = element.style();
    for (name, value) in props {
        style.set_property(name, value)?;
    }
    Ok(())
}
