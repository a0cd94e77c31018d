use tracing::warn;
use web_sys::HtmlElement;

use crate::render::{BodyTransform, RenderSurface};
use crate::systems::body::BodyId;

/// Writes poses straight into element styles. Index `i` holds the element
/// bound to `BodyId(i)`.
pub(crate) struct DomSurface {
    elements: Vec<HtmlElement>,
}

impl DomSurface {
    pub(crate) fn new() -> Self {
        Self { elements: Vec::new() }
    }

    pub(crate) fn push(&mut self, element: HtmlElement) {
        self.elements.push(element);
    }

    pub(crate) fn elements(&self) -> &[HtmlElement] {
        &self.elements
    }
}

impl RenderSurface for DomSurface {
    fn write_transform(&mut self, id: BodyId, transform: BodyTransform) {
        if let Some(el) = self.elements.get(id.index()) {
            let _ = el.style().set_property("transform", &transform.css());
        }
    }

    fn set_drag_affordance(&mut self, id: BodyId, dragging: bool) {
        let Some(el) = self.elements.get(id.index()) else {
            return;
        };
        let style = el.style();
        let result = if dragging {
            style
                .set_property("cursor", "grabbing")
                .and_then(|_| style.set_property("z-index", "1000"))
        } else {
            style
                .set_property("cursor", "grab")
                .and_then(|_| style.remove_property("z-index").map(|_| ()))
        };
        if let Err(err) = result {
            warn!(%id, ?err, "failed to update drag affordance");
        }
    }
}
