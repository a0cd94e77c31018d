use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement, MouseEvent, TouchEvent, Window};

use crate::systems::body::BodyId;

use super::discover::viewport_size;
use super::Shared;

/// A DOM listener that detaches itself when dropped.
pub(crate) struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub(crate) fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Wire pointer and resize input into the session.
///
/// Press is element-scoped; move, release and resize are window-wide.
pub(crate) fn install(
    window: &Window,
    elements: &[HtmlElement],
    session: &Shared,
) -> Result<Vec<EventListener>, JsValue> {
    let mut listeners = Vec::with_capacity(elements.len() * 2 + 6);

    for (index, element) in elements.iter().enumerate() {
        let id = BodyId(index as u32);
        for event in ["mousedown", "touchstart"] {
            let session = Rc::clone(session);
            listeners.push(EventListener::new(element, event, move |e: Event| {
                e.prevent_default();
                let Some((x, y)) = event_position(&e) else {
                    return;
                };
                if let Ok(mut s) = session.try_borrow_mut() {
                    s.grab(id, x, y);
                }
            })?);
        }
    }

    for event in ["mousemove", "touchmove"] {
        let session = Rc::clone(session);
        listeners.push(EventListener::new(window, event, move |e: Event| {
            let Some((x, y)) = event_position(&e) else {
                return;
            };
            if let Ok(mut s) = session.try_borrow_mut() {
                s.world.pointer_move(x, y);
            }
        })?);
    }

    for event in ["mouseup", "touchend", "touchcancel"] {
        let session = Rc::clone(session);
        listeners.push(EventListener::new(window, event, move |_e: Event| {
            if let Ok(mut s) = session.try_borrow_mut() {
                s.release();
            }
        })?);
    }

    let session = Rc::clone(session);
    let win = window.clone();
    listeners.push(EventListener::new(window, "resize", move |_e: Event| {
        let (w, h) = viewport_size(&win);
        if let Ok(mut s) = session.try_borrow_mut() {
            s.world.resize(w, h);
        }
    })?);

    Ok(listeners)
}

fn event_position(e: &Event) -> Option<(f32, f32)> {
    if let Some(m) = e.dyn_ref::<MouseEvent>() {
        return Some((m.client_x() as f32, m.client_y() as f32));
    }
    if let Some(t) = e.dyn_ref::<TouchEvent>() {
        let touch = t.touches().get(0).or_else(|| t.changed_touches().get(0))?;
        return Some((touch.client_x() as f32, touch.client_y() as f32));
    }
    None
}
