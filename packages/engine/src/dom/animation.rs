use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::Shared;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Self-rescheduling `requestAnimationFrame` driver.
///
/// The callback keeps a reference to its own slot so it can reschedule
/// itself; `cancel` empties the slot, which breaks that cycle.
pub(crate) struct AnimationLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl AnimationLoop {
    pub(crate) fn start(window: Window, session: Shared) -> Result<Self, JsValue> {
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let slot = Rc::clone(&callback);
        let pending_id = Rc::clone(&pending);
        let win = window.clone();
        let frame = FrameCallback::new(move |_timestamp: f64| {
            pending_id.set(None);
            let reschedule = match session.try_borrow_mut() {
                Ok(mut s) => s.run_frame(),
                // An input handler holds the session; catch up next frame.
                Err(_) => true,
            };
            if !reschedule {
                return;
            }
            if let Some(cb) = slot.borrow().as_ref() {
                match win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => pending_id.set(Some(id)),
                    Err(err) => warn!(?err, "requestAnimationFrame failed, loop halted"),
                }
            }
        });

        let id = window.request_animation_frame(frame.as_ref().unchecked_ref())?;
        pending.set(Some(id));
        *callback.borrow_mut() = Some(frame);

        Ok(Self { window, pending, callback })
    }

    pub(crate) fn cancel(self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}
