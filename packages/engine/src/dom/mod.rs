//! Browser binding: binds `.zero-g-element` nodes inside a `[data-zero-g]`
//! container to bodies and drives them from `requestAnimationFrame`.
//!
//! A page without the container marker is left alone and `start` returns
//! `None`.

mod animation;
mod discover;
mod listeners;
mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;

use crate::domain::config::EngineConfig;
use crate::frame::{FrameLoop, StopHandle};
use crate::render::RenderSurface;
use crate::simulation::WorldCore;
use crate::systems::body::BodyId;

use animation::AnimationLoop;
use listeners::EventListener;
use surface::DomSurface;

pub(crate) type Shared = Rc<RefCell<Session>>;

/// Everything one mounted page needs between frames
pub(crate) struct Session {
    pub(crate) world: WorldCore,
    surface: DomSurface,
    frame_loop: FrameLoop,
}

impl Session {
    fn run_frame(&mut self) -> bool {
        let Session { world, surface, frame_loop } = self;
        frame_loop.run_frame(world, surface)
    }

    fn grab(&mut self, id: BodyId, x: f32, y: f32) {
        if self.world.pointer_down(id, x, y) {
            self.surface.set_drag_affordance(id, true);
        }
    }

    fn release(&mut self) {
        for id in self.world.pointer_up() {
            self.surface.set_drag_affordance(id, false);
        }
    }
}

/// Live engine on a page. Stopping (or freeing) it halts the frame loop and
/// detaches every listener; element styles are left as they are.
#[wasm_bindgen]
pub struct EngineHandle {
    session: Shared,
    stop: StopHandle,
    animation: Option<AnimationLoop>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl EngineHandle {
    pub fn stop(&mut self) {
        self.stop.stop();
        if let Some(animation) = self.animation.take() {
            animation.cancel();
        }
        self.listeners.clear();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        !self.stop.is_stopped()
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.session.try_borrow().map(|s| s.world.body_count()).unwrap_or(0)
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.session.try_borrow().map(|s| s.world.frame()).unwrap_or(0)
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Mount on the current page with default tuning.
#[wasm_bindgen(js_name = startZeroGravity)]
pub fn start() -> Result<Option<EngineHandle>, JsValue> {
    mount(EngineConfig::default())
}

/// Mount with a (partial) JSON config.
#[wasm_bindgen(js_name = startZeroGravityWithConfig)]
pub fn start_with_config(json: &str) -> Result<Option<EngineHandle>, JsValue> {
    let config = EngineConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    mount(config)
}

fn mount(config: EngineConfig) -> Result<Option<EngineHandle>, JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let Some(document) = window.document() else {
        return Ok(None);
    };
    let Some(container) = discover::find_container(&document)? else {
        debug!("no {} container, engine not started", discover::CONTAINER_SELECTOR);
        return Ok(None);
    };
    discover::prepare_container(&container)?;

    let (width, height) = discover::viewport_size(&window);
    let mut world =
        WorldCore::with_config(config, width, height).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mut surface = DomSurface::new();
    for element in discover::find_elements(&document)? {
        let (w, h) = discover::measure(&element);
        match world.add_body(w, h) {
            Ok(_) => {
                discover::prepare_element(&element)?;
                surface.push(element);
            }
            Err(err) => warn!(%err, "skipping unmeasurable element"),
        }
    }
    world.sync(&mut surface);

    let elements = surface.elements().to_vec();
    let bodies = elements.len();
    let frame_loop = FrameLoop::new();
    let stop = frame_loop.stop_handle();
    let session: Shared = Rc::new(RefCell::new(Session { world, surface, frame_loop }));

    let listeners = listeners::install(&window, &elements, &session)?;
    let animation = AnimationLoop::start(window, Rc::clone(&session))?;

    info!(bodies, "zero-g engine started");
    Ok(Some(EngineHandle {
        session,
        stop,
        animation: Some(animation),
        listeners,
    }))
}
