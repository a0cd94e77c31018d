use wasm_bindgen::prelude::*;

use crate::render::{RenderSurface, TransformBuffer};
use crate::systems::body::BodyId;

use super::perf_stats::PerfStats;
use super::WorldCore;

/// JS-facing session for hosts that run their own frame loop and DOM.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
    surface: TransformBuffer,
}

#[wasm_bindgen]
impl World {
    /// Create a world with default tuning
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self::from_core(WorldCore::new(width, height))
    }

    /// Create a world from a (partial) JSON config
    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(json: &str, width: f32, height: f32) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(json, width, height).map_err(to_js)?;
        Ok(Self::from_core(core))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    /// Active config serialized as JSON
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Register an element of measured size; returns its body id
    pub fn add_body(&mut self, width: f32, height: f32) -> Result<u32, JsValue> {
        let id = self.core.add_body(width, height).map_err(to_js)?;
        self.core.sync(&mut self.surface);
        Ok(id.0)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.core.pointer_move(x, y);
    }

    /// Returns true if the body started dragging
    pub fn pointer_down(&mut self, id: u32, x: f32, y: f32) -> bool {
        let grabbed = self.core.pointer_down(BodyId(id), x, y);
        if grabbed {
            self.surface.set_drag_affordance(BodyId(id), true);
        }
        grabbed
    }

    /// Returns the ids of released bodies
    pub fn pointer_up(&mut self) -> Vec<u32> {
        let released = self.core.pointer_up();
        for id in &released {
            self.surface.set_drag_affordance(*id, false);
        }
        released.into_iter().map(|id| id.0).collect()
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.core.resize(width, height);
    }

    /// Advance one frame and refresh the transform buffer
    pub fn step(&mut self) {
        self.core.tick(&mut self.surface);
    }

    /// Flat `[x, y, rotation, ...]` in body-id order, as of the last step
    pub fn transforms(&self) -> Vec<f32> {
        self.surface.to_vec()
    }

    /// CSS transform string for one body
    pub fn transform_css(&self, id: u32) -> Option<String> {
        self.surface.get(BodyId(id)).map(|t| t.css())
    }

    pub fn is_dragging(&self, id: u32) -> bool {
        self.surface.is_grabbed(BodyId(id))
    }
}

impl World {
    fn from_core(core: WorldCore) -> Self {
        let mut surface = TransformBuffer::with_capacity(core.body_count());
        core.sync(&mut surface);
        Self { core, surface }
    }

    pub fn core(&self) -> &WorldCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WorldCore {
        &mut self.core
    }
}

fn to_js(err: crate::core::EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
