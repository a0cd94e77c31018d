use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Snapshot of the last step. All zeros while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, Serialize)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) bodies: u32,
    pub(super) dragging: u32,
    pub(super) wall_hits: u32,
    pub(super) repulsions: u32,
    pub(super) pairs_checked: u32,
    pub(super) corrections: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies(&self) -> u32 { self.bodies }
    #[wasm_bindgen(getter)]
    pub fn dragging(&self) -> u32 { self.dragging }
    #[wasm_bindgen(getter)]
    pub fn wall_hits(&self) -> u32 { self.wall_hits }
    #[wasm_bindgen(getter)]
    pub fn repulsions(&self) -> u32 { self.repulsions }
    #[wasm_bindgen(getter)]
    pub fn pairs_checked(&self) -> u32 { self.pairs_checked }
    #[wasm_bindgen(getter)]
    pub fn corrections(&self) -> u32 { self.corrections }
}
