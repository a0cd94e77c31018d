//! World - one zero-gravity session
//!
//! `WorldCore` owns everything a session needs: config, viewport, pointer,
//! bodies and RNG. There is no global state, so several worlds can coexist
//! and dropping one tears it down completely.
//!
//! Split by concern:
//! - init/      - construction and settings
//! - commands/  - pointer, drag and resize input
//! - step/      - integrate + collide
//! - render/    - pose extraction to render surfaces

use crate::core::{EngineResult, Vec2};
use crate::domain::config::EngineConfig;
use crate::render::RenderSurface;
use crate::systems::body::{Body, BodyId, BodyRegistry};
use crate::systems::pointer::PointerTracker;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use step::FrameSummary;

use perf_timer::timed;

/// The simulation session
pub struct WorldCore {
    config: EngineConfig,
    viewport: Vec2,
    pointer: PointerTracker,
    bodies: BodyRegistry,

    // State
    frame: u64,
    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a world with default tuning
    pub fn new(width: f32, height: f32) -> Self {
        init::create_world_core(EngineConfig::default(), width, height)
    }

    /// Create a world with custom tuning; the config is validated once and
    /// frozen for the session.
    pub fn with_config(config: EngineConfig, width: f32, height: f32) -> EngineResult<Self> {
        config.validate()?;
        Ok(init::create_world_core(config, width, height))
    }

    pub fn from_config_json(json: &str, width: f32, height: f32) -> EngineResult<Self> {
        let config = EngineConfig::from_json(json)?;
        Ok(init::create_world_core(config, width, height))
    }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn viewport(&self) -> Vec2 { self.viewport }

    pub fn width(&self) -> f32 { self.viewport.x }

    pub fn height(&self) -> f32 { self.viewport.y }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn pointer(&self) -> &PointerTracker { &self.pointer }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id)
    }

    /// Mutable access for hosts that need to nudge a body directly.
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id)
    }

    /// All bodies in registry order
    pub fn bodies(&self) -> &[Body] {
        self.bodies.as_slice()
    }

    // === SETTINGS ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === BODY API ===

    /// Register a measured element. Zero or non-finite sizes are rejected.
    pub fn add_body(&mut self, width: f32, height: f32) -> EngineResult<BodyId> {
        init::add_body(self, width, height)
    }

    // === INPUT ===

    /// Record a pointer sample
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        commands::pointer_move(self, x, y)
    }

    /// Pointer pressed on a body's element at (x, y).
    /// Returns true if the body started dragging.
    pub fn pointer_down(&mut self, id: BodyId, x: f32, y: f32) -> bool {
        commands::pointer_down(self, id, x, y)
    }

    /// Global pointer release; returns the bodies that were let go.
    pub fn pointer_up(&mut self) -> Vec<BodyId> {
        commands::pointer_up(self)
    }

    /// New viewport bounds for subsequent wall checks. Bodies are not moved.
    pub fn resize(&mut self, width: f32, height: f32) {
        commands::resize(self, width, height)
    }

    // === FRAME ===

    /// Integrate every body, then run one collision pass.
    pub fn step(&mut self) -> FrameSummary {
        step::step(self)
    }

    /// Write all poses to `surface`. Returns the number of bodies written.
    pub fn sync<S: RenderSurface + ?Sized>(&self, surface: &mut S) -> u32 {
        render_extract::sync(self, surface)
    }

    /// One full frame: step, then sync.
    pub fn tick<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) -> FrameSummary {
        let summary = self.step();
        self.sync(surface);
        summary
    }

    /// Poses as flat `[x, y, rotation, ...]` in registry order
    pub fn transforms(&self) -> Vec<f32> {
        render_extract::flat_transforms(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
