use tracing::info;

use crate::core::random::seed_state;
use crate::core::{EngineResult, Vec2};
use crate::domain::config::EngineConfig;
use crate::systems::body::{BodyId, BodyRegistry};
use crate::systems::pointer::PointerTracker;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_world_core(config: EngineConfig, width: f32, height: f32) -> WorldCore {
    let viewport = sanitize_viewport(width, height);
    info!(width = viewport.x, height = viewport.y, seed = config.seed, "zero-g world created");

    WorldCore {
        rng_state: seed_state(config.seed),
        config,
        viewport,
        pointer: PointerTracker::new(),
        bodies: BodyRegistry::new(),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

pub(super) fn add_body(world: &mut WorldCore, width: f32, height: f32) -> EngineResult<BodyId> {
    world
        .bodies
        .add_body(width, height, world.viewport, &world.config, &mut world.rng_state)
}

/// Negative or non-finite bounds collapse to zero.
pub(super) fn sanitize_viewport(width: f32, height: f32) -> Vec2 {
    let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
    Vec2::new(clean(width), clean(height))
}
