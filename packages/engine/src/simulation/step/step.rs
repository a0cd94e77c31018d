use crate::systems::physics::{integrate_body, resolve_collisions, CollisionStats};

use super::{timed, WorldCore};

/// Counters for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameSummary {
    pub frame: u64,
    pub wall_hits: u32,
    pub repulsions: u32,
    pub collisions: CollisionStats,
}

pub(super) fn step(world: &mut WorldCore) -> FrameSummary {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.bodies = world.bodies.len() as u32;
        world.perf_stats.dragging = world.bodies.dragging_count() as u32;
    }

    let ((wall_hits, repulsions, collisions), step_ms) = timed(perf_on, || {
        // === INTEGRATION ===
        let ((wall_hits, repulsions), integrate_ms) = timed(perf_on, || {
            let mut wall_hits = 0u32;
            let mut repulsions = 0u32;
            for body in world.bodies.iter_mut() {
                let out = integrate_body(body, &world.pointer, world.viewport, &world.config);
                wall_hits += out.hit_wall as u32;
                repulsions += out.repelled as u32;
            }
            (wall_hits, repulsions)
        });

        // === COLLISIONS ===
        // After integration so separation acts on this frame's positions.
        let (collisions, collision_ms) = timed(perf_on, || {
            resolve_collisions(world.bodies.as_mut_slice(), &world.config)
        });

        if perf_on {
            world.perf_stats.integrate_ms = integrate_ms;
            world.perf_stats.collision_ms = collision_ms;
        }
        (wall_hits, repulsions, collisions)
    });

    if perf_on {
        world.perf_stats.step_ms = step_ms;
        world.perf_stats.wall_hits = wall_hits;
        world.perf_stats.repulsions = repulsions;
        world.perf_stats.pairs_checked = collisions.pairs_checked;
        world.perf_stats.corrections = collisions.corrections;
    }

    world.frame += 1;
    FrameSummary {
        frame: world.frame,
        wall_hits,
        repulsions,
        collisions,
    }
}
