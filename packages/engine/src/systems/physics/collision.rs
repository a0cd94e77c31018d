//! Soft pairwise separation.
//!
//! Every body is treated as a circle whose contact distance is the mean of
//! the two widths scaled by `collision_overlap_factor`. Each overlapping pair
//! gets a fraction of the needed correction once per frame, so overlaps melt
//! away over several frames instead of snapping.

use crate::core::Vec2;
use crate::domain::config::{CollisionResponse, EngineConfig};
use crate::systems::body::Body;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionStats {
    pub pairs_checked: u32,
    pub corrections: u32,
}

/// Correction to add to `a` (and subtract from `b`), if the pair overlaps.
#[inline]
pub fn pair_correction(a: &Body, b: &Body, config: &EngineConfig) -> Option<Vec2> {
    let delta = a.center() - b.center();
    let dist = delta.length();
    let min_dist = (a.width() + b.width()) / 2.0 * config.collision_overlap_factor;

    // Coincident centers give no separation direction.
    if !(dist > 0.0 && dist < min_dist) {
        return None;
    }

    let push = (min_dist - dist) * config.collision_correction;
    Some(delta * (push / dist))
}

/// Resolve a single pair. Pairs involving a dragged body are skipped.
pub fn resolve_pair(a: &mut Body, b: &mut Body, config: &EngineConfig) -> bool {
    if a.is_dragging() || b.is_dragging() {
        return false;
    }
    let Some(correction) = pair_correction(a, b, config) else {
        return false;
    };

    match config.collision_response {
        CollisionResponse::Positional => {
            a.pos += correction;
            b.pos -= correction;
        }
        CollisionResponse::Impulse => {
            a.velocity += correction;
            b.velocity -= correction;
        }
    }
    true
}

/// One O(n²) pass over all unordered pairs in registry order.
pub fn resolve_collisions(bodies: &mut [Body], config: &EngineConfig) -> CollisionStats {
    let mut stats = CollisionStats::default();

    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            stats.pairs_checked += 1;
            if resolve_pair(a, b, config) {
                stats.corrections += 1;
            }
        }
    }

    if config.collision_response == CollisionResponse::Impulse {
        for body in bodies.iter_mut() {
            body.velocity = body.velocity.clamp_components(config.max_velocity);
        }
    }

    stats
}
