//! Physics - per-frame integration and soft collision separation
//!
//! Pipeline per frame: `integrate_body` for every body, then one
//! `resolve_collisions` pass over all pairs.

mod collision;
mod forces;
mod update;
mod walls;

pub use collision::{pair_correction, resolve_collisions, resolve_pair, CollisionStats};
pub use forces::{apply_friction, apply_gravity, apply_repulsion, clamp_velocity, follow_pointer};
pub use update::{integrate_body, StepOutcome};
pub use walls::bounce_walls;
