//! Engine tuning parameters.
//!
//! Defaults are hand-tuned for a calm drift. None of them has a
//! derivation; treat them as knobs, not physics.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult, Vec2};

/// How the collision resolver applies its per-frame correction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionResponse {
    /// Nudge positions directly.
    #[default]
    Positional,
    /// Add the correction to velocities (soft springy separation).
    Impulse,
}

/// Immutable configuration for a [`WorldCore`](crate::simulation::WorldCore).
///
/// # Builder Pattern
/// ```
/// use zerog_engine::domain::config::EngineConfig;
///
/// let config = EngineConfig::new()
///     .with_friction(0.95)
///     .with_restitution(0.6)
///     .with_max_velocity(20.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Constant acceleration added each free frame. Default: zero.
    pub gravity: Vec2,
    /// Per-frame velocity multiplier in (0, 1]. Default: 0.98.
    pub friction: f32,
    /// Velocity fraction kept after a wall hit, in (0, 1]. Default: 0.8.
    pub restitution: f32,
    /// Pointer repulsion radius in pixels. Default: 150.
    pub mouse_repulsion_radius: f32,
    /// Peak repulsion impulse at the pointer. Default: 2.
    pub mouse_repulsion_force: f32,
    /// Per-axis speed limit in pixels per frame. Default: 15.
    pub max_velocity: f32,
    /// Pointer velocity multiplier while dragging. Default: 1.5.
    pub throw_multiplier: f32,
    /// Fraction of the overlap removed per frame. Default: 0.05.
    pub collision_correction: f32,
    /// Scale on the summed half-widths used as the contact distance. Default: 0.8.
    pub collision_overlap_factor: f32,
    pub collision_response: CollisionResponse,
    /// Width of the initial per-axis velocity range. Default: 4.
    pub initial_speed: f32,
    /// Width of the initial angular velocity range (deg/frame). Default: 2.
    pub initial_spin: f32,
    /// Seed for the placement RNG.
    pub seed: u32,
}

impl EngineConfig {
    pub fn new() -> Self {
        EngineConfig {
            gravity: Vec2::ZERO,
            friction: 0.98,
            restitution: 0.8,
            mouse_repulsion_radius: 150.0,
            mouse_repulsion_force: 2.0,
            max_velocity: 15.0,
            throw_multiplier: 1.5,
            collision_correction: 0.05,
            collision_overlap_factor: 0.8,
            collision_response: CollisionResponse::Positional,
            initial_speed: 4.0,
            initial_spin: 2.0,
            seed: 12345,
        }
    }

    /// Parse a (possibly partial) JSON config; missing fields take defaults.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain data with no maps or non-string keys; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_mouse_repulsion(mut self, radius: f32, force: f32) -> Self {
        self.mouse_repulsion_radius = radius;
        self.mouse_repulsion_force = force;
        self
    }

    pub fn with_max_velocity(mut self, max_velocity: f32) -> Self {
        self.max_velocity = max_velocity;
        self
    }

    pub fn with_throw_multiplier(mut self, multiplier: f32) -> Self {
        self.throw_multiplier = multiplier;
        self
    }

    pub fn with_collision(mut self, correction: f32, overlap_factor: f32) -> Self {
        self.collision_correction = correction;
        self.collision_overlap_factor = overlap_factor;
        self
    }

    pub fn with_collision_response(mut self, response: CollisionResponse) -> Self {
        self.collision_response = response;
        self
    }

    pub fn with_initial_motion(mut self, speed: f32, spin: f32) -> Self {
        self.initial_speed = speed;
        self.initial_spin = spin;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> EngineResult<()> {
        let finite = [
            self.gravity.x,
            self.gravity.y,
            self.friction,
            self.restitution,
            self.mouse_repulsion_radius,
            self.mouse_repulsion_force,
            self.max_velocity,
            self.throw_multiplier,
            self.collision_correction,
            self.collision_overlap_factor,
            self.initial_speed,
            self.initial_spin,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(invalid("all parameters must be finite"));
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(invalid("friction must be in (0, 1]"));
        }
        if !(self.restitution > 0.0 && self.restitution <= 1.0) {
            return Err(invalid("restitution must be in (0, 1]"));
        }
        if self.mouse_repulsion_radius <= 0.0 {
            return Err(invalid("mouse_repulsion_radius must be positive"));
        }
        if self.mouse_repulsion_force < 0.0 {
            return Err(invalid("mouse_repulsion_force must not be negative"));
        }
        if self.max_velocity <= 0.0 {
            return Err(invalid("max_velocity must be positive"));
        }
        if self.throw_multiplier < 1.0 {
            return Err(invalid("throw_multiplier must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.collision_correction) {
            return Err(invalid("collision_correction must be in [0, 1]"));
        }
        if self.collision_overlap_factor <= 0.0 {
            return Err(invalid("collision_overlap_factor must be positive"));
        }
        if self.initial_speed < 0.0 || self.initial_spin < 0.0 {
            return Err(invalid("initial motion ranges must not be negative"));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(msg: &str) -> EngineError {
    EngineError::InvalidConfig(msg.to_string())
}
