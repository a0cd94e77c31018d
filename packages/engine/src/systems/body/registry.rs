use tracing::{debug, warn};

use crate::core::random::{centered_f32, range_f32};
use crate::core::{EngineError, EngineResult, Vec2};
use crate::domain::config::EngineConfig;

use super::body::{Body, BodyId};

/// Owns every body of a session. Bodies are never removed, so a `BodyId`
/// stays valid for the registry's lifetime.
#[derive(Default)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Register a body of the given measured size at a random spot inside
    /// `viewport`, with a small random drift and spin.
    pub fn add_body(
        &mut self,
        width: f32,
        height: f32,
        viewport: Vec2,
        config: &EngineConfig,
        rng: &mut u32,
    ) -> EngineResult<BodyId> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            warn!(width, height, "rejecting degenerate body");
            return Err(EngineError::DegenerateBody { width, height });
        }

        let id = BodyId(self.bodies.len() as u32);
        let pos = Vec2::new(
            range_f32(rng, viewport.x - width),
            range_f32(rng, viewport.y - height),
        );

        let mut body = Body::new(id, width, height, pos);
        body.velocity = Vec2::new(
            centered_f32(rng, config.initial_speed),
            centered_f32(rng, config.initial_speed),
        )
        .clamp_components(config.max_velocity);
        body.rotation = range_f32(rng, 360.0);
        body.angular_vel = centered_f32(rng, config.initial_spin);

        debug!(%id, width, height, x = pos.x, y = pos.y, "body registered");
        self.bodies.push(body);
        Ok(id)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    pub fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn dragging_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.is_dragging()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::seed_state;

    #[test]
    fn placement_is_inside_viewport() {
        let mut reg = BodyRegistry::new();
        let config = EngineConfig::default();
        let mut rng = seed_state(42);
        let viewport = Vec2::new(800.0, 600.0);

        for _ in 0..200 {
            let id = reg.add_body(100.0, 50.0, viewport, &config, &mut rng).unwrap();
            let b = reg.get(id).unwrap();
            assert!(b.pos.x >= 0.0 && b.pos.x <= 700.0);
            assert!(b.pos.y >= 0.0 && b.pos.y <= 550.0);
            assert!(b.velocity.x.abs() <= 2.0 && b.velocity.y.abs() <= 2.0);
            assert!((0.0..360.0).contains(&b.rotation));
            assert!(b.angular_vel.abs() <= 1.0);
        }
        assert_eq!(reg.len(), 200);
    }

    #[test]
    fn initial_drift_respects_max_velocity() {
        let mut reg = BodyRegistry::new();
        let config = EngineConfig::default().with_initial_motion(100.0, 2.0);
        let mut rng = seed_state(9);
        for _ in 0..200 {
            let id = reg.add_body(20.0, 20.0, Vec2::new(800.0, 600.0), &config, &mut rng).unwrap();
            let v = reg.get(id).unwrap().velocity;
            assert!(v.x.abs() <= config.max_velocity && v.y.abs() <= config.max_velocity);
        }
    }

    #[test]
    fn ids_follow_registration_order() {
        let mut reg = BodyRegistry::new();
        let mut rng = seed_state(1);
        let config = EngineConfig::default();
        let a = reg.add_body(10.0, 10.0, Vec2::new(100.0, 100.0), &config, &mut rng).unwrap();
        let b = reg.add_body(10.0, 10.0, Vec2::new(100.0, 100.0), &config, &mut rng).unwrap();
        assert_eq!(a, BodyId(0));
        assert_eq!(b, BodyId(1));
        assert_eq!(reg.iter().map(|b| b.id()).collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn zero_size_is_rejected() {
        let mut reg = BodyRegistry::new();
        let mut rng = seed_state(1);
        let config = EngineConfig::default();
        let err = reg
            .add_body(0.0, 20.0, Vec2::new(100.0, 100.0), &config, &mut rng)
            .unwrap_err();
        assert!(matches!(err, EngineError::DegenerateBody { .. }));
        assert!(reg.add_body(20.0, f32::NAN, Vec2::new(100.0, 100.0), &config, &mut rng).is_err());
        assert!(reg.is_empty());
    }

    #[test]
    fn oversized_body_pins_to_origin() {
        let mut reg = BodyRegistry::new();
        let mut rng = seed_state(3);
        let config = EngineConfig::default();
        let id = reg.add_body(500.0, 20.0, Vec2::new(300.0, 300.0), &config, &mut rng).unwrap();
        assert_eq!(reg.get(id).unwrap().pos.x, 0.0);
    }
}
