use crate::core::Vec2;
use crate::domain::config::EngineConfig;
use crate::systems::body::{Body, DragState};
use crate::systems::pointer::PointerTracker;

use super::forces::{apply_friction, apply_gravity, apply_repulsion, clamp_velocity, follow_pointer};
use super::walls::bounce_walls;

/// What happened to one body during its integration step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub hit_wall: bool,
    pub repelled: bool,
}

/// Advance one body by one frame.
pub fn integrate_body(
    body: &mut Body,
    pointer: &PointerTracker,
    viewport: Vec2,
    config: &EngineConfig,
) -> StepOutcome {
    match body.drag_state() {
        DragState::Dragging => {
            follow_pointer(body, pointer.position(), pointer.velocity(), config);
            StepOutcome::default()
        }
        DragState::Free => free_flight(body, pointer.position(), viewport, config),
    }
}

fn free_flight(body: &mut Body, pointer: Vec2, viewport: Vec2, config: &EngineConfig) -> StepOutcome {
    apply_gravity(body, config.gravity);

    body.pos += body.velocity;
    body.rotation = (body.rotation + body.angular_vel).rem_euclid(360.0);

    let hit_wall = bounce_walls(body, viewport, config.restitution);

    apply_friction(body, config.friction);

    let repelled = apply_repulsion(
        body,
        pointer,
        config.mouse_repulsion_radius,
        config.mouse_repulsion_force,
    );

    clamp_velocity(body, config.max_velocity);

    StepOutcome { hit_wall, repelled }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::body::BodyId;

    fn viewport() -> Vec2 {
        Vec2::new(800.0, 600.0)
    }

    #[test]
    fn free_body_drifts_and_decays() {
        let mut b = Body::new(BodyId(0), 40.0, 40.0, Vec2::new(100.0, 100.0));
        b.velocity = Vec2::new(10.0, 0.0);
        let config = EngineConfig::default();
        let out = integrate_body(&mut b, &PointerTracker::new(), viewport(), &config);
        assert_eq!(out, StepOutcome::default());
        assert_eq!(b.pos, Vec2::new(110.0, 100.0));
        assert!((b.velocity.x - 9.8).abs() < 1e-5);
    }

    #[test]
    fn rotation_wraps() {
        let mut b = Body::new(BodyId(0), 40.0, 40.0, Vec2::new(100.0, 100.0));
        b.rotation = 359.5;
        b.angular_vel = 1.0;
        integrate_body(&mut b, &PointerTracker::new(), viewport(), &EngineConfig::default());
        assert!((b.rotation - 0.5).abs() < 1e-4);
    }

    #[test]
    fn dragging_body_ignores_walls_and_keeps_rotation() {
        let mut b = Body::new(BodyId(0), 40.0, 40.0, Vec2::new(100.0, 100.0));
        b.rotation = 33.0;
        b.angular_vel = 1.0;
        b.begin_drag();
        let mut pointer = PointerTracker::new();
        pointer.move_to(5.0, 5.0);
        integrate_body(&mut b, &pointer, viewport(), &EngineConfig::default());
        assert_eq!(b.pos, Vec2::new(-15.0, -15.0));
        assert_eq!(b.rotation, 33.0);
    }

    #[test]
    fn repulsion_cannot_exceed_max_velocity() {
        let mut b = Body::new(BodyId(0), 40.0, 40.0, Vec2::new(100.0, 100.0));
        b.velocity = Vec2::new(15.0, 0.0);
        let config = EngineConfig::default().with_friction(1.0).with_mouse_repulsion(150.0, 50.0);
        let mut pointer = PointerTracker::new();
        pointer.move_to(100.0, 120.0);
        let out = integrate_body(&mut b, &pointer, viewport(), &config);
        assert!(out.repelled);
        assert_eq!(b.velocity.x, 15.0);
    }

    #[test]
    fn gravity_accelerates_free_bodies() {
        let mut b = Body::new(BodyId(0), 40.0, 40.0, Vec2::new(100.0, 100.0));
        let config = EngineConfig::default().with_friction(1.0).with_gravity(Vec2::new(0.0, 0.5));
        integrate_body(&mut b, &PointerTracker::new(), viewport(), &config);
        assert_eq!(b.velocity.y, 0.5);
        assert_eq!(b.pos.y, 100.5);
    }
}
