use crate::core::Vec2;
use crate::domain::config::EngineConfig;
use crate::systems::body::Body;

/// Apply constant acceleration (zero in a zero-gravity scene)
#[inline(always)]
pub fn apply_gravity(body: &mut Body, gravity: Vec2) {
    body.velocity += gravity;
}

/// Exponential decay toward rest
#[inline(always)]
pub fn apply_friction(body: &mut Body, friction: f32) {
    body.velocity *= friction;
}

/// Push the body away from the pointer.
///
/// Magnitude falls off linearly from `force` at the pointer to zero at
/// `radius`. Returns true if an impulse was added.
#[inline]
pub fn apply_repulsion(body: &mut Body, pointer: Vec2, radius: f32, force: f32) -> bool {
    let delta = body.center() - pointer;
    let dist = delta.length();

    // Pointer exactly on the center has no direction.
    if !(dist > 0.0 && dist.is_finite()) || dist >= radius {
        return false;
    }

    let strength = (1.0 - dist / radius) * force;
    body.velocity += delta * (strength / dist);
    true
}

#[inline(always)]
pub fn clamp_velocity(body: &mut Body, max_velocity: f32) {
    body.velocity = body.velocity.clamp_components(max_velocity);
}

/// Drag-follow: center the body on the pointer and load throw momentum.
/// Rotation is left alone.
#[inline]
pub fn follow_pointer(body: &mut Body, pointer: Vec2, pointer_velocity: Vec2, config: &EngineConfig) {
    body.pos = pointer - body.size() * 0.5;
    body.velocity = (pointer_velocity * config.throw_multiplier).clamp_components(config.max_velocity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::body::BodyId;

    fn body_at(x: f32, y: f32) -> Body {
        Body::new(BodyId(0), 40.0, 40.0, Vec2::new(x, y))
    }

    #[test]
    fn repulsion_points_away_from_pointer() {
        let mut b = body_at(100.0, 100.0); // center (120, 120)
        assert!(apply_repulsion(&mut b, Vec2::new(70.0, 120.0), 150.0, 2.0));
        // dist 50 => (1 - 50/150) * 2 = 4/3, straight along +x
        assert!((b.velocity.x - 4.0 / 3.0).abs() < 1e-5);
        assert_eq!(b.velocity.y, 0.0);
    }

    #[test]
    fn repulsion_skips_zero_distance() {
        let mut b = body_at(100.0, 100.0);
        assert!(!apply_repulsion(&mut b, Vec2::new(120.0, 120.0), 150.0, 2.0));
        assert_eq!(b.velocity, Vec2::zero());
    }

    #[test]
    fn repulsion_ends_at_radius() {
        let mut b = body_at(100.0, 100.0);
        assert!(!apply_repulsion(&mut b, Vec2::new(270.0, 120.0), 150.0, 2.0));
        assert_eq!(b.velocity, Vec2::zero());
    }

    #[test]
    fn follow_clamps_throw() {
        let mut b = body_at(0.0, 0.0);
        let config = EngineConfig::default();
        follow_pointer(&mut b, Vec2::new(300.0, 200.0), Vec2::new(40.0, -4.0), &config);
        assert_eq!(b.pos, Vec2::new(280.0, 180.0));
        assert_eq!(b.velocity, Vec2::new(15.0, -6.0));
    }

    #[test]
    fn friction_decays() {
        let mut b = body_at(0.0, 0.0);
        b.velocity = Vec2::new(10.0, -5.0);
        apply_friction(&mut b, 0.5);
        assert_eq!(b.velocity, Vec2::new(5.0, -2.5));
    }
}
