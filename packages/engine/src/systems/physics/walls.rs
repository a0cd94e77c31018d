use crate::core::Vec2;
use crate::systems::body::Body;

/// Clamp the body inside `[0, viewport - size]` on each axis, reflecting and
/// damping the velocity of any axis that hit a wall.
///
/// A body larger than the viewport on an axis is pinned to 0 on that axis.
/// Returns true if any wall was touched.
#[inline]
pub fn bounce_walls(body: &mut Body, viewport: Vec2, restitution: f32) -> bool {
    let size = body.size();
    let hit_x = bounce_axis(&mut body.pos.x, &mut body.velocity.x, viewport.x - size.x, restitution);
    let hit_y = bounce_axis(&mut body.pos.y, &mut body.velocity.y, viewport.y - size.y, restitution);
    hit_x || hit_y
}

#[inline(always)]
fn bounce_axis(pos: &mut f32, vel: &mut f32, max: f32, restitution: f32) -> bool {
    let max = max.max(0.0);
    if *pos < 0.0 {
        *pos = 0.0;
        *vel *= -restitution;
        true
    } else if *pos > max {
        *pos = max;
        *vel *= -restitution;
        true
    } else {
        false
    }
}
