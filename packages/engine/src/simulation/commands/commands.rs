use tracing::{debug, warn};

use crate::systems::body::BodyId;

use super::init::sanitize_viewport;
use super::WorldCore;

pub(super) fn pointer_move(world: &mut WorldCore, x: f32, y: f32) {
    world.pointer.move_to(x, y);
}

pub(super) fn pointer_down(world: &mut WorldCore, id: BodyId, x: f32, y: f32) -> bool {
    // Touch hosts never send a move before the press.
    world.pointer.press_at(x, y);

    let Some(body) = world.bodies.get_mut(id) else {
        debug!(%id, "pointer down on unknown body");
        return false;
    };
    let grabbed = body.begin_drag();
    if grabbed {
        debug!(%id, x, y, "drag start");
    }
    grabbed
}

pub(super) fn pointer_up(world: &mut WorldCore) -> Vec<BodyId> {
    let released: Vec<BodyId> = world
        .bodies
        .iter_mut()
        .filter_map(|b| b.end_drag().then_some(b.id()))
        .collect();
    if !released.is_empty() {
        let v = world.pointer.velocity();
        debug!(count = released.len(), vx = v.x, vy = v.y, "drag release");
    }
    released
}

pub(super) fn resize(world: &mut WorldCore, width: f32, height: f32) {
    if !(width.is_finite() && height.is_finite()) {
        warn!(width, height, "ignoring non-finite resize");
        return;
    }
    world.viewport = sanitize_viewport(width, height);
    debug!(width = world.viewport.x, height = world.viewport.y, "viewport resized");
}
