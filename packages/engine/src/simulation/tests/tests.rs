use super::*;
use crate::domain::config::CollisionResponse;
use crate::render::TransformBuffer;
use crate::systems::body::DragState;
use crate::systems::pointer::POINTER_SENTINEL;

fn still_config() -> EngineConfig {
    EngineConfig::default().with_initial_motion(0.0, 0.0)
}

fn world_with(config: EngineConfig) -> WorldCore {
    WorldCore::with_config(config, 800.0, 600.0).expect("valid config")
}

/// Place a body exactly, at rest.
fn place(world: &mut WorldCore, w: f32, h: f32, x: f32, y: f32) -> BodyId {
    let id = world.add_body(w, h).expect("valid body");
    let body = world.body_mut(id).unwrap();
    body.pos = Vec2::new(x, y);
    body.velocity = Vec2::zero();
    body.angular_vel = 0.0;
    id
}

#[test]
fn new_world_has_sentinel_pointer_and_no_bodies() {
    let world = WorldCore::new(1024.0, 768.0);
    assert_eq!(world.pointer.position(), POINTER_SENTINEL);
    assert_eq!(world.body_count(), 0);
    assert_eq!(world.viewport(), Vec2::new(1024.0, 768.0));
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let config = EngineConfig::default().with_friction(0.0);
    assert!(WorldCore::with_config(config, 800.0, 600.0).is_err());
}

#[test]
fn same_seed_places_bodies_identically() {
    let mut a = world_with(EngineConfig::default().with_seed(77));
    let mut b = world_with(EngineConfig::default().with_seed(77));
    for _ in 0..5 {
        a.add_body(60.0, 30.0).unwrap();
        b.add_body(60.0, 30.0).unwrap();
    }
    for (x, y) in a.bodies().iter().zip(b.bodies()) {
        assert_eq!(x.pos, y.pos);
        assert_eq!(x.velocity, y.velocity);
        assert_eq!(x.rotation, y.rotation);
    }
}

#[test]
fn rng_state_advances_per_body() {
    let mut world = world_with(EngineConfig::default());
    let before = world.rng_state;
    world.add_body(10.0, 10.0).unwrap();
    assert_ne!(world.rng_state, before);
}

#[test]
fn pointer_down_unknown_body_is_ignored() {
    let mut world = world_with(still_config());
    assert!(!world.pointer_down(BodyId(3), 10.0, 10.0));
}

#[test]
fn pointer_down_records_position() {
    let mut world = world_with(still_config());
    let id = place(&mut world, 40.0, 40.0, 100.0, 100.0);
    assert!(world.pointer_down(id, 120.0, 120.0));
    assert_eq!(world.pointer.position(), Vec2::new(120.0, 120.0));
    assert_eq!(world.body(id).unwrap().drag_state(), DragState::Dragging);
    assert!(!world.pointer_down(id, 120.0, 120.0), "already held");
}

#[test]
fn tap_after_tap_grabs_without_momentum() {
    let mut world = world_with(still_config());
    let a = place(&mut world, 40.0, 40.0, 80.0, 80.0);
    let b = place(&mut world, 40.0, 40.0, 680.0, 480.0);

    world.pointer_down(a, 100.0, 100.0);
    world.pointer_up();
    world.pointer_down(b, 700.0, 500.0);
    world.step();
    assert_eq!(world.body(b).unwrap().velocity, Vec2::zero());

    world.pointer_up();
    world.step();
    assert_eq!(world.body(b).unwrap().pos, Vec2::new(680.0, 480.0));
}

#[test]
fn pointer_up_releases_every_held_body() {
    let mut world = world_with(still_config());
    let a = place(&mut world, 40.0, 40.0, 100.0, 100.0);
    place(&mut world, 40.0, 40.0, 300.0, 100.0);
    let c = place(&mut world, 40.0, 40.0, 500.0, 100.0);
    world.pointer_down(a, 120.0, 120.0);
    world.pointer_down(c, 520.0, 120.0);

    let released = world.pointer_up();
    assert_eq!(released, vec![a, c]);
    assert!(world.bodies().iter().all(|b| !b.is_dragging()));
    assert!(world.pointer_up().is_empty());
}

#[test]
fn drag_throw_carries_clamped_pointer_velocity() {
    let mut world = world_with(still_config().with_friction(1.0));
    let id = place(&mut world, 40.0, 40.0, 100.0, 100.0);
    world.pointer_down(id, 120.0, 120.0);
    world.pointer_move(124.0, 120.0);
    world.step();
    assert_eq!(world.body(id).unwrap().velocity, Vec2::new(6.0, 0.0));

    world.pointer_move(164.0, 90.0);
    world.step();
    let body = world.body(id).unwrap();
    assert_eq!(body.pos, Vec2::new(144.0, 70.0));
    assert_eq!(body.velocity, Vec2::new(15.0, -15.0));

    world.pointer_up();
    world.step();
    let body = world.body(id).unwrap();
    assert_eq!(body.pos, Vec2::new(159.0, 55.0));
}

#[test]
fn resize_changes_walls_but_not_positions() {
    let mut world = world_with(still_config());
    let id = place(&mut world, 40.0, 40.0, 700.0, 500.0);
    world.resize(400.0, 300.0);
    assert_eq!(world.body(id).unwrap().pos, Vec2::new(700.0, 500.0));

    world.step();
    assert_eq!(world.body(id).unwrap().pos, Vec2::new(360.0, 260.0));
}

#[test]
fn non_finite_resize_is_ignored() {
    let mut world = world_with(still_config());
    world.resize(f32::INFINITY, 10.0);
    assert_eq!(world.viewport(), Vec2::new(800.0, 600.0));
    world.resize(-5.0, 10.0);
    assert_eq!(world.viewport(), Vec2::new(0.0, 10.0));
}

#[test]
fn dragged_body_does_not_push_neighbours() {
    let mut world = world_with(still_config());
    let held = place(&mut world, 40.0, 40.0, 100.0, 100.0);
    let other = place(&mut world, 40.0, 40.0, 105.0, 100.0);
    world.pointer_down(held, 125.0, 120.0);

    let summary = world.step();
    assert_eq!(summary.collisions.corrections, 0);
    // The pointer sits on the neighbour's center, so no repulsion either.
    let b = world.body(other).unwrap();
    assert_eq!(b.pos, Vec2::new(105.0, 100.0));
}

#[test]
fn frame_summary_counts_work() {
    let mut world = world_with(still_config());
    place(&mut world, 40.0, 40.0, 100.0, 100.0);
    place(&mut world, 40.0, 40.0, 110.0, 100.0);
    place(&mut world, 40.0, 40.0, 500.0, 300.0);
    let summary = world.step();
    assert_eq!(summary.frame, 1);
    assert_eq!(summary.collisions.pairs_checked, 3);
    assert_eq!(summary.collisions.corrections, 1);
    assert_eq!(summary.wall_hits, 0);
}

#[test]
fn perf_stats_only_fill_when_enabled() {
    let mut world = world_with(still_config());
    place(&mut world, 40.0, 40.0, 100.0, 100.0);
    place(&mut world, 40.0, 40.0, 110.0, 100.0);

    world.step();
    assert_eq!(world.get_perf_stats().pairs_checked(), 0);

    world.enable_perf_metrics(true);
    world.step();
    let stats = world.get_perf_stats();
    assert_eq!(stats.bodies(), 2);
    assert_eq!(stats.pairs_checked(), 1);
    assert_eq!(stats.corrections(), 1);
    assert!(stats.step_ms() >= 0.0);

    world.enable_perf_metrics(false);
    assert_eq!(world.get_perf_stats().bodies(), 0);
}

#[test]
fn tick_syncs_after_step() {
    let mut world = world_with(still_config());
    let id = place(&mut world, 40.0, 40.0, 100.0, 100.0);
    world.body_mut(id).unwrap().velocity = Vec2::new(5.0, 0.0);
    let mut surface = TransformBuffer::new();
    world.tick(&mut surface);
    let t = surface.get(id).unwrap();
    assert_eq!(t.x, 105.0);
    assert_eq!(world.transforms(), vec![105.0, 100.0, world.body(id).unwrap().rotation]);
}

#[test]
fn impulse_response_leaves_positions_for_next_frame() {
    let config = still_config().with_collision_response(CollisionResponse::Impulse);
    let mut world = world_with(config);
    let a = place(&mut world, 40.0, 40.0, 100.0, 100.0);
    let b = place(&mut world, 40.0, 40.0, 110.0, 100.0);
    world.step();
    assert_eq!(world.body(a).unwrap().pos.x, 100.0);
    let (va, vb) = (world.body(a).unwrap().velocity, world.body(b).unwrap().velocity);
    assert!(va.x < 0.0 && vb.x > 0.0);
    world.step();
    assert!(world.body(a).unwrap().pos.x < 100.0);
}
