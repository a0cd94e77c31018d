//! RenderSync - pushes simulation state out to whatever draws the bodies
//!
//! Surfaces only receive writes. Nothing here reads layout back, so a frame
//! costs one transform write per body and never forces a reflow.

mod buffer;

pub use buffer::TransformBuffer;

use std::fmt;

use crate::systems::body::{Body, BodyId};

/// Final per-frame pose of a body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyTransform {
    pub x: f32,
    pub y: f32,
    /// Degrees
    pub rotation: f32,
}

impl BodyTransform {
    pub fn of(body: &Body) -> Self {
        Self {
            x: body.pos.x,
            y: body.pos.y,
            rotation: body.rotation,
        }
    }

    /// CSS `transform` value
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BodyTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate3d({}px, {}px, 0) rotate({}deg)",
            self.x, self.y, self.rotation
        )
    }
}

/// Sink for body poses and drag affordances.
pub trait RenderSurface {
    fn write_transform(&mut self, id: BodyId, transform: BodyTransform);

    /// Called on drag transitions so the surface can swap cursors and layering.
    fn set_drag_affordance(&mut self, _id: BodyId, _dragging: bool) {}
}

/// Write every body's pose to `surface`, in registry order.
pub fn sync_transforms<'a, S, I>(bodies: I, surface: &mut S) -> u32
where
    S: RenderSurface + ?Sized,
    I: IntoIterator<Item = &'a Body>,
{
    let mut written = 0;
    for body in bodies {
        surface.write_transform(body.id(), BodyTransform::of(body));
        written += 1;
    }
    written
}
