use std::fmt;

use serde::Serialize;

use crate::core::Vec2;

/// Dense index of a body in its registry; stable for the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BodyId(pub u32);

impl BodyId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether the pointer currently owns the body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum DragState {
    #[default]
    Free,
    Dragging,
}

/// Pure physics record of one floating element.
///
/// Position is the top-left corner in pixels; velocity and angular velocity
/// are per frame. Size is fixed at creation.
#[derive(Clone, Debug, Serialize)]
pub struct Body {
    id: BodyId,
    width: f32,
    height: f32,
    radius: f32,

    pub pos: Vec2,
    pub velocity: Vec2,
    /// Degrees
    pub rotation: f32,
    /// Degrees per frame
    pub angular_vel: f32,

    drag: DragState,
}

impl Body {
    /// Callers validate the size; see `BodyRegistry::add_body`.
    pub(crate) fn new(id: BodyId, width: f32, height: f32, pos: Vec2) -> Self {
        Self {
            id,
            width,
            height,
            radius: width.max(height) / 2.0,
            pos,
            velocity: Vec2::zero(),
            rotation: 0.0,
            angular_vel: 0.0,
            drag: DragState::Free,
        }
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Collision-proxy radius, `max(width, height) / 2`
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size() * 0.5
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    /// FREE -> DRAGGING. Returns false if the body was already held.
    pub fn begin_drag(&mut self) -> bool {
        match self.drag {
            DragState::Free => {
                self.drag = DragState::Dragging;
                true
            }
            DragState::Dragging => false,
        }
    }

    /// DRAGGING -> FREE. Returns false if the body was not held.
    pub fn end_drag(&mut self) -> bool {
        match self.drag {
            DragState::Dragging => {
                self.drag = DragState::Free;
                true
            }
            DragState::Free => false,
        }
    }
}
