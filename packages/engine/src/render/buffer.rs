use crate::systems::body::BodyId;

use super::{BodyTransform, RenderSurface};

/// Flat `[x, y, rotation]` triples indexed by body id, for hosts that read
/// poses in bulk (JS typed arrays, tests).
#[derive(Clone, Debug, Default)]
pub struct TransformBuffer {
    data: Vec<f32>,
    affordance: Vec<bool>,
}

impl TransformBuffer {
    pub const STRIDE: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bodies: usize) -> Self {
        Self {
            data: Vec::with_capacity(bodies * Self::STRIDE),
            affordance: Vec::with_capacity(bodies),
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.data.clone()
    }

    pub fn len(&self) -> usize {
        self.data.len() / Self::STRIDE
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, id: BodyId) -> Option<BodyTransform> {
        let base = id.index() * Self::STRIDE;
        let chunk = self.data.get(base..base + Self::STRIDE)?;
        Some(BodyTransform { x: chunk[0], y: chunk[1], rotation: chunk[2] })
    }

    /// Last drag affordance reported for `id` (false if never reported).
    pub fn is_grabbed(&self, id: BodyId) -> bool {
        self.affordance.get(id.index()).copied().unwrap_or(false)
    }
}

impl RenderSurface for TransformBuffer {
    fn write_transform(&mut self, id: BodyId, transform: BodyTransform) {
        let base = id.index() * Self::STRIDE;
        if self.data.len() < base + Self::STRIDE {
            self.data.resize(base + Self::STRIDE, 0.0);
        }
        self.data[base] = transform.x;
        self.data[base + 1] = transform.y;
        self.data[base + 2] = transform.rotation;
    }

    fn set_drag_affordance(&mut self, id: BodyId, dragging: bool) {
        if self.affordance.len() <= id.index() {
            self.affordance.resize(id.index() + 1, false);
        }
        self.affordance[id.index()] = dragging;
    }
}
