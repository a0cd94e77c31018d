use crate::render::{sync_transforms, RenderSurface, TransformBuffer};

use super::WorldCore;

pub(super) fn sync<S: RenderSurface + ?Sized>(world: &WorldCore, surface: &mut S) -> u32 {
    sync_transforms(world.bodies.iter(), surface)
}

pub(super) fn flat_transforms(world: &WorldCore) -> Vec<f32> {
    let mut buffer = TransformBuffer::with_capacity(world.bodies.len());
    sync(world, &mut buffer);
    buffer.to_vec()
}
