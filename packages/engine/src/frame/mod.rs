//! FrameLoop - one full pass per display refresh, until stopped
//!
//! The scheduler itself (`requestAnimationFrame` in the browser) lives with
//! the host binding. This module owns the part every host shares: running a
//! frame and deciding whether to reschedule.

use std::cell::Cell;
use std::rc::Rc;

use tracing::info;

use crate::render::RenderSurface;
use crate::simulation::WorldCore;

/// Cloneable cancellation flag for a running loop.
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    stopped: Rc<Cell<bool>>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the loop to stop; the next scheduled frame does no work.
    pub fn stop(&self) {
        if !self.stopped.replace(true) {
            info!("frame loop stop requested");
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

#[derive(Debug, Default)]
pub struct FrameLoop {
    stop: StopHandle,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.stop.is_stopped()
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame (integrate, collide, sync) unless stopped.
    /// Returns whether the host should schedule another frame.
    pub fn run_frame<S: RenderSurface + ?Sized>(&mut self, world: &mut WorldCore, surface: &mut S) -> bool {
        if self.stop.is_stopped() {
            return false;
        }
        world.tick(surface);
        self.frames += 1;
        true
    }
}
