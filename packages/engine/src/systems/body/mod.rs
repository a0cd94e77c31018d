//! Body - one floating UI element as the simulation sees it
//!
//! The physics record holds no reference to the element it drives; the
//! element mapping lives with whatever surface renders it.

mod body;
mod registry;

pub use body::{Body, BodyId, DragState};
pub use registry::BodyRegistry;
