//! Core building blocks shared by every system: vector math, the RNG and
//! the engine error type.

pub mod error;
pub mod random;
pub mod vec2;

pub use error::{EngineError, EngineResult};
pub use vec2::Vec2;
