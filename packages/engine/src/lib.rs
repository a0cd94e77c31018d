//! Zero-G Engine - floating, draggable UI elements in WASM
//!
//! A small, visually tuned physics loop: bodies drift, bounce off the
//! viewport walls, flee the pointer, softly push each other apart, and can
//! be grabbed and thrown.
//!
//! Architecture:
//! - core/        - Vector math, RNG, errors
//! - domain/      - Engine configuration
//! - systems/     - Bodies, pointer tracking, integration and collisions
//! - simulation/  - Session world (headless) and its JS facade
//! - render/      - Render surfaces and pose extraction
//! - frame/       - Frame loop and cancellation
//! - logging      - tracing subscriber (browser console or stderr)
//! - dom/         - Browser binding (wasm32 only)

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

pub mod core;
pub mod domain;
pub mod frame;
pub mod logging;
pub mod render;
pub mod simulation;
pub mod systems;

#[cfg(target_arch = "wasm32")]
pub mod dom;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    logging::init_logging();
    web_sys::console::log_1(&"Zero-G engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{EngineError, EngineResult, Vec2};
pub use domain::config::{CollisionResponse, EngineConfig};
pub use frame::{FrameLoop, StopHandle};
pub use logging::init_logging;
pub use render::{BodyTransform, RenderSurface, TransformBuffer};
pub use simulation::{FrameSummary, PerfStats, World, WorldCore};
pub use systems::body::{Body, BodyId, DragState};
pub use systems::pointer::{PointerTracker, POINTER_SENTINEL};

#[cfg(target_arch = "wasm32")]
pub use dom::{start, start_with_config, EngineHandle};
