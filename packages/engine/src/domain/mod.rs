pub mod config;

pub use config::{CollisionResponse, EngineConfig};
