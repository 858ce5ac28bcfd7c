//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use flappy_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};

// Configuration and errors
pub use crate::core::config::GameConfig;
pub use crate::core::error::GameError;

// Input and loop control
pub use crate::core::input::InputEvent;
pub use crate::core::platform_bridge::TickControl;

// Scene system
pub use crate::core::scene::{FlightScene, Phase, Scene};

// Rendering
pub use crate::core::render::{AssetPaths, Canvas, Color, Flip, HeadlessCanvas, Rect, TextureHandle};

// World
pub use crate::core::world::{Avatar, Obstacle, ObstacleField};
