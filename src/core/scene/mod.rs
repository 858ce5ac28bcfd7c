//=========================================================================
// Scene System
//=========================================================================
//
// The seam between the loop driver and game logic.
//
// Flow:
//   Signal::Input → Scene::handle_input()
//   Signal::Tick  → Scene::tick() → Scene::render()
//
//=========================================================================

//=== Module Declarations =================================================

mod flight_scene;

//=== Internal Dependencies ===============================================

use crate::core::error::GameError;
use crate::core::input::InputEvent;
use crate::core::platform_bridge::TickControl;
use crate::core::render::Canvas;

//=== Public API ==========================================================

pub use flight_scene::{FlightScene, Phase};

//=== Scene Trait =========================================================

/// Defines scene behavior with lifecycle hooks, input, tick and paint.
///
/// Only `handle_input`, `tick` and `render` are required. Lifecycle hooks
/// have default empty implementations:
///
/// ```rust
/// # use flappy_engine::prelude::*;
/// struct Idle;
///
/// impl Scene for Idle {
///     fn handle_input(&mut self, event: InputEvent) -> TickControl {
///         if event.is_quit() { TickControl::Exit } else { TickControl::Continue }
///     }
///     fn tick(&mut self) {}
///     fn render(&self, canvas: &mut dyn Canvas) -> Result<(), GameError> {
///         canvas.clear();
///         canvas.present()
///     }
/// }
/// ```
pub trait Scene {
    /// Called once before the first signal is dispatched.
    fn on_enter(&mut self) {}

    /// Called once after the loop driver stops, on every exit path.
    fn on_exit(&mut self) {}

    /// Reacts to one input event. Returning [`TickControl::Exit`] ends the loop.
    fn handle_input(&mut self, event: InputEvent) -> TickControl;

    /// Advances the simulation by one fixed tick.
    fn tick(&mut self);

    /// Paints one complete frame.
    fn render(&self, canvas: &mut dyn Canvas) -> Result<(), GameError>;
}
