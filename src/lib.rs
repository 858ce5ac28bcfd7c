//=========================================================================
// Flappy Engine: Library Root
//
// This crate defines the public API surface of the Flappy game.
//
// Responsibilities:
// - Expose the engine interface (`Engine`, `EngineBuilder`)
// - Expose the simulation (`core`) for embedding and testing
// - Keep the winit integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use flappy_engine::EngineBuilder;
// use flappy_engine::core::render::HeadlessCanvas;
//
// fn main() -> Result<(), flappy_engine::core::error::GameError> {
//     EngineBuilder::new().build().run(HeadlessCanvas::new("resources"))
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the simulation and everything that runs on the core
// thread: avatar, obstacle field, scene, loop driver, rendering seam.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the Winit integration (window, event loop, input
// mapping) and is kept private, as it is not part of the public API.
//
// `engine` wires the platform and the core thread together.
//
mod platform;
mod engine;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
