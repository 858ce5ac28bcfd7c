//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with core systems.
//
// This module defines the contract between platform implementations and
// core logic, so the core can be driven by any event source that speaks
// `PlatformEvent` (the winit platform, or a plain channel in tests).
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Core-side race between input and the tick clock
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event_collector;
pub mod interface;

//=== Public API ==========================================================

pub use event_collector::{EventCollector, Signal, TickControl};
pub use interface::{CoreSignal, PlatformError, PlatformEvent};
