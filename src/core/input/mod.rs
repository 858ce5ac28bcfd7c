//=========================================================================
// Input
//=========================================================================
//
// Platform-independent input vocabulary shared by the platform layer
// (producer) and the scene (consumer).
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;

//=== Public API ==========================================================

pub use event::InputEvent;
