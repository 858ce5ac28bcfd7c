//=========================================================================
// Input Event Types
//=========================================================================
//
// Engine-level representation of player input.
//
// The platform layer collapses every keyboard, mouse and window event it
// cares about into one of three variants before crossing the thread
// boundary. The core never sees platform types.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputProcessor (press → InputEvent)
//         ↓
//    PlatformEvent::Input over crossbeam channel
//         ↓
//    EventCollector → Scene::handle_input
// ```
//
//=========================================================================

//=== InputEvent ==========================================================

/// A player input event as seen by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// The player asked to leave the game.
    Quit,

    /// The single gameplay action (jump).
    PrimaryAction,

    /// Any input the game does not bind. Logged and ignored.
    Unknown,
}

impl InputEvent {
    /// Returns `true` if this event ends the run loop.
    pub fn is_quit(self) -> bool {
        matches!(self, Self::Quit)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_quit_ends_the_loop() {
        assert!(InputEvent::Quit.is_quit());
        assert!(!InputEvent::PrimaryAction.is_quit());
        assert!(!InputEvent::Unknown.is_quit());
    }
}
