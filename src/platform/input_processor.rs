//=========================================================================
// Input Processor
//=========================================================================
//
// Converts platform-specific Winit events into engine InputEvents.
//
// Architecture:
//   Winit Events → input_processor → InputEvent (engine type) → channel
//
// Only presses cross the thread boundary. Releases and OS key repeats
// are filtered here (returns None), so one physical press is one jump.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent, MouseButton},
    keyboard::{KeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== Event Processing ====================================================

/// Converts a Winit key event to an InputEvent (presses only).
pub(crate) fn process_key_event(key_event: &KeyEvent) -> Option<InputEvent> {
    process_key(key_event.physical_key, key_event.state, key_event.repeat)
}

fn process_key(key: PhysicalKey, state: ElementState, repeat: bool) -> Option<InputEvent> {
    if state != ElementState::Pressed || repeat {
        return None;
    }

    Some(match key {
        PhysicalKey::Code(code) => map_key(code),
        PhysicalKey::Unidentified(_) => InputEvent::Unknown,
    })
}

/// Converts a Winit mouse button event to an InputEvent (presses only).
pub(crate) fn process_mouse_button(button: MouseButton, state: ElementState) -> Option<InputEvent> {
    if state != ElementState::Pressed {
        return None;
    }

    Some(match button {
        MouseButton::Left => InputEvent::PrimaryAction,
        _ => InputEvent::Unknown,
    })
}

//--- Key Bindings --------------------------------------------------------

fn map_key(code: KeyCode) -> InputEvent {
    match code {
        KeyCode::Space | KeyCode::ArrowUp | KeyCode::Enter => InputEvent::PrimaryAction,
        KeyCode::Escape => InputEvent::Quit,
        _ => InputEvent::Unknown,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
