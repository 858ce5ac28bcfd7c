//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the core thread.
//
// Architecture:
// ```text
//  Main Thread:                     Core Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  EventCollector  │
//  │   ↓                      │    │  ↓               │
//  │  input_processor         │    │  LoopDriver      │
//  │   └─ press → InputEvent  │    │  ↓               │
//  │   ↓                      │    │  FlightScene     │
//  │  crossbeam channel ──────┼───►│                  │
//  │                          │    │                  │
//  │  user_event(Exited) ◄────┼────┤  on exit         │
//  └──────────────────────────┘    └──────────────────┘
// ```
//
// Key Design Decisions:
// - Inputs are forwarded as they arrive; the core thread orders them
//   against its own tick
// - If the core thread dies, the platform logs a warning and keeps
//   running until the exit signal arrives
// - Winit mandates the main thread on macOS/iOS, so this runs on the
//   thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::config::ArenaConfig;
use crate::core::input::InputEvent;
use crate::core::platform_bridge::{CoreSignal, PlatformError, PlatformEvent};

//=== Constants ===========================================================

const WINDOW_TITLE: &str = "Flappy";

//=== Platform ============================================================

/// Window manager and input forwarder.
///
/// Runs on the main thread and sends every mapped press to the core
/// thread. The window is created lazily in `resumed()`.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Logical window size, equal to the arena.
    size: LogicalSize<u32>,

    /// Channel to send events to core thread.
    event_sender: Sender<PlatformEvent>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub fn new(event_sender: Sender<PlatformEvent>, arena: ArenaConfig) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            size: LogicalSize::new(arena.width.max(1) as u32, arena.height.max(1) as u32),
            event_sender,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes or the core signals exit.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::EventLoopExecution`] if winit fails.
    pub fn run(mut self, event_loop: EventLoop<CoreSignal>) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))
    }

    //--- Internal Helpers -------------------------------------------------

    fn forward_input(&self, event: InputEvent) {
        trace!(target: "platform::input", "Forwarding {:?}", event);

        if self.event_sender.send(PlatformEvent::Input(event)).is_err() {
            warn!(target: "platform::input", "Channel disconnected, dropping {:?}", event);
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler<CoreSignal> for Platform {
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(self.size)
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    /// Core thread finished; close the window.
    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: CoreSignal) {
        match event {
            CoreSignal::Exited => {
                info!(target: "platform", "Core thread exited, closing window");
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = input_processor::process_key_event(key_event) {
                    self.forward_input(event);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(event) = input_processor::process_mouse_button(*button, *state) {
                    self.forward_input(event);
                }
            }

            _ => {
                // Ignore: Resized, Focused, CursorMoved, etc.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
