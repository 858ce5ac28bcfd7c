//=========================================================================
// Event Collector
//=========================================================================
//
// Races the platform event channel against the fixed-rate ticker.
//
// Architecture:
//   Receiver<PlatformEvent> ─┐
//                            ├─ select! → Signal { Input | Tick | Exit }
//   tick(period)         ────┘
//
// Whichever source is ready first wins. The channel is never drained in
// bulk, so input keeps its arrival order relative to ticks.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

use crossbeam_channel::{after, select, tick, Receiver};
use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== Signal ==============================================================

/// The next thing the loop driver has to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// A player input event arrived.
    Input(InputEvent),

    /// A fixed-rate tick elapsed.
    Tick,

    /// The window closed, the player quit, or the platform went away.
    Exit,
}

//=== EventCollector ======================================================

/// Blocks on the next of {platform event, tick}.
pub struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    ticker: Receiver<Instant>,
}

impl EventCollector {
    /// Creates a collector that ticks every `tick_period`.
    ///
    /// # Panics
    ///
    /// Panics if `tick_period` is zero.
    pub fn new(receiver: Receiver<PlatformEvent>, tick_period: Duration) -> Self {
        assert!(!tick_period.is_zero(), "Tick period must be positive");
        Self {
            receiver,
            ticker: tick(tick_period),
        }
    }

    /// Waits for the next signal.
    pub fn next_signal(&self) -> Signal {
        select! {
            recv(self.receiver) -> msg => match msg {
                Ok(event) => Self::classify(event),
                Err(_) => {
                    info!("Platform channel disconnected");
                    Signal::Exit
                }
            },
            recv(self.ticker) -> _ => Signal::Tick,
        }
    }

    /// Holds the caller for `duration` while still watching for exit.
    ///
    /// Input that arrives during the hold is discarded. Returns
    /// [`TickControl::Exit`] as soon as the platform asks to stop.
    pub fn hold(&self, duration: Duration) -> TickControl {
        let deadline = after(duration);

        loop {
            select! {
                recv(self.receiver) -> msg => match msg.map(Self::classify) {
                    Ok(Signal::Exit) | Err(_) => return TickControl::Exit,
                    Ok(signal) => debug!("Discarding {:?} during hold", signal),
                },
                recv(deadline) -> _ => return TickControl::Continue,
            }
        }
    }

    fn classify(event: PlatformEvent) -> Signal {
        match event {
            PlatformEvent::Input(input) if input.is_quit() => Signal::Exit,
            PlatformEvent::Input(input) => Signal::Input(input),
            PlatformEvent::WindowClosed => Signal::Exit,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
