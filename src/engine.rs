//=========================================================================
// Flappy Engine
//
// Main entry point and coordinator for the game.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run(canvas)──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ spawns the core thread
//         ├─ with_channel_capacity() ├─ runs the platform
//         ├─ with_spawn_interval()   └─ joins the core thread
//         ├─ with_seed()
//         └─ with_config()
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};
use winit::event_loop::EventLoop;

//=== Internal Dependencies ===============================================

use crate::core::config::{ArenaConfig, GameConfig};
use crate::core::error::GameError;
use crate::core::platform_bridge::{CoreSignal, PlatformError, PlatformEvent};
use crate::core::render::{AssetPaths, Canvas};
use crate::core::CoreSystemsOrchestrator;
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 100.0 (one tick every 10 ms)
/// - **Channel capacity**: 128 events
/// - **Spawn interval**: 1 s
/// - **Seed**: none, the spawner seeds from entropy
///
/// # Examples
///
/// Simple usage with defaults:
/// ```no_run
/// use flappy_engine::EngineBuilder;
/// use flappy_engine::core::render::HeadlessCanvas;
///
/// EngineBuilder::new().build().run(HeadlessCanvas::new("resources"))?;
/// # Ok::<(), flappy_engine::core::error::GameError>(())
/// ```
///
/// Reproducible obstacle sequence:
/// ```no_run
/// # use flappy_engine::EngineBuilder;
/// # use flappy_engine::core::render::HeadlessCanvas;
/// use std::time::Duration;
///
/// EngineBuilder::new()
///     .with_tps(60.0)
///     .with_spawn_interval(Duration::from_millis(1500))
///     .with_seed(7)
///     .build()
///     .run(HeadlessCanvas::new("resources"))?;
/// # Ok::<(), flappy_engine::core::error::GameError>(())
/// ```
pub struct EngineBuilder {
    config: GameConfig,
    assets: AssetPaths,
    channel_capacity: usize,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            assets: AssetPaths::default(),
            channel_capacity: 128,
        }
    }

    /// Sets the target ticks per second of the core thread.
    ///
    /// Physics constants are per tick, so this also scales game speed.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0 && tps.is_finite(), "TPS must be positive, got {}", tps);
        self.config.timing.tick = Duration::from_secs_f64(1.0 / tps);
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the cadence of the obstacle spawner.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn with_spawn_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Spawn interval must be positive");
        self.config.obstacles.spawn_interval = interval;
        self
    }

    /// Seeds the spawner RNG for a reproducible obstacle sequence.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.obstacles.seed = Some(seed);
        self
    }

    /// Replaces the whole game configuration.
    ///
    /// # Panics
    ///
    /// Panics if the tick period or the spawn interval is zero.
    pub fn with_config(mut self, config: GameConfig) -> Self {
        assert!(!config.timing.tick.is_zero(), "TPS must be positive, got a zero tick period");
        assert!(!config.obstacles.spawn_interval.is_zero(), "Spawn interval must be positive");
        self.config = config;
        self
    }

    /// Replaces the asset locations handed to the canvas.
    pub fn with_assets(mut self, assets: AssetPaths) -> Self {
        self.assets = assets;
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            "Building engine (TPS: {:.0}, channel: {})",
            self.config.timing.tps(),
            self.channel_capacity
        );

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(self.config, self.assets),
            arena: self.config.arena,
            tps: self.config.timing.tps(),
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Flappy runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     ├─► title screen, asset loading
///   │     └─► LoopDriver → FlightScene → Canvas
///   │           └─► obstacle spawner thread
///   │
///   └─► Platform (Winit Event Loop)
///         └─► Window, input mapping
///
/// Platform → Core: crossbeam channel (PlatformEvent)
/// Core → Platform: winit user event (CoreSignal)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    arena: ArenaConfig,
    tps: f64,
    channel_capacity: usize,
}

impl Engine {
    /// Starts the runtime and blocks until the game exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the winit event loop and its user-event proxy
    /// 2. Creates the platform → core channel
    /// 3. Spawns the core thread, which owns `canvas`
    /// 4. Runs the platform event loop on the calling thread
    /// 5. Joins the core thread and returns its result
    ///
    /// The core thread wakes the event loop through the proxy when it ends,
    /// so a quit from the keyboard also closes the window.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error: event loop failure, a failed asset
    /// load or render, or a panicked core thread.
    pub fn run<C>(self, canvas: C) -> Result<(), GameError>
    where
        C: Canvas + Send + 'static,
    {
        info!("Starting engine runtime (TPS: {:.0})", self.tps);

        //--- 1. Create the event loop ------------------------------------
        let event_loop = EventLoop::<CoreSignal>::with_user_event()
            .build()
            .map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;
        let proxy = event_loop.create_proxy();

        //--- 2. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        info!("Channel created (capacity: {})", self.channel_capacity);

        //--- 3. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, canvas, move || {
            // Fails only when the event loop is already gone.
            let _ = proxy.send_event(CoreSignal::Exited);
        })?;
        info!("Core logic thread spawned");

        //--- 4. Launch the platform subsystem -----------------------------
        let platform_result = Platform::new(tx, self.arena).run(event_loop);
        info!("Platform event loop exited");

        //--- 5. Cleanup: Wait for logic thread to terminate --------------
        let core_result = match core_handle.join() {
            Ok(result) => result,
            Err(e) => {
                error!("Core thread panicked: {:?}", e);
                Err(GameError::CoreThreadPanicked)
            }
        };

        info!("Engine shutdown complete");

        platform_result?;
        core_result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.config, GameConfig::default());
        assert_eq!(builder.assets, AssetPaths::default());
        assert_eq!(builder.channel_capacity, 128);
    }

    #[test]
    fn builder_with_tps_sets_tick_period() {
        let builder = EngineBuilder::new().with_tps(50.0);
        assert_eq!(builder.config.timing.tick, Duration::from_millis(20));
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::new().with_tps(-60.0);
    }

    #[test]
    fn builder_with_channel_capacity() {
        let builder = EngineBuilder::new().with_channel_capacity(256);
        assert_eq!(builder.channel_capacity, 256);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    fn builder_with_spawn_interval_and_seed() {
        let builder = EngineBuilder::new()
            .with_spawn_interval(Duration::from_millis(750))
            .with_seed(42);

        assert_eq!(builder.config.obstacles.spawn_interval, Duration::from_millis(750));
        assert_eq!(builder.config.obstacles.seed, Some(42));
    }

    #[test]
    #[should_panic(expected = "Spawn interval must be positive")]
    fn builder_with_spawn_interval_panics_on_zero() {
        EngineBuilder::new().with_spawn_interval(Duration::ZERO);
    }

    #[test]
    fn builder_with_config_replaces_everything() {
        let mut config = GameConfig::default();
        config.avatar.gravity = 0.2;
        config.arena.width = 1024;

        let builder = EngineBuilder::new().with_seed(1).with_config(config);
        assert_eq!(builder.config, config);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_config_rejects_zero_tick() {
        let mut config = GameConfig::default();
        config.timing.tick = Duration::ZERO;
        EngineBuilder::new().with_config(config);
    }

    #[test]
    #[should_panic(expected = "Spawn interval must be positive")]
    fn builder_with_config_rejects_zero_spawn_interval() {
        let mut config = GameConfig::default();
        config.obstacles.spawn_interval = Duration::ZERO;
        EngineBuilder::new().with_config(config);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_tps(200.0)
            .with_channel_capacity(256)
            .build();

        assert!((engine.tps - 200.0).abs() < 1e-9);
        assert_eq!(engine.channel_capacity, 256);
    }
}
