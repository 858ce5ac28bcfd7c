//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for everything running on the logic (non-platform)
// thread.
//
// Responsibilities:
// - Show the title screen and load scene assets through the canvas
// - Race platform events against the fixed-rate tick (LoopDriver)
// - Dispatch input and ticks to the scene, one paint per tick
// - Stop on Quit, window close, platform disconnect, or a fatal error
//
// Notes:
// The orchestrator runs independently from the platform layer.
// Communication with the platform occurs only through message passing
// (crossbeam channel in, winit user event out), ensuring isolation and
// thread safety.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod config;
pub mod error;
pub mod input;
pub mod platform_bridge;
pub mod render;
pub mod scene;
pub mod world;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::Duration;

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::{error, info};

//=== Internal Modules ====================================================

use config::GameConfig;
use error::GameError;
use platform_bridge::{EventCollector, PlatformEvent, Signal, TickControl};
use render::{AssetPaths, Canvas, Flip, SceneAssets, CAPTION_COLOR, TITLE_CAPTION};
use scene::{FlightScene, Scene};

//=== LoopDriver ==========================================================

/// Feeds a scene from the event/tick race until told to stop.
pub struct LoopDriver {
    collector: EventCollector,
}

impl LoopDriver {
    pub fn new(receiver: Receiver<PlatformEvent>, tick_period: Duration) -> Self {
        Self {
            collector: EventCollector::new(receiver, tick_period),
        }
    }

    /// Waits for `duration` while still honoring exit requests.
    pub fn hold(&self, duration: Duration) -> TickControl {
        self.collector.hold(duration)
    }

    /// Runs `scene` until exit.
    ///
    /// Each tick is one full advance-check-paint cycle. Render errors end
    /// the loop and are returned unchanged. `on_exit` runs on every path.
    pub fn run<S, C>(&self, scene: &mut S, canvas: &mut C) -> Result<(), GameError>
    where
        S: Scene + ?Sized,
        C: Canvas,
    {
        scene.on_enter();
        let result = self.dispatch(scene, canvas);
        scene.on_exit();
        result
    }

    fn dispatch<S, C>(&self, scene: &mut S, canvas: &mut C) -> Result<(), GameError>
    where
        S: Scene + ?Sized,
        C: Canvas,
    {
        let mut ticks: u64 = 0;

        loop {
            match self.collector.next_signal() {
                Signal::Input(event) => {
                    if scene.handle_input(event) == TickControl::Exit {
                        break;
                    }
                }
                Signal::Tick => {
                    scene.tick();
                    scene.render(canvas)?;
                    ticks += 1;
                }
                Signal::Exit => break,
            }
        }

        info!("Core loop exiting after {} ticks", ticks);
        Ok(())
    }
}

//=== ExitNotifier ========================================================

/// Runs the wrapped callback when dropped.
struct ExitNotifier<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> Drop for ExitNotifier<F> {
    fn drop(&mut self) {
        if let Some(notify) = self.0.take() {
            notify();
        }
    }
}

//=== CoreSystemsOrchestrator =============================================

/// Owns the configuration of the core thread and runs it.
pub struct CoreSystemsOrchestrator {
    config: GameConfig,
    assets: AssetPaths,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------

    pub fn new(config: GameConfig, assets: AssetPaths) -> Self {
        Self { config, assets }
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread. `on_exit` runs on that thread after the
    // loop ends, whatever the outcome, so the platform can be told to
    // close the window.
    //
    pub fn spawn_core_thread<C, F>(
        self,
        receiver: Receiver<PlatformEvent>,
        mut canvas: C,
        on_exit: F,
    ) -> Result<thread::JoinHandle<Result<(), GameError>>, GameError>
    where
        C: Canvas + Send + 'static,
        F: FnOnce() + Send + 'static,
    {
        thread::Builder::new()
            .name("core".into())
            .spawn(move || {
                // Fires on return and on unwind alike.
                let _notify = ExitNotifier(Some(on_exit));

                let result = self.run_core(receiver, &mut canvas);
                if let Err(e) = &result {
                    error!("Core thread failed: {}", e);
                }
                result
            })
            .map_err(GameError::ThreadSpawn)
    }

    //--- run_core() -------------------------------------------------------
    //
    // Title screen → asset loading → flight scene loop, on the calling thread.
    //
    pub fn run_core<C: Canvas>(
        &self,
        receiver: Receiver<PlatformEvent>,
        canvas: &mut C,
    ) -> Result<(), GameError> {
        let driver = LoopDriver::new(receiver, self.config.timing.tick);

        self.show_title(canvas)?;
        if driver.hold(self.config.timing.title) == TickControl::Exit {
            info!("Exit requested during title screen");
            return Ok(());
        }

        let assets = SceneAssets::load(canvas, &self.assets)?;
        let mut scene = FlightScene::new(&self.config, assets)?;

        info!("Core loop running at {:.0} TPS", self.config.timing.tps());
        driver.run(&mut scene, canvas)
    }

    fn show_title<C: Canvas>(&self, canvas: &mut C) -> Result<(), GameError> {
        canvas.load_font(&self.assets.font, self.assets.font_size)?;
        let title = canvas.render_text(TITLE_CAPTION, CAPTION_COLOR)?;

        canvas.clear();
        canvas.draw(title, None, Flip::None)?;
        canvas.present()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
