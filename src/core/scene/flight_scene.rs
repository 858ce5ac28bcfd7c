//=========================================================================
// Flight Scene
//=========================================================================
//
// The game's only scene: avatar + obstacle field + background, and the
// death/restart state machine.
//
// State machine (advanced by ticks only):
// ```text
//   Playing ──collision or fall──► Dying { elapsed }
//      ▲                              │ death_pause_ticks: frozen world
//      │                              │ caption_ticks:     "Game Over"
//      └────────── Restarting ◄───────┘
// ```
//
// `Restarting` paints the last caption frame; the entities are reset on
// the tick that leaves it.
//
// Timed pauses are counted in ticks, so the loop driver keeps draining
// input while the scene is dying. Jumps received while dying hit a dead
// avatar and are discarded.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::config::GameConfig;
use crate::core::error::GameError;
use crate::core::input::InputEvent;
use crate::core::platform_bridge::TickControl;
use crate::core::render::{Canvas, Flip, SceneAssets};
use crate::core::world::{Avatar, ObstacleField};

//=== Phase ===============================================================

/// Current state of the flight scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Physics, scrolling and collision run every tick.
    Playing,

    /// Death detected; `elapsed` counts ticks since the transition.
    Dying { elapsed: u32 },

    /// Entities are reset on the next tick.
    Restarting,
}

//=== FlightScene =========================================================

pub struct FlightScene {
    arena_height: i32,
    assets: SceneAssets,
    avatar: Avatar,
    field: ObstacleField,
    phase: Phase,
    frame: u64,
    death_pause_ticks: u32,
    caption_ticks: u32,
}

impl FlightScene {
    //--- Construction -----------------------------------------------------

    /// Creates the scene and starts the obstacle spawner.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ThreadSpawn`] if the spawner can't start.
    pub fn new(config: &GameConfig, assets: SceneAssets) -> Result<Self, GameError> {
        let field = ObstacleField::new(config.obstacles, config.arena)?;
        Ok(Self::with_field(config, assets, field))
    }

    /// Creates the scene around an existing obstacle field.
    pub fn with_field(config: &GameConfig, assets: SceneAssets, field: ObstacleField) -> Self {
        Self {
            arena_height: config.arena.height,
            assets,
            avatar: Avatar::new(config.avatar, config.arena),
            field,
            phase: Phase::Playing,
            frame: 0,
            death_pause_ticks: config.timing.death_pause_ticks(),
            caption_ticks: config.timing.caption_ticks(),
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn field(&self) -> &ObstacleField {
        &self.field
    }

    /// Ticks processed since construction, in every phase.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// `true` while the "Game Over" caption replaces the world.
    pub fn shows_caption(&self) -> bool {
        match self.phase {
            Phase::Dying { elapsed } => elapsed >= self.death_pause_ticks,
            Phase::Restarting => self.caption_ticks > 0,
            Phase::Playing => false,
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn tick_playing(&mut self) {
        self.avatar.advance_physics();
        self.field.advance_and_cull();

        if self.field.check_collision(&self.avatar.view()) || self.avatar.is_dead() {
            self.avatar.mark_dead();
            info!(
                "Avatar died at frame {} (height {:.1})",
                self.frame,
                self.avatar.vertical_position()
            );
            self.phase = Phase::Dying { elapsed: 0 };
        }
    }

    // The `Restarting` frame is the last frame of the death sequence.
    fn tick_dying(&mut self, elapsed: u32) {
        let elapsed = elapsed.saturating_add(1);
        let last_frame = self
            .death_pause_ticks
            .saturating_add(self.caption_ticks)
            .saturating_sub(1);

        if elapsed == self.death_pause_ticks {
            debug!("Showing game over caption");
        }

        self.phase = if elapsed >= last_frame {
            Phase::Restarting
        } else {
            Phase::Dying { elapsed }
        };
    }

    fn tick_restarting(&mut self) {
        self.avatar.restart();
        self.field.restart();
        self.phase = Phase::Playing;
        info!("Scene restarted at frame {}", self.frame);
    }
}

//=== Scene Implementation ================================================

impl Scene for FlightScene {
    fn on_enter(&mut self) {
        info!("Flight scene entered");
    }

    fn on_exit(&mut self) {
        self.field.shutdown();
        info!("Flight scene exited after {} frames", self.frame);
    }

    fn handle_input(&mut self, event: InputEvent) -> TickControl {
        match event {
            InputEvent::PrimaryAction => {
                if self.avatar.is_dead() {
                    debug!("Jump discarded during {:?}", self.phase);
                }
                self.avatar.jump();
                TickControl::Continue
            }
            InputEvent::Quit => TickControl::Exit,
            InputEvent::Unknown => {
                debug!("Ignoring unknown input event");
                TickControl::Continue
            }
        }
    }

    fn tick(&mut self) {
        self.frame += 1;

        match self.phase {
            Phase::Playing => self.tick_playing(),
            Phase::Dying { elapsed } => self.tick_dying(elapsed),
            Phase::Restarting => self.tick_restarting(),
        }
    }

    fn render(&self, canvas: &mut dyn Canvas) -> Result<(), GameError> {
        canvas.clear();

        if self.shows_caption() {
            canvas.draw(self.assets.caption, None, Flip::None)?;
            return canvas.present();
        }

        canvas.draw(self.assets.background, None, Flip::None)?;

        let frame = self.avatar.current_animation_frame(self.assets.avatar_frames.len());
        if let Some(&texture) = self.assets.avatar_frames.get(frame) {
            canvas.draw(texture, Some(self.avatar.dest_rect(self.arena_height)), Flip::None)?;
        }

        self.field.paint(canvas, self.assets.obstacle)?;

        canvas.present()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
