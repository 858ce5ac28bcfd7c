//=========================================================================
// Game Configuration
//=========================================================================
//
// Every tunable constant of the game, grouped by the system that reads it.
//
// Architecture:
//   GameConfig
//     ├─ arena:     visible playing area
//     ├─ avatar:    placement, size and physics of the player
//     ├─ obstacles: spawn shape ranges, scroll speed, spawn cadence
//     └─ timing:    tick period and timed pauses (converted to ticks)
//
// Defaults reproduce the baseline game. `EngineBuilder` exposes setters
// for the values that are commonly tuned.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== ArenaConfig =========================================================

/// Size of the visible playing area, in arena units (pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

//=== AvatarConfig ========================================================

/// Placement, size and physics constants of the avatar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarConfig {
    /// Fixed left edge of the avatar.
    pub x: i32,
    pub width: i32,
    pub height: i32,
    /// Vertical position (measured up from the floor) on start and restart.
    pub start_position: f64,
    /// Added to the velocity every tick.
    pub gravity: f64,
    /// Velocity assigned by a jump. Negative moves the avatar up.
    pub jump_velocity: f64,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            x: 10,
            width: 50,
            height: 43,
            start_position: 300.0,
            gravity: 0.1,
            jump_velocity: -2.0,
        }
    }
}

//=== ObstacleConfig ======================================================

/// Shape ranges, scroll speed and cadence of the obstacle spawner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleConfig {
    pub width: i32,
    /// Smallest obstacle height.
    pub min_height: i32,
    /// Heights are drawn from `min_height..min_height + height_range`.
    pub height_range: i32,
    /// Spawn x is drawn from `arena.width..arena.width + spawn_jitter`.
    pub spawn_jitter: i32,
    /// Units scrolled left per tick.
    pub speed: i32,
    pub spawn_interval: Duration,
    /// Seed for the spawner RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            width: 50,
            min_height: 100,
            height_range: 200,
            spawn_jitter: 50,
            speed: 1,
            spawn_interval: Duration::from_secs(1),
            seed: None,
        }
    }
}

//=== TimingConfig ========================================================

/// Tick period and the timed pauses of the game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingConfig {
    /// Period of one simulation step.
    pub tick: Duration,
    /// Frozen frame shown right after death.
    pub death_pause: Duration,
    /// "Game Over" caption shown after the frozen frame.
    pub caption: Duration,
    /// Title screen shown once before the first scene.
    pub title: Duration,
}

impl TimingConfig {
    /// Ticks per second implied by the tick period.
    pub fn tps(&self) -> f64 {
        1.0 / self.tick.as_secs_f64()
    }

    /// Number of ticks the frozen death frame lasts.
    pub fn death_pause_ticks(&self) -> u32 {
        self.ticks_for(self.death_pause)
    }

    /// Number of ticks the "Game Over" caption lasts.
    pub fn caption_ticks(&self) -> u32 {
        self.ticks_for(self.caption)
    }

    fn ticks_for(&self, duration: Duration) -> u32 {
        u32::try_from(duration.as_nanos() / self.tick.as_nanos().max(1)).unwrap_or(u32::MAX)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(10),
            death_pause: Duration::from_secs(1),
            caption: Duration::from_secs(1),
            title: Duration::from_secs(1),
        }
    }
}

//=== GameConfig ==========================================================

/// Complete game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameConfig {
    pub arena: ArenaConfig,
    pub avatar: AvatarConfig,
    pub obstacles: ObstacleConfig,
    pub timing: TimingConfig,
}

//=========================================================================
// Unit Tests
//=========================================================================
