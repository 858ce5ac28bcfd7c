//=========================================================================
// Obstacle Field
//=========================================================================
//
// Owns the live obstacle sequence and the background spawner feeding it.
//
// Architecture:
// ```text
//   Spawner Thread                     Core Thread
//   ┌───────────────────┐             ┌──────────────────────────┐
//   │ tick(interval) ───┼─ write ──┐  │ advance_and_cull  (write)│
//   │ stop channel      │          ▼  │ restart           (write)│
//   └───────────────────┘   RwLock<Vec<Obstacle>>  ◄── check_collision (read)
//                                      │ paint             (read)│
//                                      └──────────────────────────┘
// ```
//
// The sequence is the only state shared between threads. Every access
// goes through one `parking_lot::RwLock`, so a reader always observes a
// whole sequence, never a partially appended or culled one.
//
// Spawner lifetime: the field holds the stop sender and the join handle.
// Dropping the field disconnects the stop channel and joins the thread.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, select, tick, Sender};
use log::{debug, info, trace, warn};
use parking_lot::{Mutex, RwLock};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use super::{AvatarView, Obstacle};
use crate::core::config::{ArenaConfig, ObstacleConfig};
use crate::core::error::GameError;
use crate::core::render::{Canvas, TextureHandle};

//=== ObstacleFactory =====================================================

/// Builds obstacles with randomized height, orientation and spawn jitter.
struct ObstacleFactory {
    rng: StdRng,
    config: ObstacleConfig,
    arena_width: i32,
}

impl ObstacleFactory {
    fn new(config: ObstacleConfig, arena_width: i32) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            config,
            arena_width,
        }
    }

    fn build(&mut self) -> Obstacle {
        let jitter = self.rng.gen_range(0..self.config.spawn_jitter.max(1));
        let height = self.config.min_height + self.rng.gen_range(0..self.config.height_range.max(1));
        let inverted = self.rng.gen_bool(0.5);

        Obstacle::new(self.arena_width + jitter, self.config.width, height, inverted)
    }
}

//=== FieldShared =========================================================

/// State reachable from both the core thread and the spawner thread.
struct FieldShared {
    obstacles: RwLock<Vec<Obstacle>>,
    factory: Mutex<ObstacleFactory>,
}

impl FieldShared {
    fn spawn_one(&self) {
        // Factory lock is released before the write guard is taken.
        let obstacle = self.factory.lock().build();
        let mut obstacles = self.obstacles.write();
        obstacles.push(obstacle);
        trace!("Spawned {:?} ({} live)", obstacle, obstacles.len());
    }
}

//=== Spawner =============================================================

/// Handle to the running spawner thread.
struct Spawner {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Spawner {
    fn start(shared: Arc<FieldShared>, interval: Duration) -> Result<Self, GameError> {
        let (stop_tx, stop_rx) = bounded::<()>(0);

        let handle = thread::Builder::new()
            .name("obstacle-spawner".into())
            .spawn(move || {
                let ticker = tick(interval);
                shared.spawn_one();

                loop {
                    select! {
                        recv(ticker) -> _ => shared.spawn_one(),
                        recv(stop_rx) -> _ => break,
                    }
                }
                debug!("Obstacle spawner stopped");
            });

        let spawner = Self::from_spawn(handle, stop_tx)?;
        info!("Obstacle spawner started (interval: {:?})", interval);
        Ok(spawner)
    }

    fn from_spawn(handle: io::Result<JoinHandle<()>>, stop: Sender<()>) -> Result<Self, GameError> {
        let handle = handle.map_err(GameError::ThreadSpawn)?;
        Ok(Self {
            stop: Some(stop),
            handle: Some(handle),
        })
    }

    fn stop(&mut self) {
        // Disconnecting the channel wakes the `recv(stop_rx)` arm.
        drop(self.stop.take());

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("Obstacle spawner panicked");
            }
        }
    }
}

impl Drop for Spawner {
    fn drop(&mut self) {
        self.stop();
    }
}

//=== ObstacleField =======================================================

/// Live obstacle sequence plus its background spawner.
pub struct ObstacleField {
    shared: Arc<FieldShared>,
    spawner: Option<Spawner>,
    speed: i32,
    arena_height: i32,
}

impl ObstacleField {
    //--- Construction -----------------------------------------------------

    /// Creates a field and starts its spawner.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ThreadSpawn`] if the spawner thread can't start.
    pub fn new(config: ObstacleConfig, arena: ArenaConfig) -> Result<Self, GameError> {
        let mut field = Self::manual(config, arena);
        field.spawner = Some(Spawner::start(Arc::clone(&field.shared), config.spawn_interval)?);
        Ok(field)
    }

    /// Creates a field without a spawner. Obstacles only appear through
    /// [`ObstacleField::spawn_one`] or [`ObstacleField::insert`].
    pub fn manual(config: ObstacleConfig, arena: ArenaConfig) -> Self {
        Self {
            shared: Arc::new(FieldShared {
                obstacles: RwLock::new(Vec::new()),
                factory: Mutex::new(ObstacleFactory::new(config, arena.width)),
            }),
            spawner: None,
            speed: config.speed,
            arena_height: arena.height,
        }
    }

    //--- Writers ----------------------------------------------------------

    /// Appends one randomized obstacle just off the right edge.
    pub fn spawn_one(&self) {
        self.shared.spawn_one();
    }

    /// Appends a specific obstacle.
    pub fn insert(&self, obstacle: Obstacle) {
        self.shared.obstacles.write().push(obstacle);
    }

    /// Scrolls every obstacle left by `speed`, then drops those that have
    /// fully left the arena. Order is preserved.
    pub fn advance_and_cull(&self) {
        let mut obstacles = self.shared.obstacles.write();
        for obstacle in obstacles.iter_mut() {
            obstacle.advance(self.speed);
        }
        obstacles.retain(|obstacle| !obstacle.is_off_screen());
    }

    /// Clears the live sequence. The spawner keeps running.
    pub fn restart(&self) {
        self.shared.obstacles.write().clear();
    }

    /// Stops and joins the spawner. Also happens on drop.
    pub fn shutdown(&mut self) {
        if let Some(mut spawner) = self.spawner.take() {
            spawner.stop();
        }
    }

    //--- Readers ----------------------------------------------------------

    /// Returns `true` if any live obstacle overlaps the avatar body.
    pub fn check_collision(&self, avatar: &AvatarView) -> bool {
        self.shared
            .obstacles
            .read()
            .iter()
            .any(|obstacle| obstacle.collides_with(avatar, self.arena_height))
    }

    pub fn len(&self) -> usize {
        self.shared.obstacles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.obstacles.read().is_empty()
    }

    /// Copy of the live sequence at a single instant.
    pub fn snapshot(&self) -> Vec<Obstacle> {
        self.shared.obstacles.read().clone()
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn is_spawning(&self) -> bool {
        self.spawner.as_ref().is_some_and(|s| s.handle.is_some())
    }

    /// Draws every live obstacle under one read guard.
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C, texture: TextureHandle) -> Result<(), GameError> {
        let obstacles = self.shared.obstacles.read();
        for obstacle in obstacles.iter() {
            let (dest, flip) = obstacle.placement(self.arena_height);
            canvas.draw(texture, Some(dest), flip)?;
        }
        Ok(())
    }
}

impl Drop for ObstacleField {
    fn drop(&mut self) {
        self.shutdown();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    //--- Test Helpers -----------------------------------------------------

    fn seeded_config() -> ObstacleConfig {
        ObstacleConfig {
            seed: Some(7),
            ..ObstacleConfig::default()
        }
    }

    fn manual_field() -> ObstacleField {
        ObstacleField::manual(seeded_config(), ArenaConfig::default())
    }

    fn view_at(body_bottom: f64) -> AvatarView {
        AvatarView {
            left: 10.0,
            right: 60.0,
            body_bottom,
            body_top: body_bottom + 28.0,
        }
    }

    //--- Spawning ---------------------------------------------------------

    #[test]
    fn spawned_obstacles_respect_configured_ranges() {
        let field = manual_field();
        for _ in 0..500 {
            field.spawn_one();
        }

        for obstacle in field.snapshot() {
            assert!((800..850).contains(&obstacle.horizontal_position()));
            assert!((100..300).contains(&obstacle.height()));
            assert_eq!(obstacle.width(), 50);
        }
    }

    #[test]
    fn spawned_orientation_is_mixed() {
        let field = manual_field();
        for _ in 0..200 {
            field.spawn_one();
        }

        let inverted = field.snapshot().iter().filter(|o| o.inverted()).count();
        assert!(inverted > 0 && inverted < 200);
    }

    #[test]
    fn same_seed_spawns_same_sequence() {
        let a = manual_field();
        let b = manual_field();
        for _ in 0..20 {
            a.spawn_one();
            b.spawn_one();
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    //--- Advance & Cull ---------------------------------------------------

    #[test]
    fn advance_decreases_position_by_speed() {
        let field = manual_field();
        field.insert(Obstacle::new(400, 50, 100, false));
        field.insert(Obstacle::new(500, 50, 100, true));

        field.advance_and_cull();

        let positions: Vec<_> = field.snapshot().iter().map(|o| o.horizontal_position()).collect();
        assert_eq!(positions, vec![400 - field.speed(), 500 - field.speed()]);
    }

    #[test]
    fn cull_drops_obstacles_past_the_left_edge() {
        let field = manual_field();
        field.insert(Obstacle::new(-49, 50, 100, false));
        field.insert(Obstacle::new(10, 50, 100, false));
        field.insert(Obstacle::new(-48, 50, 100, true));

        field.advance_and_cull();

        let remaining = field.snapshot();
        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[0].horizontal_position(), 9);
        assert_eq!(remaining[1].horizontal_position(), -49);
    }

    #[test]
    fn obstacle_scrolls_until_culled() {
        let field = manual_field();
        field.insert(Obstacle::new(100, 50, 100, false));

        let mut last = 100;
        while !field.is_empty() {
            field.advance_and_cull();
            if let Some(obstacle) = field.snapshot().first() {
                assert_eq!(obstacle.horizontal_position(), last - 1);
                last = obstacle.horizontal_position();
            }
        }
        assert_eq!(last, -49);
    }

    //--- Collision --------------------------------------------------------

    #[test]
    fn empty_field_never_collides() {
        let field = manual_field();
        assert!(!field.check_collision(&view_at(0.0)));
    }

    #[test]
    fn floor_obstacle_collision_boundary() {
        let field = manual_field();
        field.insert(Obstacle::new(30, 50, 150, false));

        assert!(field.check_collision(&view_at(149.0)));
        assert!(!field.check_collision(&view_at(150.0)));
    }

    #[test]
    fn any_colliding_obstacle_is_fatal() {
        let field = manual_field();
        field.insert(Obstacle::new(500, 50, 290, false));
        field.insert(Obstacle::new(30, 50, 290, true));

        // body_top 330 > 600 - 290
        assert!(field.check_collision(&view_at(302.0)));
    }

    #[test]
    fn restart_clears_sequence() {
        let field = manual_field();
        field.spawn_one();
        field.spawn_one();

        field.restart();

        assert!(field.is_empty());
    }

    //--- Concurrency ------------------------------------------------------

    #[test]
    fn spawner_populates_field() {
        let config = ObstacleConfig {
            spawn_interval: Duration::from_millis(1),
            ..seeded_config()
        };
        let field = ObstacleField::new(config, ArenaConfig::default()).unwrap();
        assert!(field.is_spawning());

        let deadline = Instant::now() + Duration::from_secs(5);
        while field.len() < 3 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }

        assert!(field.len() >= 3);
    }

    #[test]
    fn spawner_and_consumer_run_concurrently() {
        let config = ObstacleConfig {
            spawn_interval: Duration::from_micros(200),
            speed: 25,
            ..seeded_config()
        };
        let field = ObstacleField::new(config, ArenaConfig::default()).unwrap();
        let view = view_at(300.0);

        for _ in 0..5_000 {
            field.advance_and_cull();
            field.check_collision(&view);

            let snapshot = field.snapshot();
            assert!(snapshot.iter().all(|o| !o.is_off_screen()));
            // Spawn order is left-to-right order.
            assert!(snapshot
                .windows(2)
                .all(|pair| pair[0].horizontal_position() < pair[1].horizontal_position() + 50));
        }
    }

    #[test]
    fn shutdown_stops_spawning() {
        let config = ObstacleConfig {
            spawn_interval: Duration::from_millis(1),
            ..seeded_config()
        };
        let mut field = ObstacleField::new(config, ArenaConfig::default()).unwrap();

        field.shutdown();
        assert!(!field.is_spawning());

        let len = field.len();
        thread::sleep(Duration::from_millis(20));
        assert_eq!(field.len(), len);
    }

    #[test]
    fn drop_joins_spawner_with_long_interval() {
        let config = ObstacleConfig {
            spawn_interval: Duration::from_secs(3600),
            ..seeded_config()
        };
        let started = Instant::now();

        let field = ObstacleField::new(config, ArenaConfig::default()).unwrap();
        drop(field);

        assert!(started.elapsed() < Duration::from_secs(60));
    }

    #[test]
    fn failed_spawner_start_is_reported() {
        let (stop, _stop_rx) = bounded::<()>(0);
        let failure = std::io::Error::new(std::io::ErrorKind::WouldBlock, "no threads left");

        let result = Spawner::from_spawn(Err(failure), stop);

        assert!(matches!(result, Err(GameError::ThreadSpawn(_))));
    }
}
