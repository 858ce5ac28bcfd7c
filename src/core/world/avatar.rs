//=========================================================================
// Avatar
//=========================================================================
//
// The player-controlled falling entity.
//
// Coordinates: `position` is measured upward from the arena floor, and
// velocity is subtracted from it every tick, so a positive velocity means
// falling and a negative one means rising.
//
// Owned and mutated by the core thread only; carries no lock.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::config::{ArenaConfig, AvatarConfig};
use crate::core::render::Rect;

//=== Constants ===========================================================

/// Simulation ticks per animation frame.
const TICKS_PER_ANIMATION_FRAME: u64 = 10;

//=== AvatarView ==========================================================

/// Read-only body extent handed to collision queries.
///
/// Vertical values use the avatar's floor-up coordinates. The body is the
/// middle two thirds of the sprite height, centered on the position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarView {
    pub left: f64,
    pub right: f64,
    pub body_bottom: f64,
    pub body_top: f64,
}

//=== Avatar ==============================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    config: AvatarConfig,
    floor_limit: f64,
    vertical_position: f64,
    vertical_velocity: f64,
    animation_tick: u64,
    alive: bool,
}

impl Avatar {
    //--- Construction -----------------------------------------------------

    pub fn new(config: AvatarConfig, arena: ArenaConfig) -> Self {
        let floor_limit = f64::from(arena.height) - f64::from(config.height) / 2.0;

        Self {
            config,
            floor_limit,
            vertical_position: config.start_position.clamp(0.0, floor_limit),
            vertical_velocity: 0.0,
            animation_tick: 0,
            alive: true,
        }
    }

    //--- Simulation -------------------------------------------------------

    /// Advances one tick of physics. Does nothing once dead.
    pub fn advance_physics(&mut self) {
        if !self.alive {
            return;
        }

        self.animation_tick += 1;
        self.vertical_position -= self.vertical_velocity;
        self.vertical_velocity += self.config.gravity;

        if self.belly() < 0.0 {
            self.alive = false;
        }

        self.vertical_position = self.vertical_position.clamp(0.0, self.floor_limit);
    }

    /// Snaps velocity to the jump velocity (not additive). Ignored once dead.
    pub fn jump(&mut self) {
        if self.alive {
            self.vertical_velocity = self.config.jump_velocity;
        }
    }

    pub fn is_dead(&self) -> bool {
        !self.alive
    }

    pub fn mark_dead(&mut self) {
        self.alive = false;
    }

    /// Resets position, velocity, animation clock and the alive flag.
    pub fn restart(&mut self) {
        self.vertical_position = self.config.start_position.clamp(0.0, self.floor_limit);
        self.vertical_velocity = 0.0;
        self.animation_tick = 0;
        self.alive = true;
    }

    //--- Queries ----------------------------------------------------------

    pub fn vertical_position(&self) -> f64 {
        self.vertical_position
    }

    pub fn vertical_velocity(&self) -> f64 {
        self.vertical_velocity
    }

    pub fn animation_tick(&self) -> u64 {
        self.animation_tick
    }

    /// Upper bound of the position range.
    pub fn floor_limit(&self) -> f64 {
        self.floor_limit
    }

    /// Index of the sprite to show, advancing at a tenth of the tick rate.
    pub fn current_animation_frame(&self, frame_count: usize) -> usize {
        if frame_count == 0 {
            return 0;
        }
        ((self.animation_tick / TICKS_PER_ANIMATION_FRAME) % frame_count as u64) as usize
    }

    pub fn view(&self) -> AvatarView {
        let third = f64::from(self.config.height) / 3.0;
        AvatarView {
            left: f64::from(self.config.x),
            right: f64::from(self.config.x + self.config.width),
            body_bottom: self.vertical_position - third,
            body_top: self.vertical_position + third,
        }
    }

    /// Screen-space destination of the sprite.
    pub fn dest_rect(&self, arena_height: i32) -> Rect {
        let y = (f64::from(arena_height) - self.vertical_position) as i32 - self.config.height / 2;
        Rect::new(self.config.x, y, self.config.width, self.config.height)
    }

    //--- Internal Helpers -------------------------------------------------

    fn belly(&self) -> f64 {
        self.vertical_position - f64::from(self.config.height) / 3.0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn avatar() -> Avatar {
        Avatar::new(AvatarConfig::default(), ArenaConfig::default())
    }

    //--- Scenarios --------------------------------------------------------

    #[test]
    fn first_tick_from_rest_only_adds_gravity() {
        let mut avatar = avatar();
        let start = avatar.vertical_position();

        avatar.advance_physics();

        assert!((avatar.vertical_velocity() - 0.1).abs() < EPSILON);
        assert!((avatar.vertical_position() - start).abs() < EPSILON);
        assert_eq!(avatar.animation_tick(), 1);
    }

    #[test]
    fn jump_then_tick_moves_by_jump_velocity() {
        let mut avatar = avatar();
        let start = avatar.vertical_position();

        avatar.jump();
        assert_eq!(avatar.vertical_velocity(), -2.0);

        avatar.advance_physics();

        assert!((avatar.vertical_position() - (start + 2.0)).abs() < EPSILON);
        assert!((avatar.vertical_velocity() - (-1.9)).abs() < EPSILON);
    }

    #[test]
    fn jump_overrides_existing_velocity() {
        let mut avatar = avatar();
        for _ in 0..50 {
            avatar.advance_physics();
        }
        assert!(avatar.vertical_velocity() > 4.0);

        avatar.jump();
        avatar.jump();

        assert_eq!(avatar.vertical_velocity(), -2.0);
    }

    //--- Death ------------------------------------------------------------

    #[test]
    fn free_fall_eventually_dies() {
        let mut avatar = avatar();
        let mut ticks = 0;
        while !avatar.is_dead() && ticks < 10_000 {
            avatar.advance_physics();
            ticks += 1;
        }
        assert!(avatar.is_dead(), "avatar should hit the floor");
        assert!(avatar.vertical_position() >= 0.0);
    }

    #[test]
    fn dead_avatar_ignores_jump_and_physics() {
        let mut avatar = avatar();
        avatar.mark_dead();
        let before = avatar.clone();

        avatar.jump();
        avatar.advance_physics();

        assert_eq!(avatar, before);
        assert!(avatar.is_dead());
    }

    #[test]
    fn ceiling_clamps_position() {
        let mut avatar = avatar();
        for _ in 0..1_000 {
            avatar.jump();
            avatar.advance_physics();
        }
        assert!((avatar.vertical_position() - avatar.floor_limit()).abs() < EPSILON);
        assert!(!avatar.is_dead());
    }

    //--- Restart ----------------------------------------------------------

    #[test]
    fn restart_resets_to_fresh_state() {
        let fresh = avatar();
        let mut avatar = avatar();
        for _ in 0..500 {
            avatar.advance_physics();
        }

        avatar.restart();
        assert_eq!(avatar, fresh);

        avatar.restart();
        assert_eq!(avatar, fresh, "restart must be idempotent");
    }

    //--- Presentation Helpers ---------------------------------------------

    #[test]
    fn animation_advances_every_ten_ticks() {
        let mut avatar = avatar();
        assert_eq!(avatar.current_animation_frame(4), 0);

        for _ in 0..10 {
            avatar.advance_physics();
        }
        assert_eq!(avatar.current_animation_frame(4), 1);

        for _ in 0..30 {
            avatar.jump();
            avatar.advance_physics();
        }
        assert_eq!(avatar.current_animation_frame(4), 0);
        assert_eq!(avatar.current_animation_frame(0), 0);
    }

    #[test]
    fn view_spans_middle_two_thirds() {
        let view = avatar().view();
        assert_eq!(view.left, 10.0);
        assert_eq!(view.right, 60.0);
        assert!((view.body_top - view.body_bottom - 2.0 * 43.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn dest_rect_flips_to_screen_space() {
        let rect = avatar().dest_rect(600);
        assert_eq!(rect, Rect::new(10, 300 - 21, 50, 43));
    }

    //--- Properties -------------------------------------------------------

    proptest! {
        #[test]
        fn position_stays_in_range(ticks in 0usize..2_000) {
            let mut avatar = avatar();
            for _ in 0..ticks {
                avatar.advance_physics();
                prop_assert!(avatar.vertical_position() >= 0.0);
                prop_assert!(avatar.vertical_position() <= avatar.floor_limit());
            }
        }

        #[test]
        fn position_stays_in_range_with_jumps(jumps in proptest::collection::vec(any::<bool>(), 0..2_000)) {
            let mut avatar = avatar();
            for jump in jumps {
                if jump {
                    avatar.jump();
                }
                avatar.advance_physics();
                prop_assert!(avatar.vertical_position() >= 0.0);
                prop_assert!(avatar.vertical_position() <= avatar.floor_limit());
            }
        }

        #[test]
        fn death_is_sticky(before in 0usize..1_500, after in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut avatar = avatar();
            for _ in 0..before {
                avatar.advance_physics();
            }
            avatar.mark_dead();
            for jump in after {
                if jump {
                    avatar.jump();
                }
                avatar.advance_physics();
                prop_assert!(avatar.is_dead());
            }
        }
    }
}
