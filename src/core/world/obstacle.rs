//=========================================================================
// Obstacle
//=========================================================================
//
// One scrolling pipe. Shape is fixed at spawn; only the horizontal
// position changes, and only by scrolling left.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::AvatarView;
use crate::core::render::{Flip, Rect};

//=== Obstacle ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    horizontal_position: i32,
    width: i32,
    height: i32,
    inverted: bool,
}

impl Obstacle {
    /// Creates an obstacle. `inverted` obstacles hang from the top of the
    /// arena; the others rise from the floor.
    pub fn new(horizontal_position: i32, width: i32, height: i32, inverted: bool) -> Self {
        Self {
            horizontal_position,
            width,
            height,
            inverted,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn horizontal_position(&self) -> i32 {
        self.horizontal_position
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn inverted(&self) -> bool {
        self.inverted
    }

    /// `true` once the right edge has left the arena.
    pub fn is_off_screen(&self) -> bool {
        self.horizontal_position + self.width <= 0
    }

    //--- Simulation -------------------------------------------------------

    pub(crate) fn advance(&mut self, speed: i32) {
        self.horizontal_position -= speed;
    }

    /// Axis-aligned overlap test against the avatar body.
    pub fn collides_with(&self, avatar: &AvatarView, arena_height: i32) -> bool {
        let left = f64::from(self.horizontal_position);
        let right = f64::from(self.horizontal_position + self.width);

        if avatar.right <= left || avatar.left >= right {
            return false;
        }

        if self.inverted {
            avatar.body_top > f64::from(arena_height - self.height)
        } else {
            avatar.body_bottom < f64::from(self.height)
        }
    }

    //--- Presentation -----------------------------------------------------

    /// Screen-space destination and mirroring of the pipe sprite.
    pub fn placement(&self, arena_height: i32) -> (Rect, Flip) {
        if self.inverted {
            (
                Rect::new(self.horizontal_position, 0, self.width, self.height),
                Flip::Vertical,
            )
        } else {
            (
                Rect::new(self.horizontal_position, arena_height - self.height, self.width, self.height),
                Flip::None,
            )
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
