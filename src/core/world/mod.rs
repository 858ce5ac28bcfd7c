//=========================================================================
// World
//=========================================================================
//
// Simulation entities of the flight scene.
//
// Components:
// - `avatar`: the falling/jumping player entity (core thread only)
// - `obstacle`: one scrolling pipe
// - `obstacle_field`: live pipes plus the background spawner
//
// The avatar and the field never reference each other. Collision queries
// receive an `AvatarView` by value.
//
//=========================================================================

//=== Module Declarations =================================================

mod avatar;
mod obstacle;
mod obstacle_field;

//=== Public API ==========================================================

pub use avatar::{Avatar, AvatarView};
pub use obstacle::Obstacle;
pub use obstacle_field::ObstacleField;
