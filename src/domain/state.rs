// Domain-level intents, entity poses and snapshot types.

use crate::domain::geometry::Rect;

/// Edge-triggered player intents delivered by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveLeftStart,
    MoveLeftStop,
    MoveRightStart,
    MoveRightStop,
    Fire,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Horizontal sign of this direction (+1 right, -1 left).
    pub const fn sign(self) -> i32 {
        match self {
            Facing::Left => -1,
            Facing::Right => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Idle,
    Walking,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub x: i32,
    pub y: i32,
    pub health: i32,
    pub defeated: bool,
    pub animation: AnimationState,
    pub facing: Facing,
    pub collider: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemySnapshot {
    pub x: i32,
    pub y: i32,
    pub health: i32,
    pub dead: bool,
    // Set once the presentation layer has been told to drop the enemy's sprite.
    pub sprite_released: bool,
    pub collider: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectileSnapshot {
    pub id: u64,
    pub x: i32,
    pub y: i32,
    pub direction: i32,
}

/// Viewport offset into the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CameraOffset {
    pub x: i32,
    pub y: i32,
}
