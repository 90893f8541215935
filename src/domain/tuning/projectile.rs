// Gameplay tuning for projectiles.
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    /// Hitbox size in pixels.
    pub width: i32,
    pub height: i32,

    /// Horizontal speed in pixels per tick.
    pub speed: i32,

    /// Health removed from the enemy per hit.
    pub damage: i32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            width: 20,
            height: 10,
            speed: 15,
            damage: 10,
        }
    }
}
