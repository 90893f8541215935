// Gameplay tuning for the enemy.
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    /// Collider size in pixels.
    pub width: i32,
    pub height: i32,

    pub max_health: i32,

    pub spawn_x: i32,
    pub spawn_y: i32,

    /// Collider offset from the sprite's top-left corner.
    pub collider_offset_x: i32,
    pub collider_offset_y: i32,

    /// Per-tick drift. Nothing steers the enemy, so this stays at rest unless tuned.
    pub velocity_x: i32,
    pub velocity_y: i32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            max_health: 50,
            spawn_x: 900,
            spawn_y: 800,
            collider_offset_x: 0,
            collider_offset_y: 70,
            velocity_x: 0,
            velocity_y: 0,
        }
    }
}
