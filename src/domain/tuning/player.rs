// Gameplay tuning for the player-controlled brawler.
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Bounding box size in pixels.
    pub width: i32,
    pub height: i32,

    /// Horizontal velocity added or removed by one move key edge, in pixels per tick.
    pub step: i32,

    pub max_health: i32,

    pub spawn_x: i32,
    pub spawn_y: i32,

    /// Health lost when walking into the enemy.
    pub contact_damage: i32,

    /// Minimum time between two contact damage events.
    pub contact_cooldown_ms: u64,

    /// Vertical offset of a fired projectile from the top of the sprite.
    pub muzzle_offset_y: i32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            width: 80,
            height: 80,
            step: 10,
            max_health: 100,
            spawn_x: 30,
            spawn_y: 800,
            contact_damage: 25,
            contact_cooldown_ms: 3000,
            muzzle_offset_y: 85,
        }
    }
}
