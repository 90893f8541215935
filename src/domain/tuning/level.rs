// Fixed world and viewport dimensions.
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LevelTuning {
    /// Level size in pixels; bounds the player and projectiles.
    pub width: i32,
    pub height: i32,

    /// Visible screen size. Doubles as the camera viewport and the enemy's movement bound.
    pub screen_width: i32,
    pub screen_height: i32,
}

impl Default for LevelTuning {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 960,
            screen_width: 850,
            screen_height: 960,
        }
    }
}
