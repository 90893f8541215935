// Gameplay tuning, kept separate from runtime settings (tick rate, channel sizes).

pub mod enemy;
pub mod level;
pub mod player;
pub mod projectile;

pub use enemy::EnemyTuning;
pub use level::LevelTuning;
pub use player::PlayerTuning;
pub use projectile::ProjectileTuning;

use crate::domain::errors::TuningError;
use serde::Deserialize;

/// All gameplay constants for one session.
///
/// Every section defaults independently, so a tuning file only has to name the values it changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub level: LevelTuning,
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub projectile: ProjectileTuning,
}

impl Tuning {
    /// Rejects sizes and rates the simulation cannot run with.
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive: [(&'static str, i64); 13] = [
            ("level.width", self.level.width.into()),
            ("level.height", self.level.height.into()),
            ("level.screen_width", self.level.screen_width.into()),
            ("level.screen_height", self.level.screen_height.into()),
            ("player.width", self.player.width.into()),
            ("player.height", self.player.height.into()),
            ("player.step", self.player.step.into()),
            ("player.max_health", self.player.max_health.into()),
            ("enemy.width", self.enemy.width.into()),
            ("enemy.height", self.enemy.height.into()),
            ("enemy.max_health", self.enemy.max_health.into()),
            ("projectile.width", self.projectile.width.into()),
            ("projectile.speed", self.projectile.speed.into()),
        ];
        if let Some(&(field, value)) = positive.iter().find(|(_, value)| *value <= 0) {
            return Err(TuningError::NonPositive { field, value });
        }

        // The camera ceiling is level minus viewport; it must not go negative.
        let level = &self.level;
        if level.screen_width > level.width || level.screen_height > level.height {
            return Err(TuningError::ViewportExceedsLevel {
                screen_width: level.screen_width,
                screen_height: level.screen_height,
                level_width: level.width,
                level_height: level.height,
            });
        }

        Ok(())
    }
}
