use crate::domain::state::CameraOffset;
use crate::domain::tuning::{LevelTuning, PlayerTuning};

/// Viewport that follows the player. Stateless: every update is computed from scratch.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    viewport_width: i32,
    viewport_height: i32,
    level_width: i32,
    level_height: i32,
    target_width: i32,
    target_height: i32,
}

impl Camera {
    pub fn new(level: &LevelTuning, player: &PlayerTuning) -> Self {
        Self {
            viewport_width: level.screen_width,
            viewport_height: level.screen_height,
            level_width: level.width,
            level_height: level.height,
            target_width: player.width,
            target_height: player.height,
        }
    }

    /// Centers the viewport on the player's box, then clamps each axis into the level.
    pub fn update(&self, player_x: i32, player_y: i32) -> CameraOffset {
        let x = player_x + self.target_width / 2 - self.viewport_width / 2;
        let y = player_y + self.target_height / 2 - self.viewport_height / 2;
        CameraOffset {
            x: x.max(0).min(self.level_width - self.viewport_width),
            y: y.max(0).min(self.level_height - self.viewport_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(&LevelTuning::default(), &PlayerTuning::default())
    }

    #[test]
    fn when_player_is_near_left_edge_then_camera_clamps_to_zero() {
        assert_eq!(camera().update(30, 800), CameraOffset { x: 0, y: 0 });
    }

    #[test]
    fn when_player_is_mid_level_then_camera_centers_on_player() {
        // 600 + 40 - 425
        assert_eq!(camera().update(600, 800).x, 215);
    }

    #[test]
    fn when_player_is_near_right_edge_then_camera_clamps_to_level_minus_viewport() {
        assert_eq!(camera().update(1200, 800).x, 430);
    }

    #[test]
    fn when_viewport_matches_level_height_then_vertical_offset_is_always_zero() {
        let cam = camera();

        assert_eq!(cam.update(600, 0).y, 0);
        assert_eq!(cam.update(600, 880).y, 0);
    }
}
