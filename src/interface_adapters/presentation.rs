// Sprite frame selection for the presentation layer. Purely a function of wall-clock time.

use crate::domain::AnimationState;

/// How long each sprite frame stays on screen.
pub const FRAME_DURATION_MS: u64 = 100;
pub const WALKING_FRAMES: u64 = 10;
pub const IDLE_FRAMES: u64 = 6;
pub const ENEMY_FRAMES: u64 = 6;

pub fn player_sprite_frame(animation: AnimationState, now_ms: u64) -> u64 {
    let frames = match animation {
        AnimationState::Walking => WALKING_FRAMES,
        AnimationState::Idle => IDLE_FRAMES,
    };
    now_ms / FRAME_DURATION_MS % frames
}

pub fn enemy_sprite_frame(now_ms: u64) -> u64 {
    now_ms / FRAME_DURATION_MS % ENEMY_FRAMES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_walking_then_frames_cycle_through_ten_clips() {
        assert_eq!(player_sprite_frame(AnimationState::Walking, 0), 0);
        assert_eq!(player_sprite_frame(AnimationState::Walking, 950), 9);
        assert_eq!(player_sprite_frame(AnimationState::Walking, 1_000), 0);
    }

    #[test]
    fn when_idle_then_frames_cycle_through_six_clips() {
        assert_eq!(player_sprite_frame(AnimationState::Idle, 599), 5);
        assert_eq!(player_sprite_frame(AnimationState::Idle, 600), 0);
        assert_eq!(enemy_sprite_frame(1_250), 0);
    }
}
