// Use-case level inputs/outputs for the frame loop.

use crate::domain::{
    CameraOffset, EnemySnapshot, FrameEvent, Intent, PlayerSnapshot, ProjectileSnapshot,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Intent(Intent),
    ResetHealth,
}

/// Everything the presentation layer reads after one step. Owned copies, never live state.
#[derive(Debug, Clone)]
pub struct FrameUpdate {
    pub tick: u64,
    pub now_ms: u64,
    pub player: PlayerSnapshot,
    pub enemy: EnemySnapshot,
    pub projectiles: Vec<ProjectileSnapshot>,
    pub camera: CameraOffset,
    pub events: Vec<FrameEvent>,
}
