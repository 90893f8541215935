// Line protocol DTOs: intents in, frames out. Both directions are one JSON object per line.

use crate::domain::{
    AnimationState, CameraOffset, EnemySnapshot, Facing, FrameEvent, Intent, PlayerSnapshot,
    ProjectileSnapshot, Rect,
};
use crate::interface_adapters::presentation::{enemy_sprite_frame, player_sprite_frame};
use crate::use_cases::{FrameUpdate, GameEvent};
use serde::{Deserialize, Serialize};

/// One input line, e.g. `{"type":"MoveLeftStart"}` or `{"type":"Fire","repeat":true}`.
#[derive(Debug, Clone, Deserialize)]
pub struct InputMessage {
    #[serde(rename = "type")]
    pub kind: InputKind,
    // Set by input sources that report OS key repeat; repeated edges are dropped.
    #[serde(default)]
    pub repeat: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum InputKind {
    MoveLeftStart,
    MoveLeftStop,
    MoveRightStart,
    MoveRightStop,
    Fire,
    Quit,
    ResetHealth,
}

impl From<InputKind> for GameEvent {
    fn from(kind: InputKind) -> Self {
        match kind {
            InputKind::MoveLeftStart => GameEvent::Intent(Intent::MoveLeftStart),
            InputKind::MoveLeftStop => GameEvent::Intent(Intent::MoveLeftStop),
            InputKind::MoveRightStart => GameEvent::Intent(Intent::MoveRightStart),
            InputKind::MoveRightStop => GameEvent::Intent(Intent::MoveRightStop),
            InputKind::Fire => GameEvent::Intent(Intent::Fire),
            InputKind::Quit => GameEvent::Intent(Intent::Quit),
            InputKind::ResetHealth => GameEvent::ResetHealth,
        }
    }
}

/// Snapshot of the simulation written after every step.
#[derive(Debug, Clone, Serialize)]
pub struct FrameDto {
    pub tick: u64,
    pub now_ms: u64,
    pub player: PlayerDto,
    pub enemy: EnemyDto,
    pub projectiles: Vec<ProjectileDto>,
    pub camera: CameraDto,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<FrameEventDto>,
}

impl From<FrameUpdate> for FrameDto {
    fn from(update: FrameUpdate) -> Self {
        let now_ms = update.now_ms;
        Self {
            tick: update.tick,
            now_ms,
            player: PlayerDto::new(&update.player, now_ms),
            enemy: EnemyDto::new(&update.enemy, now_ms),
            projectiles: update.projectiles.iter().map(ProjectileDto::from).collect(),
            camera: CameraDto::from(update.camera),
            events: update.events.iter().map(FrameEventDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RectDto {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl From<Rect> for RectDto {
    fn from(r: Rect) -> Self {
        Self {
            x: r.x,
            y: r.y,
            w: r.w,
            h: r.h,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnimationDto {
    Idle,
    Walking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FacingDto {
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerDto {
    pub x: i32,
    pub y: i32,
    pub health: i32,
    pub defeated: bool,
    pub animation: AnimationDto,
    pub facing: FacingDto,
    // Sprites face right; a left-facing player is drawn mirrored.
    pub flip: bool,
    pub sprite_frame: u64,
    pub collider: RectDto,
}

impl PlayerDto {
    fn new(player: &PlayerSnapshot, now_ms: u64) -> Self {
        Self {
            x: player.x,
            y: player.y,
            health: player.health,
            defeated: player.defeated,
            animation: match player.animation {
                AnimationState::Idle => AnimationDto::Idle,
                AnimationState::Walking => AnimationDto::Walking,
            },
            facing: match player.facing {
                Facing::Left => FacingDto::Left,
                Facing::Right => FacingDto::Right,
            },
            flip: player.facing == Facing::Left,
            sprite_frame: player_sprite_frame(player.animation, now_ms),
            collider: RectDto::from(player.collider),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyDto {
    pub x: i32,
    pub y: i32,
    pub health: i32,
    pub dead: bool,
    pub sprite_released: bool,
    pub sprite_frame: u64,
    pub collider: RectDto,
}

impl EnemyDto {
    fn new(enemy: &EnemySnapshot, now_ms: u64) -> Self {
        Self {
            x: enemy.x,
            y: enemy.y,
            health: enemy.health,
            dead: enemy.dead,
            sprite_released: enemy.sprite_released,
            sprite_frame: enemy_sprite_frame(now_ms),
            collider: RectDto::from(enemy.collider),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileDto {
    pub id: u64,
    pub x: i32,
    pub y: i32,
    pub direction: i32,
}

impl From<&ProjectileSnapshot> for ProjectileDto {
    fn from(p: &ProjectileSnapshot) -> Self {
        Self {
            id: p.id,
            x: p.x,
            y: p.y,
            direction: p.direction,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CameraDto {
    pub x: i32,
    pub y: i32,
}

impl From<CameraOffset> for CameraDto {
    fn from(c: CameraOffset) -> Self {
        Self { x: c.x, y: c.y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum FrameEventDto {
    ProjectileFired { projectile_id: u64, direction: i32 },
    PlayerDamaged { amount: i32, health: i32 },
    PlayerDefeated,
    EnemyHit { projectile_id: u64, health: i32 },
    EnemyDefeated,
    EnemySpriteReleased,
    ProjectileExpired { projectile_id: u64 },
}

impl From<&FrameEvent> for FrameEventDto {
    fn from(event: &FrameEvent) -> Self {
        match *event {
            FrameEvent::ProjectileFired {
                projectile_id,
                direction,
            } => FrameEventDto::ProjectileFired {
                projectile_id,
                direction,
            },
            FrameEvent::PlayerDamaged { amount, health } => {
                FrameEventDto::PlayerDamaged { amount, health }
            }
            FrameEvent::PlayerDefeated => FrameEventDto::PlayerDefeated,
            FrameEvent::EnemyHit {
                projectile_id,
                health,
            } => FrameEventDto::EnemyHit {
                projectile_id,
                health,
            },
            FrameEvent::EnemyDefeated => FrameEventDto::EnemyDefeated,
            FrameEvent::EnemySpriteReleased => FrameEventDto::EnemySpriteReleased,
            FrameEvent::ProjectileExpired { projectile_id } => {
                FrameEventDto::ProjectileExpired { projectile_id }
            }
        }
    }
}
