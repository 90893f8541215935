// Domain layer: core simulation types and rules.

pub mod camera;
pub mod enemy;
pub mod errors;
pub mod events;
pub mod geometry;
pub mod player;
pub mod ports;
pub mod projectile;
pub mod state;
pub mod systems;
pub mod tuning;

pub use camera::Camera;
pub use enemy::Enemy;
pub use errors::TuningError;
pub use events::FrameEvent;
pub use geometry::{Rect, intersects};
pub use player::{Player, PlayerStep, Shot};
pub use ports::Clock;
pub use projectile::Projectile;
pub use state::{
    AnimationState, CameraOffset, EnemySnapshot, Facing, Intent, PlayerSnapshot,
    ProjectileSnapshot,
};
pub use tuning::Tuning;
