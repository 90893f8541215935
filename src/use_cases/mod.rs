// Use cases layer: per-frame orchestration and the loop that drives it.

pub mod combat;
pub mod game;
pub mod types;

pub use combat::CombatDirector;
pub use game::{LoopSettings, world_task};
pub use types::{FrameUpdate, GameEvent};
