// Facts produced by a simulation step, in the order they happened.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    ProjectileFired { projectile_id: u64, direction: i32 },
    PlayerDamaged { amount: i32, health: i32 },
    PlayerDefeated,
    EnemyHit { projectile_id: u64, health: i32 },
    EnemyDefeated,
    /// The presentation layer may free the enemy's sprite. Emitted at most once.
    EnemySpriteReleased,
    ProjectileExpired { projectile_id: u64 },
}
