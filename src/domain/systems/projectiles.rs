use crate::domain::enemy::Enemy;
use crate::domain::events::FrameEvent;
use crate::domain::geometry::intersects;
use crate::domain::projectile::Projectile;
use tracing::{debug, info, trace};

#[derive(Debug, Clone, Copy)]
pub struct ProjectileConfig {
    pub level_width: i32,
    pub damage: i32,
}

/// Advances every live projectile once and resolves hits against the enemy.
///
/// One filter pass in collection order: a projectile that hits is consumed before the
/// off-level check runs for it, so it is never reported twice.
pub fn tick_projectiles(
    projectiles: &mut Vec<Projectile>,
    enemy: &mut Enemy,
    cfg: ProjectileConfig,
    events: &mut Vec<FrameEvent>,
) {
    projectiles.retain_mut(|p| {
        p.advance();

        if !enemy.is_dead() && intersects(p.collider(), enemy.collider()) {
            let health = enemy.take_damage(cfg.damage);
            debug!(projectile_id = p.id, enemy_hp = health, "enemy hit");
            events.push(FrameEvent::EnemyHit {
                projectile_id: p.id,
                health,
            });
            if enemy.is_dead() {
                info!(projectile_id = p.id, "enemy defeated");
                events.push(FrameEvent::EnemyDefeated);
            }
            return false;
        }

        if p.is_out_of_level(cfg.level_width) {
            trace!(projectile_id = p.id, x = p.x, "projectile expired");
            events.push(FrameEvent::ProjectileExpired { projectile_id: p.id });
            return false;
        }

        true
    });
}
