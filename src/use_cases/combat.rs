use super::types::FrameUpdate;
use crate::domain::systems::projectiles::{self, ProjectileConfig};
use crate::domain::{
    Camera, CameraOffset, Clock, Enemy, EnemySnapshot, FrameEvent, Intent, Player,
    PlayerSnapshot, Projectile, ProjectileSnapshot, Tuning,
};
use tracing::{debug, info};

/// Owns every entity and sequences one simulation step per frame.
pub struct CombatDirector<C> {
    clock: C,
    tuning: Tuning,
    player: Player,
    enemy: Enemy,
    projectiles: Vec<Projectile>,
    camera: Camera,
    camera_offset: CameraOffset,
    next_projectile_id: u64,
    tick: u64,
    // Events raised between steps (shots) are reported with the next frame.
    pending_events: Vec<FrameEvent>,
}

impl<C: Clock> CombatDirector<C> {
    pub fn new(tuning: Tuning, clock: C) -> Self {
        let player = Player::new(tuning.player, &tuning.level, tuning.projectile.width);
        let enemy = Enemy::new(tuning.enemy, &tuning.level);
        let camera = Camera::new(&tuning.level, &tuning.player);
        let camera_offset = camera.update(player.x(), player.y());

        Self {
            clock,
            tuning,
            player,
            enemy,
            projectiles: Vec::new(),
            camera,
            camera_offset,
            next_projectile_id: 1,
            tick: 0,
            pending_events: Vec::new(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn camera(&self) -> CameraOffset {
        self.camera_offset
    }

    /// Forwards an intent to the player and queues any projectile it fires.
    /// `Quit` is a session concern and leaves the simulation untouched.
    pub fn apply_intent(&mut self, intent: Intent) {
        let Some(shot) = self.player.apply_intent(intent) else {
            return;
        };

        let id = self.next_projectile_id;
        self.next_projectile_id = self.next_projectile_id.wrapping_add(1);
        let projectile = Projectile::new(id, shot.x, shot.y, shot.facing, &self.tuning.projectile);
        debug!(projectile_id = id, x = shot.x, y = shot.y, "projectile fired");
        self.pending_events.push(FrameEvent::ProjectileFired {
            projectile_id: id,
            direction: projectile.direction,
        });
        self.projectiles.push(projectile);
    }

    pub fn reset_player_health(&mut self) {
        self.player.reset_health();
        info!(hp = self.player.health(), "player health reset");
    }

    /// Runs one frame: player, enemy, sprite release, projectiles, camera, in that order.
    pub fn step(&mut self) -> FrameUpdate {
        self.tick += 1;
        let mut events = std::mem::take(&mut self.pending_events);

        // Contact is resolved against the enemy's collider from before it moves.
        let enemy_collider = self.enemy.collider();
        let outcome = self.player.tick(enemy_collider, &self.clock);
        if outcome.damage_taken > 0 {
            let health = self.player.health();
            info!(tick = self.tick, hp = health, "player damaged");
            events.push(FrameEvent::PlayerDamaged {
                amount: outcome.damage_taken,
                health,
            });
            if self.player.is_defeated() {
                info!(tick = self.tick, "player defeated");
                events.push(FrameEvent::PlayerDefeated);
            }
        }

        self.enemy.tick();

        if self.enemy.release_sprite() {
            debug!(tick = self.tick, "enemy sprite released");
            events.push(FrameEvent::EnemySpriteReleased);
        }

        projectiles::tick_projectiles(
            &mut self.projectiles,
            &mut self.enemy,
            ProjectileConfig {
                level_width: self.tuning.level.width,
                damage: self.tuning.projectile.damage,
            },
            &mut events,
        );

        self.camera_offset = self.camera.update(self.player.x(), self.player.y());

        FrameUpdate {
            tick: self.tick,
            now_ms: self.clock.now_millis(),
            player: PlayerSnapshot::from(&self.player),
            enemy: EnemySnapshot::from(&self.enemy),
            projectiles: self
                .projectiles
                .iter()
                .map(ProjectileSnapshot::from)
                .collect(),
            camera: self.camera_offset,
            events,
        }
    }
}
