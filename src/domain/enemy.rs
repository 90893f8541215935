use crate::domain::geometry::Rect;
use crate::domain::state::EnemySnapshot;
use crate::domain::systems::movement::step_axis;
use crate::domain::tuning::{EnemyTuning, LevelTuning};

/// The single enemy. Death is logical: the enemy stays in place with an empty collider.
#[derive(Debug, Clone)]
pub struct Enemy {
    x: i32,
    y: i32,
    vx: i32,
    vy: i32,
    health: i32,
    sprite_released: bool,

    tuning: EnemyTuning,
    // Movement is bounded by the visible screen, not the level.
    bound_width: i32,
    bound_height: i32,
}

impl Enemy {
    pub fn new(tuning: EnemyTuning, level: &LevelTuning) -> Self {
        Self {
            x: tuning.spawn_x,
            y: tuning.spawn_y,
            vx: tuning.velocity_x,
            vy: tuning.velocity_y,
            health: tuning.max_health,
            sprite_released: false,
            tuning,
            bound_width: level.screen_width,
            bound_height: level.screen_height,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Applies drift velocity, reverting each axis that would leave the screen rectangle.
    pub fn tick(&mut self) {
        self.x = step_axis(self.x, self.vx, self.tuning.width, self.bound_width);
        self.y = step_axis(self.y, self.vy, self.tuning.height, self.bound_height);
    }

    /// Returns the remaining health, floored at 0.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.health = (self.health - amount).max(0);
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn collider(&self) -> Rect {
        if self.is_dead() {
            return Rect::ZERO;
        }
        Rect::new(
            self.x + self.tuning.collider_offset_x,
            self.y + self.tuning.collider_offset_y,
            self.tuning.width,
            self.tuning.height,
        )
    }

    /// Marks the sprite as released. Returns true only the first time it is called on a
    /// dead enemy; later calls, and calls while alive, do nothing.
    pub fn release_sprite(&mut self) -> bool {
        if !self.is_dead() || self.sprite_released {
            return false;
        }
        self.sprite_released = true;
        true
    }

    pub fn sprite_released(&self) -> bool {
        self.sprite_released
    }
}

impl From<&Enemy> for EnemySnapshot {
    fn from(e: &Enemy) -> Self {
        Self {
            x: e.x,
            y: e.y,
            health: e.health,
            dead: e.is_dead(),
            sprite_released: e.sprite_released,
            collider: e.collider(),
        }
    }
}
