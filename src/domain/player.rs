use crate::domain::geometry::{Rect, intersects};
use crate::domain::ports::Clock;
use crate::domain::state::{AnimationState, Facing, Intent, PlayerSnapshot};
use crate::domain::systems::movement::step_axis;
use crate::domain::tuning::{LevelTuning, PlayerTuning};

/// Where and which way a fire intent launches a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub x: i32,
    pub y: i32,
    pub facing: Facing,
}

/// Result of one movement tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStep {
    pub blocked_x: bool,
    pub blocked_y: bool,
    /// Health actually lost this tick (0 when the cooldown gated the contact).
    pub damage_taken: i32,
}

#[derive(Debug, Clone)]
pub struct Player {
    x: i32,
    y: i32,
    vx: i32,
    vy: i32,
    health: i32,
    animation: AnimationState,
    facing: Facing,

    // Held move keys; a second press without a release is a key repeat and is ignored.
    left_held: bool,
    right_held: bool,

    // None until the first contact, so the first hit is never gated.
    last_damage_at: Option<u64>,

    tuning: PlayerTuning,
    level_width: i32,
    level_height: i32,
    // Needed to place leftward shots flush with the sprite's left edge.
    projectile_width: i32,
}

impl Player {
    pub fn new(tuning: PlayerTuning, level: &LevelTuning, projectile_width: i32) -> Self {
        Self {
            x: tuning.spawn_x,
            y: tuning.spawn_y,
            vx: 0,
            vy: 0,
            health: tuning.max_health,
            animation: AnimationState::Idle,
            facing: Facing::Right,
            left_held: false,
            right_held: false,
            last_damage_at: None,
            tuning,
            level_width: level.width,
            level_height: level.height,
            projectile_width,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn velocity(&self) -> (i32, i32) {
        (self.vx, self.vy)
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn animation(&self) -> AnimationState {
        self.animation
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Health is floored at 0; a defeated player keeps moving and firing.
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    pub fn collider(&self) -> Rect {
        Rect::new(self.x, self.y, self.tuning.width, self.tuning.height)
    }

    /// Applies one edge-triggered intent. Returns a shot for `Fire`.
    pub fn apply_intent(&mut self, intent: Intent) -> Option<Shot> {
        let step = self.tuning.step;
        match intent {
            Intent::MoveLeftStart => {
                if self.left_held {
                    return None;
                }
                self.left_held = true;
                self.vx -= step;
                self.facing = Facing::Left;
            }
            Intent::MoveLeftStop => {
                if !self.left_held {
                    return None;
                }
                self.left_held = false;
                self.vx += step;
            }
            Intent::MoveRightStart => {
                if self.right_held {
                    return None;
                }
                self.right_held = true;
                self.vx += step;
                self.facing = Facing::Right;
            }
            Intent::MoveRightStop => {
                if !self.right_held {
                    return None;
                }
                self.right_held = false;
                self.vx -= step;
            }
            Intent::Fire => return Some(self.shot()),
            Intent::Quit => return None,
        }

        self.animation = if self.vx != 0 {
            AnimationState::Walking
        } else {
            AnimationState::Idle
        };
        None
    }

    fn shot(&self) -> Shot {
        let x = match self.facing {
            Facing::Right => self.x + self.tuning.width,
            Facing::Left => self.x - self.projectile_width,
        };
        Shot {
            x,
            y: self.y + self.tuning.muzzle_offset_y,
            facing: self.facing,
        }
    }

    /// Moves one tick, axis by axis. Each axis is rolled back if it leaves the level, then
    /// rolled back again if it ends up overlapping the enemy, which also deals contact damage.
    pub fn tick<C: Clock + ?Sized>(&mut self, enemy_collider: Rect, clock: &C) -> PlayerStep {
        let mut step = PlayerStep::default();

        let before_x = self.x;
        self.x = step_axis(self.x, self.vx, self.tuning.width, self.level_width);
        if intersects(self.collider(), enemy_collider) {
            self.x = before_x;
            step.blocked_x = true;
            step.damage_taken += self.contact(clock.now_millis());
        }

        let before_y = self.y;
        self.y = step_axis(self.y, self.vy, self.tuning.height, self.level_height);
        if intersects(self.collider(), enemy_collider) {
            self.y = before_y;
            step.blocked_y = true;
            step.damage_taken += self.contact(clock.now_millis());
        }

        step
    }

    fn contact(&mut self, now: u64) -> i32 {
        let cooling_down = self
            .last_damage_at
            .is_some_and(|last| now.saturating_sub(last) < self.tuning.contact_cooldown_ms);
        if cooling_down {
            return 0;
        }

        let before = self.health;
        self.health = (self.health - self.tuning.contact_damage).max(0);
        self.last_damage_at = Some(now);
        before - self.health
    }

    /// Restores full health and forgets the last contact.
    pub fn reset_health(&mut self) {
        self.health = self.tuning.max_health;
        self.last_damage_at = None;
    }
}

impl From<&Player> for PlayerSnapshot {
    fn from(p: &Player) -> Self {
        Self {
            x: p.x,
            y: p.y,
            health: p.health,
            defeated: p.is_defeated(),
            animation: p.animation,
            facing: p.facing,
            collider: p.collider(),
        }
    }
}
