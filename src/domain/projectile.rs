use crate::domain::geometry::Rect;
use crate::domain::state::{Facing, ProjectileSnapshot};
use crate::domain::tuning::ProjectileTuning;

/// A player-fired hitbox travelling horizontally at a fixed speed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projectile {
    pub id: u64,
    pub x: i32,
    pub y: i32,
    // +1 rightward, -1 leftward; fixed for the projectile's lifetime.
    pub direction: i32,
    pub vx: i32,
    pub width: i32,
    pub height: i32,
}

impl Projectile {
    pub fn new(id: u64, x: i32, y: i32, facing: Facing, tuning: &ProjectileTuning) -> Self {
        let direction = facing.sign();
        Self {
            id,
            x,
            y,
            direction,
            vx: direction * tuning.speed,
            width: tuning.width,
            height: tuning.height,
        }
    }

    pub fn advance(&mut self) {
        self.x += self.vx;
    }

    pub fn collider(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Projectiles live while `0 <= x <= level_width`.
    pub fn is_out_of_level(&self, level_width: i32) -> bool {
        self.x < 0 || self.x > level_width
    }
}

impl From<&Projectile> for ProjectileSnapshot {
    fn from(p: &Projectile) -> Self {
        Self {
            id: p.id,
            x: p.x,
            y: p.y,
            direction: p.direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_fired_right_then_x_strictly_increases_until_it_leaves_the_level() {
        let tuning = ProjectileTuning::default();
        let mut p = Projectile::new(1, 0, 885, Facing::Right, &tuning);
        assert!(!p.is_out_of_level(1280));

        let mut last_x = p.x;
        let mut ticks = 0;
        while !p.is_out_of_level(1280) {
            p.advance();
            assert!(p.x > last_x);
            last_x = p.x;
            ticks += 1;
        }

        // 15 px/tick from 0: x = 1290 is the first position past 1280.
        assert_eq!(ticks, 86);
        assert_eq!(p.x, 1290);
        assert_eq!(p.y, 885);
    }

    #[test]
    fn when_fired_left_then_velocity_is_negative() {
        let p = Projectile::new(7, 100, 0, Facing::Left, &ProjectileTuning::default());

        assert_eq!(p.direction, -1);
        assert_eq!(p.vx, -15);
    }

    #[test]
    fn when_exactly_on_level_edges_then_still_inside() {
        let tuning = ProjectileTuning::default();

        assert!(!Projectile::new(1, 0, 0, Facing::Right, &tuning).is_out_of_level(1280));
        assert!(!Projectile::new(2, 1280, 0, Facing::Right, &tuning).is_out_of_level(1280));
        assert!(Projectile::new(3, -1, 0, Facing::Left, &tuning).is_out_of_level(1280));
        assert!(Projectile::new(4, 1281, 0, Facing::Right, &tuning).is_out_of_level(1280));
    }
}
