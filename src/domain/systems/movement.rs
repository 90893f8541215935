/// Advances one axis by `velocity`, reverting the step when the box `[pos, pos + size)`
/// would leave `[0, limit)`.
///
/// This is clamp-by-rollback: a blocked entity stays where it was instead of being
/// pushed flush against the boundary.
pub fn step_axis(pos: i32, velocity: i32, size: i32, limit: i32) -> i32 {
    let next = pos + velocity;
    if next < 0 || next + size > limit {
        pos
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_step_stays_inside_then_position_advances() {
        assert_eq!(step_axis(30, 10, 80, 1280), 40);
        assert_eq!(step_axis(30, -10, 80, 1280), 20);
    }

    #[test]
    fn when_step_would_go_negative_then_position_is_unchanged() {
        assert_eq!(step_axis(0, -10, 80, 1280), 0);
        // Rollback, not saturation: 5 - 10 does not land on 0.
        assert_eq!(step_axis(5, -10, 80, 1280), 5);
    }

    #[test]
    fn when_box_would_cross_far_edge_then_position_is_unchanged() {
        assert_eq!(step_axis(1200, 10, 80, 1280), 1200);
        assert_eq!(step_axis(1190, 10, 80, 1280), 1200);
    }

    #[test]
    fn when_already_outside_limit_then_zero_velocity_keeps_position() {
        assert_eq!(step_axis(900, 0, 20, 850), 900);
    }
}
