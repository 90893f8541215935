// Domain-level errors. Simulation steps are total; only tuning can be rejected.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TuningError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: i64 },
    #[error("screen {screen_width}x{screen_height} does not fit in level {level_width}x{level_height}")]
    ViewportExceedsLevel {
        screen_width: i32,
        screen_height: i32,
        level_width: i32,
        level_height: i32,
    },
}
