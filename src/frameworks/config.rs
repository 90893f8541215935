use crate::domain::{Tuning, TuningError};
use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

// Runtime constants (not gameplay tuning).

pub const INTENT_CHANNEL_CAPACITY: usize = 1024;
pub const FRAME_BROADCAST_CAPACITY: usize = 128;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Frame interval; `BRAWL_TICK_MS` overrides it. Zero or garbage falls back to the default.
pub fn tick_interval() -> Duration {
    env::var("BRAWL_TICK_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|&ms| ms > 0)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TICK_INTERVAL)
}

/// Optional step limit from `BRAWL_MAX_TICKS` (0 or unset runs until Quit).
pub fn max_ticks() -> Option<u64> {
    env::var("BRAWL_MAX_TICKS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|&n| n > 0)
}

pub fn tuning_path() -> Option<PathBuf> {
    env::var_os("BRAWL_TUNING_PATH")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tuning file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid tuning: {0}")]
    Invalid(#[from] TuningError),
}

/// Parses a TOML tuning document. Missing sections and fields keep their defaults.
pub fn parse_tuning(text: &str) -> Result<Tuning, ConfigError> {
    let tuning: Tuning = toml::from_str(text)?;
    tuning.validate()?;
    Ok(tuning)
}

pub fn load_tuning(path: &Path) -> Result<Tuning, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tuning(&text)
}

/// Tuning from `BRAWL_TUNING_PATH` when set, defaults otherwise.
pub fn tuning() -> Result<Tuning, ConfigError> {
    match tuning_path() {
        Some(path) => load_tuning(&path),
        None => Ok(Tuning::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_document_is_empty_then_defaults_are_used() {
        let tuning = parse_tuning("").expect("empty document is valid");

        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn when_document_overrides_some_fields_then_the_rest_keep_defaults() {
        let tuning = parse_tuning(
            r#"
            [player]
            step = 6
            contact_cooldown_ms = 1500

            [projectile]
            damage = 25
            "#,
        )
        .expect("partial document is valid");

        assert_eq!(tuning.player.step, 6);
        assert_eq!(tuning.player.contact_cooldown_ms, 1500);
        assert_eq!(tuning.player.max_health, 100);
        assert_eq!(tuning.projectile.damage, 25);
        assert_eq!(tuning.projectile.speed, 15);
        assert_eq!(tuning.level.width, 1280);
    }

    #[test]
    fn when_document_is_malformed_then_parse_error_is_returned() {
        let result = parse_tuning("[player\nstep = 6");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn when_values_are_invalid_then_validation_error_is_returned() {
        let result = parse_tuning("[level]\nscreen_height = 1200");

        assert!(matches!(
            result,
            Err(ConfigError::Invalid(TuningError::ViewportExceedsLevel { .. }))
        ));
    }

    #[test]
    fn when_file_is_missing_then_io_error_names_the_path() {
        let path = Path::new("/nonexistent/brawl-tuning.toml");

        let err = load_tuning(path).expect_err("missing file should fail");

        assert!(err.to_string().contains("brawl-tuning.toml"));
    }
}
