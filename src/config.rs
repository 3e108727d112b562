//! Runtime settings for the terminal binary, read from the environment.
//!
//! | variable         | default                |
//! |------------------|------------------------|
//! | `TETRIS_SEED`    | derived from the clock |
//! | `TETRIS_STEP_MS` | 500                    |
//! | `TETRIS_LOG`     | `info`                 |
//! | `TETRIS_LOG_DIR` | unset (no log file)    |
//!
//! Unparsable values fall back to the default.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::GameConfig;
use crate::types::STEP_INTERVAL_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub step_ms: u64,
    /// `flexi_logger` level spec, e.g. `debug` or `info,rialo_tetris_engine=trace`
    pub log_spec: String,
    /// Where the log file goes. The terminal belongs to the renderer, so
    /// without a directory nothing is logged.
    pub log_dir: Option<PathBuf>,
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var("TETRIS_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let step_ms = var("TETRIS_STEP_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(STEP_INTERVAL_MS);

        let log_spec = var("TETRIS_LOG").unwrap_or_else(|| "info".to_string());
        let log_dir = var("TETRIS_LOG_DIR").map(PathBuf::from);

        Self {
            seed,
            step_ms,
            log_spec,
            log_dir,
        }
    }

    /// Standard 20x10 game seeded from this config
    pub fn game_config(&self) -> GameConfig {
        GameConfig::standard(self.seed)
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1);
    nanos.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_reads_all_variables() {
        let cfg = RunConfig::from_lookup(lookup(&[
            ("TETRIS_SEED", "42"),
            ("TETRIS_STEP_MS", "250"),
            ("TETRIS_LOG", "debug"),
            ("TETRIS_LOG_DIR", " /tmp/tetris "),
        ]));
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.step_ms, 250);
        assert_eq!(cfg.log_spec, "debug");
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/tmp/tetris")));
        assert_eq!(cfg.game_config().seed, 42);
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = RunConfig::from_lookup(|_| None);
        assert_eq!(cfg.step_ms, STEP_INTERVAL_MS);
        assert_eq!(cfg.log_spec, "info");
        assert_eq!(cfg.log_dir, None);
        assert_ne!(cfg.seed, 0);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let cfg = RunConfig::from_lookup(lookup(&[
            ("TETRIS_SEED", "-3"),
            ("TETRIS_STEP_MS", "0"),
            ("TETRIS_LOG_DIR", "   "),
        ]));
        assert_eq!(cfg.step_ms, STEP_INTERVAL_MS);
        assert_eq!(cfg.log_dir, None);
        assert_ne!(cfg.seed, 0);
    }
}
