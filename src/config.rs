//! Runtime configuration read from the environment.
//!
//! Every variable is optional. A value that is missing or does not parse falls
//! back to its default without failing startup.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `BLOCKFALL_SEED` | RNG seed for piece spawns (u64) | random |
//! | `BLOCKFALL_GRAVITY_MS` | Gravity interval in ms (> 0) | 1000 |
//! | `BLOCKFALL_LOG_PATH` | File to write logs to | none (logging off) |

use std::env;

use crate::types::DROP_INTERVAL_MS;

pub const SEED_VAR: &str = "BLOCKFALL_SEED";
pub const GRAVITY_VAR: &str = "BLOCKFALL_GRAVITY_MS";
pub const LOG_PATH_VAR: &str = "BLOCKFALL_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u64,
    pub gravity_ms: u32,
    /// The terminal is in raw mode while playing, so logs only go to a file.
    pub log_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: rand::random(),
            gravity_ms: DROP_INTERVAL_MS,
            log_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the process environment in
    /// production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_VAR)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(rand::random);

        let gravity_ms = lookup(GRAVITY_VAR)
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(DROP_INTERVAL_MS);

        let log_path = lookup(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            gravity_ms,
            log_path,
        }
    }
}
