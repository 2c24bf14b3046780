use std::env;

use crate::domain::rules::MIN_PLAYERS;
use crate::error::AppError;

const DEFAULT_BROADCAST_CAPACITY: usize = 256;

/// Engine settings, read from the environment.
///
/// | Variable | Default | Meaning |
/// |---|---|---|
/// | `JUDGMENT_RNG_SEED` | unset | seed for reproducible shuffles |
/// | `JUDGMENT_MIN_PLAYERS` | `2` | players required by `startGame` |
/// | `JUDGMENT_BROADCAST_CAPACITY` | `256` | per-table notification buffer |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub rng_seed: Option<u64>,
    pub min_players: usize,
    pub broadcast_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            min_players: MIN_PLAYERS,
            broadcast_capacity: DEFAULT_BROADCAST_CAPACITY,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let rng_seed = optional_var::<u64>("JUDGMENT_RNG_SEED")?;
        let min_players = optional_var::<usize>("JUDGMENT_MIN_PLAYERS")?
            .unwrap_or(defaults.min_players);
        if min_players < MIN_PLAYERS {
            return Err(AppError::config(format!(
                "JUDGMENT_MIN_PLAYERS must be at least {MIN_PLAYERS}, got {min_players}"
            )));
        }
        let broadcast_capacity = optional_var::<usize>("JUDGMENT_BROADCAST_CAPACITY")?
            .unwrap_or(defaults.broadcast_capacity);
        if broadcast_capacity == 0 {
            return Err(AppError::config(
                "JUDGMENT_BROADCAST_CAPACITY must be greater than zero",
            ));
        }

        Ok(Self {
            rng_seed,
            min_players,
            broadcast_capacity,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

/// Parse an optional environment variable; unset and empty both mean `None`.
fn optional_var<T>(key: &str) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::config(format!("{key} is invalid ({raw:?}): {e}"))),
        Err(_) => Ok(None),
    }
}
