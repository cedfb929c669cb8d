use crate::crossword::{RankingStrategy, DEFAULT_BOARD_SIZE, DEFAULT_TIMEOUT_SECS};
use crate::error::{CrosswordError, Result};
use crate::utils::serialization;
use serde::{Deserialize, Serialize};
use std::{env, path::Path, str::FromStr, time::Duration};

const ENV_BOARD_SIZE: &str = "CROSSWORD_BOARD_SIZE";
const ENV_TIMEOUT_SECS: &str = "CROSSWORD_TIMEOUT_SECS";
const ENV_SEED: &str = "CROSSWORD_SEED";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Edge length of the square board
    pub board_size: usize,
    /// Wall-clock budget for the search
    pub timeout_secs: f64,
    /// Seed for word shuffling and tie-breaking. Drawn at random when absent
    pub seed: Option<u64>,
    pub ranking: RankingStrategy,
    /// Words accepted as crossing words on top of the puzzle's own words
    pub extra_words: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            seed: None,
            ranking: RankingStrategy::default(),
            extra_words: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        serialization::load_from_disk(path)
    }

    /// Applies `CROSSWORD_*` environment overrides on top of `self`
    pub fn with_env(mut self) -> Result<Self> {
        if let Some(size) = env_value::<usize>(ENV_BOARD_SIZE)? {
            self.board_size = size;
        }
        if let Some(timeout) = env_value::<f64>(ENV_TIMEOUT_SECS)? {
            self.timeout_secs = timeout;
        }
        if let Some(seed) = env_value::<u64>(ENV_SEED)? {
            self.seed = Some(seed);
        }
        Ok(self)
    }

    pub fn from_env() -> Result<Self> {
        Self::default().with_env()
    }

    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(CrosswordError::InvalidConfiguration(
                "board size must be positive".to_string(),
            ));
        }
        if !self.timeout_secs.is_finite() || self.timeout_secs < 0.0 {
            return Err(CrosswordError::InvalidConfiguration(format!(
                "timeout must be a non-negative number of seconds, got {}",
                self.timeout_secs
            )));
        }
        if Duration::try_from_secs_f64(self.timeout_secs).is_err() {
            return Err(CrosswordError::InvalidConfiguration(format!(
                "timeout of {} seconds is too large",
                self.timeout_secs
            )));
        }
        Ok(())
    }

    /// Search budget. Values too large for a `Duration` saturate instead of panicking
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout_secs.max(0.0)).unwrap_or(Duration::MAX)
    }

    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn env_value<T: FromStr>(key: &str) -> Result<Option<T>> {
    match env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw.trim().parse().map(Some).map_err(|_| {
            CrosswordError::InvalidConfiguration(format!("{key} has an invalid value: {raw}"))
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.board_size, 20);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.seed.is_none());
        assert_eq!(config.ranking, RankingStrategy::Intersections);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero = GeneratorConfig {
            board_size: 0,
            ..GeneratorConfig::default()
        };
        assert!(zero.validate().is_err());

        let negative = GeneratorConfig {
            timeout_secs: -1.0,
            ..GeneratorConfig::default()
        };
        assert!(negative.validate().is_err());

        let nan = GeneratorConfig {
            timeout_secs: f64::NAN,
            ..GeneratorConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_huge_timeout_is_rejected_not_a_panic() {
        let huge = GeneratorConfig {
            timeout_secs: 1e20,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            huge.validate(),
            Err(CrosswordError::InvalidConfiguration(_))
        ));
        assert_eq!(huge.timeout(), Duration::MAX);

        let large = GeneratorConfig {
            timeout_secs: 1e9,
            ..GeneratorConfig::default()
        };
        assert!(large.validate().is_ok());
        assert_eq!(large.timeout(), Duration::from_secs(1_000_000_000));
    }

    #[test]
    fn test_fixed_seed_is_kept() {
        let config = GeneratorConfig {
            seed: Some(99),
            ..GeneratorConfig::default()
        };
        assert_eq!(config.resolve_seed(), 99);
    }

    #[test]
    fn test_from_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "board_size": 25, "ranking": "intersections-then-center" }"#,
        )
        .unwrap();

        let config = GeneratorConfig::from_file(&path).unwrap();
        assert_eq!(config.board_size, 25);
        assert_eq!(config.ranking, RankingStrategy::IntersectionsThenCenter);
        assert_eq!(config.timeout_secs, 30.0);
    }

    #[test]
    fn test_from_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let result = GeneratorConfig::from_file(temp_dir.path().join("nope.json"));
        assert!(matches!(result, Err(CrosswordError::ReadFile { .. })));
    }

    // All environment cases live in one test so parallel tests never race on the variables
    #[test]
    fn test_env_overrides() {
        env::set_var(ENV_BOARD_SIZE, "12");
        env::set_var(ENV_TIMEOUT_SECS, "2.5");
        env::set_var(ENV_SEED, "7");
        let config = GeneratorConfig::from_env().unwrap();
        assert_eq!(config.board_size, 12);
        assert_eq!(config.timeout(), Duration::from_millis(2500));
        assert_eq!(config.seed, Some(7));

        env::set_var(ENV_BOARD_SIZE, "twelve");
        assert!(GeneratorConfig::from_env().is_err());

        env::remove_var(ENV_BOARD_SIZE);
        env::remove_var(ENV_TIMEOUT_SECS);
        env::remove_var(ENV_SEED);
        assert_eq!(GeneratorConfig::from_env().unwrap(), GeneratorConfig::default());
    }
}
