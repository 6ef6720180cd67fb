use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parameters for generating a random matrix.
///
/// Entries are integers drawn uniformly from `[min, max)`. When `seed` is
/// set the same config always yields the same matrix.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RandomConfig {
    pub rows: usize,
    pub cols: usize,
    pub min: i64,
    pub max: i64,

    #[serde(default)]
    pub seed: Option<u64>,
}

impl RandomConfig {
    pub fn new(rows: usize, cols: usize, min: i64, max: i64) -> Self {
        Self {
            rows,
            cols,
            min,
            max,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self::new(3, 3, 0, 10)
    }
}

/// Load a [`RandomConfig`] from a JSON file.
pub fn load_random_config<P: AsRef<Path>>(path: P) -> Result<RandomConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read random config: {}", path.display()))?;
    let config: RandomConfig = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse random config: {}", path.display()))?;
    if config.rows == 0 || config.cols == 0 {
        anyhow::bail!(
            "Random config must have positive dimensions, got ({}, {})",
            config.rows,
            config.cols
        );
    }
    Ok(config)
}
