//! Random coin generation for the development host and offline rendering.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::CoinDescriptor;

/// Bounds for generated coins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinConfig {
    /// Number of coins per batch.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Smallest coin size in pixels.
    #[serde(default = "default_min_size")]
    pub min_size: u32,
    /// Largest coin size in pixels.
    #[serde(default = "default_max_size")]
    pub max_size: u32,
    /// Shortest animation cycle in seconds.
    #[serde(default = "default_min_duration")]
    pub min_duration: f64,
    /// Longest animation cycle in seconds.
    #[serde(default = "default_max_duration")]
    pub max_duration: f64,
    /// Longest start delay in seconds.
    #[serde(default = "default_max_delay")]
    pub max_delay: f64,
}

fn default_count() -> usize {
    30
}

fn default_min_size() -> u32 {
    20
}

fn default_max_size() -> u32 {
    50
}

fn default_min_duration() -> f64 {
    5.0
}

fn default_max_duration() -> f64 {
    15.0
}

fn default_max_delay() -> f64 {
    10.0
}

impl Default for CoinConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            min_size: default_min_size(),
            max_size: default_max_size(),
            min_duration: default_min_duration(),
            max_duration: default_max_duration(),
            max_delay: default_max_delay(),
        }
    }
}

impl CoinConfig {
    /// Check if this is the default config.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Reorder inverted bounds and clamp values the renderer cannot use.
    fn normalized(mut self) -> Self {
        self.min_size = self.min_size.max(1);
        self.max_size = self.max_size.max(1);
        if self.min_size > self.max_size {
            std::mem::swap(&mut self.min_size, &mut self.max_size);
        }
        self.min_duration = self.min_duration.max(0.1);
        self.max_duration = self.max_duration.max(0.1);
        if self.min_duration > self.max_duration {
            std::mem::swap(&mut self.min_duration, &mut self.max_duration);
        }
        self.max_delay = self.max_delay.max(0.0);
        self
    }
}

/// Generates batches of coin descriptors within the configured bounds.
#[derive(Debug, Clone)]
pub struct CoinGenerator {
    config: CoinConfig,
}

impl CoinGenerator {
    pub fn new(config: CoinConfig) -> Self {
        Self {
            config: config.normalized(),
        }
    }

    pub fn config(&self) -> &CoinConfig {
        &self.config
    }

    /// Generate one batch using the thread-local RNG.
    pub fn generate(&self) -> Vec<CoinDescriptor> {
        self.generate_with(&mut rand::rng())
    }

    /// Generate one batch from the given RNG.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Vec<CoinDescriptor> {
        (0..self.config.count).map(|_| self.coin(rng)).collect()
    }

    fn coin<R: Rng>(&self, rng: &mut R) -> CoinDescriptor {
        let size = rng.random_range(self.config.min_size..=self.config.max_size);
        let left = rng.random_range(0..=100u32);
        let duration = rng.random_range(self.config.min_duration..=self.config.max_duration);
        let delay = rng.random_range(0.0..=self.config.max_delay);

        CoinDescriptor::new(
            f64::from(size),
            f64::from(left),
            round_tenths(duration),
            round_tenths(delay),
        )
    }
}

impl Default for CoinGenerator {
    fn default() -> Self {
        Self::new(CoinConfig::default())
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
