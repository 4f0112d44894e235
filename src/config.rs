use thiserror::Error;

/// Reasons a [`GeneratorConfig`] is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("walkable width must be at least 1")]
    ZeroWidth,
    #[error("walkable height must be at least 1")]
    ZeroHeight,
    #[error("noise ratio {0} is not within [0, 1]")]
    InvalidNoiseRatio(f64),
}

/// Construction parameters of a [`MazeGenerator`](crate::generators::MazeGenerator).
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of walkable cells along `x`.
    pub walkable_width: u16,
    /// Number of walkable cells along `y`.
    pub walkable_height: u16,
    /// Seed for reproducible output. `None` draws fresh entropy for every maze.
    pub seed: Option<u64>,
    /// Upper bound of the noise attempts, as a fraction of the walkable cell count.
    pub max_noise_ratio: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig::new(10, 10)
    }
}

impl GeneratorConfig {
    pub const DEFAULT_MAX_NOISE_RATIO: f64 = 0.25;

    pub fn new(walkable_width: u16, walkable_height: u16) -> Self {
        Self {
            walkable_width,
            walkable_height,
            seed: None,
            max_noise_ratio: Self::DEFAULT_MAX_NOISE_RATIO,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_noise_ratio(mut self, ratio: f64) -> Self {
        self.max_noise_ratio = ratio;
        self
    }

    /// Total number of walkable cells.
    pub fn walkable_cells(&self) -> usize {
        self.walkable_width as usize * self.walkable_height as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.walkable_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.walkable_height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if !(0.0..=1.0).contains(&self.max_noise_ratio) {
            return Err(ConfigError::InvalidNoiseRatio(self.max_noise_ratio));
        }
        Ok(())
    }
}
