use rand::{Rng, SeedableRng, rngs::StdRng};

pub mod noise;
pub mod prim;

use noise::{add_noise, noise_amount};
use prim::randomized_prim;

use crate::{
    config::{ConfigError, GeneratorConfig},
    encode::{CellConnectivity, encode_directions},
    maze::Grid,
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates noisy mazes of a fixed size.
///
/// Each call to [`MazeGenerator::generate`] builds a fresh grid, carves a
/// perfect maze with randomized Prim's, punches random noise into it, and
/// encodes the result. Only the configuration is kept between calls.
#[derive(Debug, Clone)]
pub struct MazeGenerator {
    config: GeneratorConfig,
}

impl MazeGenerator {
    /// Validates `config` before any grid is allocated.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a maze, seeded from the configuration when a seed is set.
    pub fn generate(&self) -> Vec<CellConnectivity> {
        let mut rng = get_rng(self.config.seed);
        self.generate_with(&mut rng)
    }

    /// Generates a maze drawing all randomness from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<CellConnectivity> {
        let grid = self.generate_grid_with(rng);
        encode_directions(
            &grid,
            self.config.walkable_width,
            self.config.walkable_height,
        )
    }

    /// Runs carving and noise, returning the grid before encoding.
    pub fn generate_grid_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Grid {
        let GeneratorConfig {
            walkable_width: width,
            walkable_height: height,
            max_noise_ratio,
            ..
        } = self.config;

        let mut grid = Grid::for_walkable(width, height);
        tracing::debug!(
            "[generate] carving maze of size [{}, {}]",
            grid.width(),
            grid.height()
        );
        let carved = randomized_prim(&mut grid, rng);

        let amount = noise_amount(rng, max_noise_ratio, self.config.walkable_cells());
        let applied = add_noise(&mut grid, width, height, amount, rng);
        tracing::debug!(
            "[generate] carved {} passages, applied {} of {} noise attempts",
            carved,
            applied,
            amount as usize
        );

        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_rejected() {
        assert_eq!(
            MazeGenerator::new(GeneratorConfig::new(0, 4)).err(),
            Some(ConfigError::ZeroWidth)
        );
        assert_eq!(
            MazeGenerator::new(GeneratorConfig::new(4, 0)).err(),
            Some(ConfigError::ZeroHeight)
        );
    }

    #[test]
    fn test_generate_length() {
        let generator = MazeGenerator::new(GeneratorConfig::new(7, 3)).unwrap();
        assert_eq!(generator.generate().len(), 21);
    }

    #[test]
    fn test_seeded_generate_is_repeatable() {
        let generator =
            MazeGenerator::new(GeneratorConfig::new(15, 9).with_seed(1234)).unwrap();
        assert_eq!(generator.generate(), generator.generate());
    }

    #[test]
    fn test_generate_with_matches_seeded_generate() {
        let generator = MazeGenerator::new(GeneratorConfig::new(6, 6).with_seed(9)).unwrap();
        let mut rng = get_rng(Some(9));
        assert_eq!(generator.generate(), generator.generate_with(&mut rng));
    }

    #[test]
    fn test_no_noise_gives_perfect_maze() {
        let generator =
            MazeGenerator::new(GeneratorConfig::new(10, 4).with_max_noise_ratio(0.0)).unwrap();
        let cells = generator.generate_with(&mut get_rng(Some(2)));
        let edges = cells.iter().map(|c| c.open_count()).sum::<usize>() / 2;
        assert_eq!(edges, 10 * 4 - 1);
    }
}
