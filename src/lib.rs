//! Randomized maze generation.
//!
//! A maze of `W x H` walkable cells is carved into a `(2W - 1) x (2H - 1)`
//! wall/floor grid with randomized Prim's algorithm, then roughened with random
//! noise that adds loops and may cut parts of it off. The result is returned as
//! one [`CellConnectivity`] per walkable cell.
//!
//! ```no_run
//! use loopmaze::{GeneratorConfig, MazeGenerator};
//!
//! let generator = MazeGenerator::new(GeneratorConfig::new(20, 10).with_seed(7))?;
//! let cells = generator.generate();
//! assert_eq!(cells.len(), 200);
//! # Ok::<(), loopmaze::ConfigError>(())
//! ```

pub mod config;
pub mod encode;
pub mod generators;
pub mod logging;
pub mod maze;

pub use config::{ConfigError, GeneratorConfig};
pub use encode::{CellConnectivity, encode_directions};
pub use generators::MazeGenerator;
pub use maze::{Direction, Grid, GridCell};
