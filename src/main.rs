use std::io::Write;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    QueueableCommand,
    style::{self, Color, Stylize},
};
use loopmaze::{CellConnectivity, GeneratorConfig, Grid, GridCell, MazeGenerator, logging};

/// Generate a noisy maze and print it to the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of walkable cells along x
    width: u16,

    /// Number of walkable cells along y
    height: u16,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Upper bound of noise attempts, as a fraction of the cell count
    #[arg(long, default_value_t = GeneratorConfig::DEFAULT_MAX_NOISE_RATIO)]
    noise: f64,

    /// Print the perfect maze, without noise
    #[arg(long)]
    no_noise: bool,
}

/// Lays the connectivity records out on a picture grid with a one-cell border.
fn picture(cells: &[CellConnectivity], width: u16, height: u16) -> Grid {
    let mut grid = Grid::new(width as u32 * 2 + 1, height as u32 * 2 + 1);
    for x in 0..width as u32 {
        for y in 0..height as u32 {
            let cell = cells[x as usize * height as usize + y as usize];
            let (px, py) = (x * 2 + 1, y * 2 + 1);
            grid.set((px, py), GridCell::Floor);
            if cell.right {
                grid.set((px + 1, py), GridCell::Floor);
            }
            if cell.down {
                grid.set((px, py + 1), GridCell::Floor);
            }
        }
    }
    grid
}

fn main() -> anyhow::Result<()> {
    let _guard = logging::init_tracing();
    let args = Args::parse();

    let ratio = if args.no_noise { 0.0 } else { args.noise };
    let mut config = GeneratorConfig::new(args.width, args.height).with_max_noise_ratio(ratio);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let generator = MazeGenerator::new(config).context("Invalid maze configuration")?;

    let cells = generator.generate();
    tracing::info!(
        "Generated {}x{} maze, {} passages",
        args.width,
        args.height,
        cells.iter().map(|c| c.open_count()).sum::<usize>() / 2
    );

    let grid = picture(&cells, args.width, args.height);
    let mut stdout = std::io::stdout().lock();
    stdout.queue(style::PrintStyledContent(
        format!(
            "Maze {}x{} (seed: {}, noise ratio: {})\r\n",
            args.width,
            args.height,
            args.seed.map_or_else(|| "random".to_string(), |s| s.to_string()),
            ratio
        )
        .with(Color::Blue),
    ))?;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            stdout.queue(style::Print(grid[(x, y)]))?;
        }
        stdout.queue(style::Print("\r\n"))?;
    }
    stdout.flush().context("Failed to write maze to stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picture_opens_passages() {
        let cells = [
            CellConnectivity {
                right: true,
                ..Default::default()
            },
            CellConnectivity {
                left: true,
                ..Default::default()
            },
        ];
        let grid = picture(&cells, 2, 1);
        assert_eq!((grid.width(), grid.height()), (5, 3));
        assert_eq!(grid.count(GridCell::Floor), 3);
        assert_eq!(grid[(2, 1)], GridCell::Floor);
        assert_eq!(grid[(0, 1)], GridCell::Wall);
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["loopmaze", "12", "8", "--seed", "3", "--no-noise"]);
        assert_eq!((args.width, args.height), (12, 8));
        assert_eq!(args.seed, Some(3));
        assert!(args.no_noise);
        assert_eq!(args.noise, 0.25);
    }
}
