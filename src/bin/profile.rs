use std::time::Instant;

use loopmaze::{GeneratorConfig, MazeGenerator, logging};

const DEFAULT_ITERATIONS: usize = 20;

fn main() -> anyhow::Result<()> {
    let _guard = logging::init_tracing();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_ITERATIONS);

    let size = u8::MAX as u16;
    let generator = MazeGenerator::new(GeneratorConfig::new(size, size).with_seed(0))?;

    let start = Instant::now();
    for i in 0..num_iters {
        let iter_start = Instant::now();
        let cells = generator.generate();
        tracing::info!(
            "[profile] iteration {} generated {} cells in {:?}",
            i,
            cells.len(),
            iter_start.elapsed()
        );
    }
    tracing::info!(
        "[profile] {} iterations of {}x{} took {:?}",
        num_iters,
        size,
        size,
        start.elapsed()
    );
    Ok(())
}
