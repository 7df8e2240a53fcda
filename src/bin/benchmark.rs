//! Performance benchmark comparing serial and parallel stepping

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use torus_life::EngineError;
use torus_life::domain::{Algorithm, Grid, RuleSet};

const DENSITY: f64 = 0.3;

fn random_grid(size: usize) -> Result<Grid, EngineError> {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut grid = Grid::new(size, size)?;
    grid.randomize(&mut rng, DENSITY);
    Ok(grid)
}

/// Average milliseconds per generation
fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> Result<f64, EngineError> {
    let rules = RuleSet::conway();
    let mut grid = random_grid(size)?;

    let start = Instant::now();
    for _ in 0..iterations {
        grid = algorithm.step(&grid, &rules);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<(), EngineError> {
    println!("=== Toroidal Life Step Benchmark ===\n");

    let sizes = [17, 25, 100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations)?;
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;
        let speedup = if parallel_ms > 0.0 { serial_ms / parallel_ms } else { 0.0 };

        println!(
            "{:>10} {:>10.3}ms {:>10.3}ms {:>9.1}x",
            format!("{size}x{size}"),
            serial_ms,
            parallel_ms,
            speedup
        );
    }
    Ok(())
}
