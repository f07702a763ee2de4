//! CLI for maze generation

use anyhow::Context;
use clap::Parser;
use kruskal_maze::maze_generator::MazeGenerator;

/// Perfect maze generator using randomized Kruskal's algorithm
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of rooms per side
    #[arg(short, long, default_value_t = 6)]
    size: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Carve loops: share of the walls outside the spanning tree to remove.
    /// Without a value, keeps 15 % of those walls standing.
    #[arg(long, num_args = 0..=1, default_missing_value = "0.85")]
    braid: Option<f64>,
}

/// Generate maze, print it
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut gen = MazeGenerator::new(args.seed);
    let maze = match args.braid {
        Some(ratio) => gen.generate_braided(args.size, ratio),
        None => gen.generate(args.size),
    }
    .with_context(|| format!("Could not generate maze of size {}", args.size))?;

    println!("{maze}");
    Ok(())
}
