//! CLI for checking maze structure

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{bail, Context};
use clap::Parser;
use kruskal_maze::Maze;

/// Check whether a maze is perfect: every room reachable, no loops
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File, where to read the maze. Use `-` for stdin.
    file: PathBuf,
}

/// Read maze from file, print report
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = if args.file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&args.file)
            .with_context(|| format!("Could not read {}", args.file.display()))?
    };
    let maze = Maze::parse(text.trim())?;
    log::debug!("Parsed maze with {} rooms per side", maze.size());

    let report = maze.analyze();
    report.print_report();
    if !report.is_perfect() {
        bail!("Maze is not perfect");
    }
    Ok(())
}
