use anyhow::{Context, Result};
use clap::Parser;
use gridsearch::{Algorithm, Coord, Grid, GridConfig, path_cost};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search strategy: bfs, dfs or dijkstra
    #[arg(short, long, default_value = "dijkstra")]
    algorithm: Algorithm,

    /// Seed for scattering random walls and weights
    #[arg(short, long)]
    seed: Option<u64>,

    /// Wall probability per cell when a seed is given
    #[arg(long, default_value_t = 0.25)]
    walls: f64,

    /// Heavy-cell probability per cell when a seed is given
    #[arg(long, default_value_t = 0.1)]
    weights: f64,

    /// Layout file, one row per line (S start, F finish, # wall, w heavy, 1-9 weight, . open)
    /// Defaults to an open 20x50 board
    layout: Option<PathBuf>,
}

fn read_layout(path: &Path) -> Result<Grid> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read layout {}", path.display()))?;

    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    Grid::from_layout(&lines).with_context(|| format!("invalid layout in {}", path.display()))
}

/// Board with visited cells as `o` and path cells as `*`, endpoints left as drawn
fn render(grid: &Grid, visited: &[Coord], path: &[Coord]) -> String {
    let mut rows: Vec<Vec<char>> = grid
        .to_string()
        .lines()
        .map(|line| line.chars().collect())
        .collect();

    let mut mark = |cells: &[Coord], symbol: char| {
        for &coord in cells {
            if coord != grid.start() && coord != grid.finish() {
                rows[coord.row][coord.col] = symbol;
            }
        }
    };
    mark(visited, 'o');
    mark(path, '*');

    rows.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    let mut grid = match &args.layout {
        Some(path) => read_layout(path)?,
        None => Grid::from_config(&GridConfig::default())?,
    };

    if let Some(seed) = args.seed {
        let mut rng = StdRng::seed_from_u64(seed);
        grid.scatter_walls(&mut rng, args.walls)?;
        grid.scatter_weights(&mut rng, args.weights)?;
    }

    info!(
        algorithm = %args.algorithm,
        rows = grid.rows(),
        cols = grid.cols(),
        start = %grid.start(),
        finish = %grid.finish(),
        "searching"
    );

    let outcome = args.algorithm.solve(&mut grid)?;
    let path = outcome.path.as_deref().unwrap_or_default();

    println!("{}\n", render(&grid, &outcome.visited, path));

    if outcome.found() {
        println!(
            "{}: visited {} cells, path of {} steps with cost {}",
            args.algorithm,
            outcome.visited.len(),
            path.len() - 1,
            path_cost(&grid, path)?
        );
    } else {
        println!(
            "{}: finish unreachable after visiting {} cells",
            args.algorithm,
            outcome.visited.len()
        );
    }

    Ok(())
}
