//! Generate a random world, register it and answer one shortest-path query.
//!
//! Usage:
//!   gridpath-demo --seed 7 graph --size 8 --obstacles 0.3
//!   gridpath-demo --from 0,0 --to 9,4 maze --width 5 --height 10 --obstacles 0.25
//!   gridpath-demo --json maze --width 6 --height 6 --obstacles 0.2
//!
//! Set `RUST_LOG=debug` to see generation and search logs.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gridpath_core::Coord;
use gridpath_demos::{Report, corners, parse_coord, render, validate};
use gridpath_paths::Pather;
use gridpath_world::{GenParams, MemoryRegistry, WorldGen, WorldStore};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random grid worlds and least-cost paths
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the world generator (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Start cell as ROW,COL (defaults to the top-left corner)
    #[arg(long, global = true, value_parser = parse_coord)]
    from: Option<Coord>,

    /// End cell as ROW,COL (defaults to the bottom-right corner)
    #[arg(long, global = true, value_parser = parse_coord)]
    to: Option<Coord>,

    /// Print a JSON report instead of the text rendering
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    world: WorldCmd,
}

#[derive(Subcommand, Debug)]
enum WorldCmd {
    /// Square cell graph with symmetric pair weights
    Graph {
        /// Number of rows and columns
        #[arg(long, default_value_t = 8)]
        size: usize,

        /// Probability that a pair is blocked
        #[arg(long, default_value_t = 0.2)]
        obstacles: f64,
    },
    /// Rectangular maze with per-cell entry costs
    Maze {
        #[arg(long, default_value_t = 10)]
        width: usize,

        #[arg(long, default_value_t = 10)]
        height: usize,

        /// Probability that a cell is a wall
        #[arg(long, default_value_t = 0.2)]
        obstacles: f64,
    },
}

impl WorldCmd {
    fn params(&self) -> GenParams {
        match *self {
            WorldCmd::Graph { size, obstacles } => GenParams::cell_graph(size, obstacles),
            WorldCmd::Maze {
                width,
                height,
                obstacles,
            } => GenParams::maze(width, height, obstacles),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let params = args.world.params();
    if let Err(e) = validate(&params) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}");
    let mut generator = WorldGen::new(StdRng::seed_from_u64(seed));
    let registry = MemoryRegistry::default();
    let world = registry.insert(generator.generate(&params));

    let (default_start, default_end) = corners(world.dims());
    let start = args.from.unwrap_or(default_start);
    let end = args.to.unwrap_or(default_end);

    let result = match registry.find_path(world.id(), start, end) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&Report::new(&world, start, end, result)) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("world {} (seed {seed})", world.id());
    print!("{}", render(&world, &result.path));
    if result.is_reachable() {
        let cells: Vec<String> = result.path.iter().map(Coord::to_string).collect();
        println!("path: {}", cells.join(" -> "));
        println!("cost: {} over {} steps", result.cost, result.steps());
    } else {
        println!("no path from {start} to {end}");
    }
    ExitCode::SUCCESS
}
