use std::io;

use clap::Parser;
use iterative::SimpleIterations;
use rand::{rngs::StdRng, SeedableRng};

mod shell;
mod tokens;

use shell::Shell;

/// Interactive solver for square systems of linear equations using the simple-iterations method.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Maximum number of iterations per solve, 0 for no limit
    #[arg(long, default_value_t = 100_000)]
    max_iterations: usize,

    /// Seed for randomly generated matrices
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();
    log::debug!("{:?}", args);

    let solver = match args.max_iterations {
        0 => SimpleIterations::new(),
        n => SimpleIterations::new().with_max_iterations(n),
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    Shell::new(io::stdin().lock(), io::stdout().lock(), solver, rng).run()
}
