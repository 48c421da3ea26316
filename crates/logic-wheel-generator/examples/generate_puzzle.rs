//! Example demonstrating Logic Wheel puzzle generation.
//!
//! This example shows how to:
//! - Generate a puzzle for a chosen or random gate
//! - Display the puzzle, its shuffled screen order, the solution, and the seed
//! - Sample many puzzles in parallel and report how many draws the rejection
//!   loop needed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick the gate and seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --gate nand --seed-phrase "hello"
//! ```
//!
//! Measure attempt counts over many samples (default: 10000 per gate):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --stats --samples 100000
//! ```

use std::process;

use clap::Parser;
use logic_wheel_core::{AnswerBuffer, Gate};
use logic_wheel_generator::{
    GeneratedPuzzle, PuzzleGenerator, PuzzleSeed, random_display_order, random_gate,
};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Gate to generate (OR, AND, NAND, NOR, XOR). Random if omitted.
    #[arg(short, long, value_name = "GATE")]
    gate: Option<Gate>,

    /// Seed as 64 hex characters.
    #[arg(long, value_name = "HEX", conflicts_with = "seed_phrase")]
    seed: Option<PuzzleSeed>,

    /// Seed derived from arbitrary text.
    #[arg(long, value_name = "TEXT")]
    seed_phrase: Option<String>,

    /// Report attempt statistics instead of printing one puzzle.
    #[arg(long)]
    stats: bool,

    /// Puzzles to sample per gate when reporting statistics.
    #[arg(long, value_name = "COUNT", default_value_t = 10_000)]
    samples: usize,
}

fn main() {
    let args = Args::parse();

    if args.stats {
        if args.samples == 0 {
            eprintln!("--samples must be at least 1.");
            process::exit(1);
        }
        print_stats(args.gate, args.samples);
        return;
    }

    let seed = match (args.seed, &args.seed_phrase) {
        (Some(seed), _) => seed,
        (None, Some(phrase)) => PuzzleSeed::from_phrase(phrase),
        (None, None) => PuzzleSeed::random(),
    };
    let mut rng = seed.rng();
    let gate = args.gate.unwrap_or_else(|| random_gate(&mut rng));

    match PuzzleGenerator::new().generate_with_seed(gate, seed) {
        Ok(generated) => print_puzzle(&generated, seed),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn print_puzzle(generated: &GeneratedPuzzle, seed: PuzzleSeed) {
    let puzzle = &generated.puzzle;
    let order = random_display_order(&mut seed.rng());
    let shown = order.apply(puzzle.digits());
    let solution = puzzle.derive_solution();

    println!("Seed:");
    println!("  {seed}");
    println!();
    println!("Puzzle:");
    println!("  {puzzle}");
    println!();
    println!("Screen (order {order}):");
    println!(
        "  {}",
        shown.map(|digit| format!("{digit:>2}")).join("  ")
    );
    println!();
    println!("Solution:");
    println!("  {solution} ({})", AnswerBuffer::from_word(solution));
    println!();
    println!("Attempts:");
    println!("  {}", generated.attempts);
}

fn print_stats(gate: Option<Gate>, samples: usize) {
    let generator = PuzzleGenerator::new();
    let gates = gate.map_or_else(|| Gate::ALL.to_vec(), |gate| vec![gate]);

    println!("{:<6}{:>10}{:>10}{:>10}", "gate", "samples", "mean", "max");
    for gate in gates {
        let attempts = (0..samples)
            .into_par_iter()
            .map(|_| generator.generate(gate).map(|generated| generated.attempts))
            .collect::<Result<Vec<_>, _>>();
        let attempts = match attempts {
            Ok(attempts) => attempts,
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        };

        let total: usize = attempts.iter().sum();
        let max = attempts.iter().copied().max().unwrap_or_default();
        #[expect(clippy::cast_precision_loss)]
        let mean = total as f64 / samples as f64;
        println!("{gate:<6}{samples:>10}{mean:>10.2}{max:>10}");
    }
}
