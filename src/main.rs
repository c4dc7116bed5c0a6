mod cli;
mod logging;

use std::process;
use std::time::Instant;

use advent::input::{input_path, read_input};
use advent::PuzzleError;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(answers) => {
            for (part, answer) in answers {
                println!("Part {part}: {answer}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

/// Answers for the selected parts, in order. Without an explicit part a
/// part the day does not have is left out.
fn run(cli: &Cli) -> Result<Vec<(u8, String)>> {
    let solve = advent::solver(cli.year, cli.day)?;
    let path = match &cli.input {
        Some(path) => path.clone(),
        None => input_path(&cli.input_dir, cli.year, cli.day, cli.example.as_deref()),
    };
    let input = read_input(&path)?;

    let mut answers = vec![];
    for part in cli.part.map_or(vec![1, 2], |part| vec![part]) {
        let time = Instant::now();
        match solve(part, &input) {
            Ok(answer) => answers.push((part, answer)),
            Err(PuzzleError::NoSuchPart(_)) if cli.part.is_none() => continue,
            Err(e) => {
                return Err(e).with_context(|| format!("{} day {} part {part}", cli.year, cli.day));
            }
        }
        info!(part, elapsed = ?time.elapsed(), "solved");
    }
    Ok(answers)
}
