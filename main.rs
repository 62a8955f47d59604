mod solution;

use clap::Parser;
use log::LevelFilter;
use std::process;

use crate::solution::FibonacciError;

/// Prints the n-th Fibonacci number.
#[derive(Parser, Debug)]
#[command(name = "fib", version, about, long_about = None)]
struct Cli {
    /// Index into the Fibonacci sequence
    #[arg(default_value_t = 10, allow_negative_numbers = true)]
    index: i64,

    /// Print every term up to and including the index
    #[arg(short, long)]
    sequence: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn render(cli: &Cli) -> Result<Vec<String>, FibonacciError> {
    let last = solution::fibonacci(cli.index)?;
    if !cli.sequence {
        return Ok(vec![last.to_string()]);
    }

    // index is already known to be within 0..=MAX_INDEX here
    let lines: Vec<String> = solution::sequence()
        .take(cli.index as usize + 1)
        .enumerate()
        .map(|(i, value)| format!("{} {}", i, value))
        .collect();
    log::debug!("rendered {} terms", lines.len());
    Ok(lines)
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .parse_default_env()
        .init();

    match render(&cli) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(err) => {
            log::error!("{}", err);
            process::exit(1);
        }
    }
}
