use std::io;

use anyhow::Context;
use clap::{Parser, Subcommand};
use judge_fixtures::{run_even_degree, run_fib_prefix};
use log::info;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the first k Fibonacci numbers, concatenated, for every query on stdin
    FibPrefix,
    /// Print TAK if every vertex of the graph on stdin has even degree, NIE otherwise
    EvenDegree,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    match &cli.command {
        Commands::FibPrefix => {
            info!("Answering Fibonacci prefix queries");
            run_fib_prefix(stdin, stdout).context("fib-prefix failed")?;
        }
        Commands::EvenDegree => {
            info!("Checking vertex degrees");
            run_even_degree(stdin, stdout).context("even-degree failed")?;
        }
    }
    Ok(())
}
