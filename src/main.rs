use std::convert::Infallible;
use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use treestress::{run, BenchConfig, ResultAggregator, StrategyKind};

#[derive(Parser, Debug)]
#[command(
    name = "treestress",
    about = "Stress the allocator by building and discarding complete binary trees"
)]
struct Cli {
    /// Maximum tree depth (values below 6 are raised to 6; unparsable input counts as 0).
    #[arg(default_value_t = 0, allow_negative_numbers = true, value_parser = parse_depth)]
    depth: i32,
    /// Worker threads (default: one per logical CPU).
    #[arg(long)]
    threads: Option<usize>,
    /// Tree representation used by every unit (boxed or arena).
    #[arg(long, default_value_t = StrategyKind::Boxed)]
    strategy: StrategyKind,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Omit the elapsed-time line.
    #[arg(long)]
    quiet: bool,
}

/// Depth argument parser: anything that is not an integer is depth 0.
fn parse_depth(arg: &str) -> Result<i32, Infallible> {
    Ok(arg.trim().parse().unwrap_or(0))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = BenchConfig::new(cli.depth).with_strategy(cli.strategy);
    if let Some(threads) = cli.threads {
        config = config.with_threads(threads);
    }

    info!(n = cli.depth, strategy = %config.strategy, "requested depth");
    let report = run(&config).context("benchmark run failed")?;

    let stdout = io::stdout();
    ResultAggregator::new(stdout.lock())
        .with_elapsed(!cli.quiet)
        .emit(&report)
        .context("failed to write report to stdout")?;

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_names(true)
        .try_init();
}
