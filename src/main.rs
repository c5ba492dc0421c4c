use std::process;

use anyhow::Result;
use clap::Parser;

use corebench::driver::{self, DriverOptions};
use corebench::errors::BenchError;
use corebench::runner::SystemInvoker;

#[derive(Parser)]
#[command(
    name = "corebench",
    version,
    about = "Run timed benchmarks of the analysis engine across rule/target corpora"
)]
struct Cli {
    /// Run the single dummy corpus instead of the production table
    #[arg(long)]
    dummy: bool,

    /// Upload each timing to the metrics dashboard
    #[arg(long)]
    upload: bool,

    /// Engine binary to benchmark
    #[arg(long, default_value = "engine")]
    engine: String,

    /// Dashboard base URL for metric upload
    #[arg(long, default_value = "https://dashboard.example.dev")]
    dashboard_url: String,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Corpus working directories are subfolders of wherever the driver is
    // launched from; resolving once here keeps every downstream path
    // absolute.
    let base_dir = std::env::current_dir()?;

    let opts = DriverOptions {
        engine: cli.engine,
        base_dir,
        dashboard_url: cli.dashboard_url,
        dummy: cli.dummy,
        upload: cli.upload,
    };
    driver::run_benchmarks(&SystemInvoker, &opts)
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        let code = err
            .downcast_ref::<BenchError>()
            .map_or(1, BenchError::exit_code);
        process::exit(code);
    }
}
