use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod check;
mod config;
mod output;
mod pages;
mod report;
mod snapshot;
mod telemetry;

#[derive(Parser)]
#[command(name = "pagewatch", about = "Report which monitored pages disappeared, appeared, or changed")]
struct Cli {
    /// Properties file with `pages=` (default: $PAGEWATCH_CONFIG or ./pagewatch.properties)
    #[arg(global = true, short, long)]
    config: Option<PathBuf>,
    /// Emit a single JSON envelope to stdout; logs go to stderr
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Diff yesterday's and today's snapshots and print the change letter
    Check(check::CheckCmd),
    /// List the configured pages
    Pages,
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    telemetry::config::set_json_mode(cli.json);

    // stderr only, stdout carries the report
    telemetry::config::init_tracing();
    let config_path = config::resolve_path(cli.config);

    match cli.command {
        Commands::Check(args) => check::run(&config_path, args)?,
        Commands::Pages => pages::run(&config_path)?,
    }

    Ok(())
}
