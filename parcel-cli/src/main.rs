//! Parcel CLI - look up parcels and their mock valuations from the terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "parcel-cli",
    version,
    about = "Parcel lookup and mock valuation toolkit"
)]
struct Cli {
    #[command(flatten)]
    options: parcel_cmd::Options,

    #[command(subcommand)]
    command: parcel_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    parcel_cmd::run(&cli.options, cli.command)
}
