//! HPS CLI - headless access to the facilities dashboard aggregates.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "hps-cli",
    version,
    about = "Hospital patient-satisfaction dataset toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: hps_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("[HPS] cli: starting");
    hps_cmd::run(cli.command)
}
