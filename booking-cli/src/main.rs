//! Booking CLI - check room availability against a running booking server.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "booking-cli",
    version,
    about = "Hotel booking availability toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: booking_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    booking_cmd::run(cli.command).await
}
