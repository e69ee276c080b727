//! Command implementations for the booking CLI.
//!
//! Provides subcommands for checking a room's availability against a running
//! booking server and for printing the dashboard chart configurations.

use clap::Subcommand;

pub mod chart;
pub mod check;

#[derive(Subcommand)]
pub enum Command {
    /// Ask the server whether a room is free for a stay and what it costs
    CheckAvailability {
        /// Server origin, e.g. http://localhost:5000
        #[arg(short = 'b', long)]
        base_url: String,

        /// Room id as used in /booking/check_availability/{room_id}
        #[arg(short = 'r', long)]
        room_id: String,

        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: String,

        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: String,

        /// CSRF token to send (empty if omitted)
        #[arg(long)]
        csrf_token: Option<String>,

        /// Endpoint path prefix
        #[arg(long, default_value = booking_core::config::DEFAULT_ENDPOINT_BASE)]
        endpoint_base: String,
    },

    /// Print the Chart.js config of a dashboard chart as JSON
    ChartConfig {
        /// Canvas id (bookingsChart or roomTypeChart)
        #[arg(short = 'i', long)]
        id: String,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::CheckAvailability {
            base_url,
            room_id,
            check_in,
            check_out,
            csrf_token,
            endpoint_base,
        } => {
            let stay = check::StayArgs {
                room_id,
                check_in,
                check_out,
                csrf_token,
                endpoint_base,
            };
            check::run_check(&base_url, &stay).await
        }
        Command::ChartConfig { id, pretty } => chart::print_chart_config(&id, pretty),
    }
}
