mod commands;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use repcal_core::clock::SystemClock;
use repcal_core::config::RepcalConfig;
use repcal_core::{CalendarDate, RepeatUnit};

#[derive(Parser)]
#[command(name = "repcal")]
#[command(about = "Expand recurring calendar events into concrete dates")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dates on which an event repeats
    Expand {
        /// First occurrence (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        start: Option<CalendarDate>,

        /// Repeat every N units (defaults to default_interval from the config)
        #[arg(short, long, allow_negative_numbers = true)]
        interval: Option<i64>,

        /// none, daily, weekly, monthly or yearly
        #[arg(short, long)]
        unit: RepeatUnit,

        /// Last possible occurrence, inclusive (YYYY-MM-DD)
        #[arg(long)]
        until: CalendarDate,

        /// Print a JSON array instead of one date per line
        #[arg(long)]
        json: bool,
    },
    /// Expand an event draft (JSON) into one event per occurrence
    Series {
        /// Draft file, or "-" to read stdin
        input: PathBuf,

        /// Write the events here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show where the config lives and its effective values
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = RepcalConfig::load()?;
    logging::init(&config);

    match cli.command {
        Commands::Expand {
            start,
            interval,
            unit,
            until,
            json,
        } => {
            let args = commands::expand::ExpandArgs {
                start,
                interval,
                unit,
                until,
                json,
            };
            commands::expand::run(args, &config, &SystemClock)
        }
        Commands::Series { input, output } => commands::series::run(&input, output.as_deref()),
        Commands::Config => commands::config::run(&config),
    }
}
