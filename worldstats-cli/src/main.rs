//! WorldStats CLI - Command-line interface
//!
//! Charts country statistics, lists continents, shows country details and
//! spins a globe, on top of the `worldstats` library.

mod commands;
mod error;
mod output;
mod runner;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::globe::{GlobeArgs, DEFAULT_FPS};
use commands::report::ReportArgs;
use error::CliError;
use output::ConsoleOutput;
use worldstats::classifier::DEFAULT_SPIN_SPEED;

#[derive(Debug, Parser)]
#[command(name = "worldstats")]
#[command(version, about = "Explore world country statistics", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Chart a country report (see `reports` for metric names)
    Report {
        /// Metric name, e.g. area-descending or most-pop [default: from config]
        metric: Option<String>,

        /// Number of countries to show, clamped to 2-20 [default: from config]
        #[arg(short, long)]
        limit: Option<u32>,

        /// Only include countries on this continent (repeatable)
        #[arg(short, long = "continent", value_name = "CONTINENT")]
        continents: Vec<String>,

        /// Print the dataset as JSON instead of a chart
        #[arg(long)]
        json: bool,
    },

    /// List available report metrics
    Reports,

    /// List the countries of a continent or region
    Continent {
        /// Continent or region name, e.g. "South America" or Americas
        name: String,
    },

    /// Show details for a country and its neighbours
    Country {
        /// ISO 3166-1 alpha-2 or alpha-3 code
        code: String,
    },

    /// Spin a globe and print which region faces the viewer
    Globe {
        /// Frames to simulate [default: one full turn]
        #[arg(long)]
        frames: Option<u64>,

        /// Frames per second
        #[arg(long, default_value_t = DEFAULT_FPS)]
        fps: f64,

        /// Rotation speed in radians per second
        #[arg(long, default_value_t = DEFAULT_SPIN_SPEED, allow_negative_numbers = true)]
        speed: f64,

        /// Sleep between frames to animate in real time
        #[arg(long)]
        realtime: bool,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let verbose = cli.verbose;

    match cli.command {
        Commands::Report {
            metric,
            limit,
            continents,
            json,
        } => commands::report::run(
            ReportArgs {
                metric,
                limit,
                continents,
                json,
            },
            verbose,
        ),
        Commands::Reports => {
            commands::report::run_list(&ConsoleOutput::new());
            Ok(())
        }
        Commands::Continent { name } => commands::continent::run(&name, verbose),
        Commands::Country { code } => commands::country::run(&code, verbose),
        Commands::Globe {
            frames,
            fps,
            speed,
            realtime,
        } => commands::globe::run(
            GlobeArgs {
                frames,
                fps,
                speed,
                realtime,
            },
            verbose,
        ),
        Commands::Config { command } => commands::config::run(command),
    }
}
