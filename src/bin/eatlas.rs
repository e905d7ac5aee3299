//! eatlas - Interactive TUI restaurant explorer.
//!
//! Loads the bundled restaurant CSV once at startup, then runs the
//! interactive viewer until the user quits.
//!
//! Usage:
//!   eatlas                      # bundled dataset (data/restaurants.csv)
//!   eatlas --data ./rest.csv    # custom dataset path

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use eatlas::dataset::Dataset;
use eatlas::tui::App;

/// Default path for the bundled dataset.
const DEFAULT_DATA_PATH: &str = "data/restaurants.csv";

/// Terminal render tick rate. The dataset is static, so ticks only bound
/// how quickly the UI reacts to terminal resizes.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Interactive TUI restaurant explorer.
#[derive(Parser)]
#[command(name = "eatlas", about = "Restaurant dataset viewer")]
struct Args {
    /// Path to the restaurant CSV file.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Increase log verbosity (-v: debug, -vv: trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode: errors only.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let dataset = match Dataset::load(&args.data) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        rows = dataset.len(),
        cities = dataset.cities().len(),
        "starting viewer"
    );

    let app = App::new(dataset);
    if let Err(e) = app.run(TICK_RATE) {
        eprintln!("Terminal error: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Default level is INFO. Use -q for quiet mode (errors only).
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("eatlas={}", level).parse().expect("valid directive"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
