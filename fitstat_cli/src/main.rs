use clap::{Parser, Subcommand};
use fitstat_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitstat")]
#[command(about = "Workout statistics from raw sensor readings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Stop at the first reading that fails
    #[arg(long, global = true)]
    abort_on_error: bool,

    /// Print each summary as a JSON object instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Process the configured readings (default)
    Demo,

    /// Compute one workout from a code and its positional fields
    Calc {
        /// Workout code (SWM, RUN, WLK)
        code: String,

        /// Positional sensor fields
        #[arg(required = true, allow_negative_numbers = true)]
        fields: Vec<f64>,
    },

    /// Process readings from a JSON Lines or CSV feed
    File {
        /// Path to a .jsonl, .json or .csv file
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Initialize logging
    fitstat_core::logging::init_with_level(&config.logging.level);

    // The subscriber did not exist while the config was loading
    match cli.config {
        Some(ref path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!(
            "Using config from {:?} (defaults if absent)",
            Config::default_config_path()
        ),
    }

    let policy = if cli.abort_on_error {
        ErrorPolicy::Abort
    } else {
        config.processing.on_error
    };

    let readings = match cli.command {
        Some(Commands::Calc { code, fields }) => vec![RawReading::new(code, fields)],
        Some(Commands::File { path }) => read_feed(&path)?,
        Some(Commands::Demo) | None => config.input.readings.clone(),
    };

    let report = process_batch(&readings, policy);
    print_report(&report, cli.json)?;

    let failed = report.failed();
    if failed > 0 {
        return Err(Error::Batch(format!(
            "{} of {} readings failed",
            failed,
            readings.len()
        )));
    }

    Ok(())
}

fn print_report(report: &BatchReport, json: bool) -> Result<()> {
    for outcome in &report.outcomes {
        match outcome.result {
            Ok(ref summary) if json => println!("{}", serde_json::to_string(summary)?),
            Ok(ref summary) => println!("{}", summary.format()),
            Err(ref e) => eprintln!(
                "error: reading #{} ({}): {}",
                outcome.index + 1,
                outcome.workout_code,
                e
            ),
        }
    }
    Ok(())
}
