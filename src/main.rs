//! Bikeshare statistics CLI
//!
//! Command-line interface for exploring US bikeshare trip data.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --data-dir data                       # interactive menus
//! cargo run -- --data-dir data --city Chicago
//! cargo run -- --data-dir data --city "New York City" --month March --day Friday
//! cargo run -- --data-dir data --city Washington --raw-pages 2
//! ```
//!
//! The program loads the selected city's trip records, filters them by month and
//! day of week, and prints time, station, trip duration and user statistics to
//! stdout. In interactive mode it then offers raw data in pages of 5 rows and
//! asks whether to start over.
//!
//! Logs go to stderr and are controlled with `RUST_LOG` (default `warn`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (unknown city, file not found, malformed data, etc.)

use bikeshare_stats::cli::{self, ArgsCollector, CliArgs, PromptCollector, SelectionCollector};
use bikeshare_stats::pipeline::AnalysisPipeline;
use std::io::{self, Write};
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run_once(args: &CliArgs, pipeline: &AnalysisPipeline) -> Result<(), String> {
    let selection = match args.to_selection() {
        Some(selection) => selection.map_err(|e| e.to_string())?,
        None => return Ok(()),
    };
    let mut collector = ArgsCollector::new(selection);
    let mut output = io::stdout().lock();

    while let Some(selection) = collector.collect().map_err(|e| e.to_string())? {
        let pass = pipeline.process(&selection, &mut output)?;
        for page in 0..args.raw_pages.min(pass.table.page_count()) {
            pass.write_page(page, &mut output)?;
        }
    }
    Ok(())
}

fn run_interactive(pipeline: &AnalysisPipeline) -> Result<(), String> {
    let cities = pipeline.catalog().cities().map(str::to_string).collect();
    let mut prompts = PromptCollector::new(io::stdin().lock(), io::stdout(), cities);

    while let Some(selection) = prompts.collect().map_err(|e| e.to_string())? {
        let pass = pipeline.process(&selection, prompts.output())?;

        let mut page = 0;
        let mut question = "Do you wish to see raw data? (Y)es or (N)o to continue...";
        while page < pass.table.page_count()
            && prompts.confirm(question).map_err(|e| e.to_string())?
        {
            pass.write_page(page, prompts.output())?;
            page += 1;
            question = "Do you wish to see more data? (Y)es or (N)o to continue...";
        }

        let restart = prompts
            .confirm(
                "\nWould you like to restart? Enter (y)es to restart. \
                 Enter any other key to quit...",
            )
            .map_err(|e| e.to_string())?;
        if !restart {
            break;
        }
    }

    prompts
        .output()
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))
}

fn main() {
    init_logging();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // The catalog is built once and never changes during the run
    let pipeline = AnalysisPipeline::new(args.to_catalog());

    let result = if args.is_interactive() {
        run_interactive(&pipeline)
    } else {
        run_once(&args, &pipeline)
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
