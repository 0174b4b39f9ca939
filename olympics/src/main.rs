//! # olympics
//!
//! A CLI that turns a tab-separated table of Olympic Games results into
//! aligned text reports.
//!
//! ## Overview
//!
//! olympics is built on top of olympicslib. Exactly one report is chosen per
//! run; its table is printed to stdout and, with `--output`, also written to a
//! file (overwriting it).
//!
//! ## Usage
//!
//! ```bash
//! # First ten medal entries of a country in one year, plus totals
//! olympics athlete_events.tsv --medals USA 2008
//!
//! # Every country's Gold/Silver/Bronze tally in one year
//! olympics athlete_events.tsv --total 1996 --output totals.txt
//!
//! # Best year(s) of several countries (NOC codes or team names)
//! olympics athlete_events.tsv --overall USA Norway FIN
//!
//! # Ask for countries until `exit()`
//! olympics athlete_events.tsv --interactive
//!
//! # Aggregated data as JSON
//! olympics athlete_events.tsv --total 1996 --json
//! ```

mod config;
mod interactive;
mod sink;

use std::io::{self, Write};
use std::process::ExitCode;

use olympicslib::{BestYears, MedalList, RecordStore, Report, YearTotals};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use config::{build_command, Config, Mode};
use interactive::{install_interrupt_handler, Session};
use sink::OutputSink;

/// Initializes the tracing subscriber on stderr. Default level is WARN; each
/// `-v` raises it one step. `RUST_LOG` directives take precedence.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Print either the table or, with `--json`, the aggregated data.
fn emit<T, W>(
    sink: &mut OutputSink<W>,
    json: bool,
    result: &T,
    to_report: impl Fn(&T) -> Report,
) -> anyhow::Result<()>
where
    T: Serialize,
    W: Write,
{
    let text = if json {
        serde_json::to_string_pretty(result)?
    } else {
        to_report(result).render()
    };
    sink.emit(&text)
}

fn run(config: &Config) -> anyhow::Result<()> {
    let store = RecordStore::load(&config.filename)?;
    info!(
        path = %config.filename.display(),
        records = store.len(),
        "results loaded"
    );

    let mut sink = OutputSink::new(io::stdout(), config.output.clone());

    match &config.mode {
        Mode::Medals { country, year } => {
            info!(country = country.as_str(), year, "medals report");
            let medals = MedalList::query(&store, country, *year)?;
            emit(&mut sink, config.json, &medals, MedalList::to_report)
        }
        Mode::Total { year } => {
            info!(year, "totals report");
            let totals = YearTotals::query(&store, *year)?;
            emit(&mut sink, config.json, &totals, YearTotals::to_report)
        }
        Mode::Overall { countries } => {
            info!(countries = countries.len(), "best years report");
            let best = BestYears::query(&store, countries.as_slice())?;
            emit(&mut sink, config.json, &best, BestYears::to_report)
        }
        Mode::Interactive => {
            info!("interactive mode");
            install_interrupt_handler();
            let stdin = io::stdin();
            Session::new(&store, stdin.lock(), &mut sink).run()
        }
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    let config = match Config::from_matches(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.verbosity);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
