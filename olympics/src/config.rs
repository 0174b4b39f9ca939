//! Command-line configuration.
//!
//! The clap command is parsed once into an immutable [`Config`] whose
//! [`Mode`] enum makes "exactly one report per run" hold by construction.

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{value_parser, Arg, ArgAction, ArgGroup, ArgMatches, Command};

/// The report selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// First ten medal entries of a country in a year
    Medals { country: String, year: u32 },
    /// Medal tally of every country in a year
    Total { year: u32 },
    /// Best year(s) of each listed country
    Overall { countries: Vec<String> },
    /// Prompt for countries until `exit()`
    Interactive,
}

/// Everything a run needs, fixed before any work starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tab-separated results file
    pub filename: PathBuf,
    pub mode: Mode,
    /// File overwritten with each printed report
    pub output: Option<PathBuf>,
    /// Print the aggregated data as JSON instead of a table
    pub json: bool,
    /// Number of `-v` flags
    pub verbosity: u8,
}

/// Build the clap Command structure
pub fn build_command() -> Command {
    Command::new("olympics")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Medal reports over a tab-separated table of Olympic Games results")
        .arg(
            Arg::new("filename")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Source location (tab-separated, header on the first line)"),
        )
        .arg(
            Arg::new("medals")
                .long("medals")
                .num_args(2)
                .value_names(["COUNTRY", "YEAR"])
                .help("List of medals of a country in a specific olympics"),
        )
        .arg(
            Arg::new("total")
                .long("total")
                .value_name("YEAR")
                .value_parser(value_parser!(u32))
                .help("Every country's performance in a specific olympics"),
        )
        .arg(
            Arg::new("overall")
                .long("overall")
                .num_args(1..)
                .value_name("COUNTRY")
                .help("Best performance year of every listed country"),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .action(ArgAction::SetTrue)
                .help("Interactive mode"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILENAME")
                .value_parser(value_parser!(PathBuf))
                .help("Filename of output file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .conflicts_with("interactive")
                .help("Print the report data as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log progress to stderr (-v info, -vv debug, -vvv trace)"),
        )
        .group(
            ArgGroup::new("mode")
                .args(["medals", "total", "overall", "interactive"])
                .required(true)
                .multiple(false),
        )
}

fn parse_year(raw: &str) -> anyhow::Result<u32> {
    raw.parse::<u32>()
        .with_context(|| format!("invalid year '{}'", raw))
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> anyhow::Result<Self> {
        let filename = matches
            .get_one::<PathBuf>("filename")
            .cloned()
            .ok_or_else(|| anyhow!("missing results filename"))?;

        let mode = if let Some(values) = matches.get_many::<String>("medals") {
            let values: Vec<&String> = values.collect();
            match values.as_slice() {
                [country, year] => Mode::Medals {
                    country: country.to_string(),
                    year: parse_year(year)?,
                },
                _ => return Err(anyhow!("--medals expects COUNTRY and YEAR")),
            }
        } else if let Some(year) = matches.get_one::<u32>("total") {
            Mode::Total { year: *year }
        } else if let Some(countries) = matches.get_many::<String>("overall") {
            Mode::Overall {
                countries: countries.cloned().collect(),
            }
        } else if matches.get_flag("interactive") {
            Mode::Interactive
        } else {
            return Err(anyhow!("no report selected"));
        };

        Ok(Config {
            filename,
            mode,
            output: matches.get_one::<PathBuf>("output").cloned(),
            json: matches.get_flag("json"),
            verbosity: matches.get_count("verbose"),
        })
    }
}
