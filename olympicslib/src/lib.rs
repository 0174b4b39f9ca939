//! # olympicslib
//!
//! Aggregate reports over a table of Olympic Games results, rendered as
//! aligned, bordered text tables.
//!
//! ## Overview
//!
//! The data flows through three stages:
//!
//! 1. **data**: a tab-delimited results file is loaded once into a read-only
//!    [`RecordStore`] of typed [`ResultRecord`]s.
//! 2. **query**: one aggregator per report filters and groups the records:
//!    - [`MedalList`]: a country's medalists in one year
//!    - [`YearTotals`]: every country's medal tally in one year
//!    - [`BestYears`]: the best year(s) of each requested country
//!    - [`CountrySummary`]: first appearance, best/worst edition and averages
//! 3. **output**: the query result is laid out as a fixed-width [`Report`].
//!
//! ## Example
//!
//! ```rust
//! use olympicslib::{MedalList, RecordStore};
//!
//! let tsv = "Name\tTeam\tNOC\tGames\tYear\tCity\tSport\tMedal\n\
//!            A\tUSA-1\tUSA\t2008 Summer\t2008\tBeijing\tSwimming\tGold\n\
//!            B\tUSA-1\tUSA\t2008 Summer\t2008\tBeijing\tJudo\tNA\n";
//! let store = RecordStore::from_reader(tsv.as_bytes()).unwrap();
//!
//! let medals = MedalList::query(&store, "USA", 2008).unwrap();
//! assert_eq!(medals.rows.len(), 1);
//!
//! let report = medals.to_report();
//! assert!(report.render().contains("Total medals: Gold: 1, Silver: 0, Bronze: 0"));
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;

pub use data::{display_name, team_prefix, FieldValue, Medal, RecordStore, ResultRecord};
pub use error::OlympicsError;
pub use output::{pad_center, pad_left, Align, Column, Report, ReportTable};
pub use query::{
    BestYearRow, BestYears, CountryQuery, CountrySummary, CountryTally, EditionTally, MedalAverages,
    MedalList, MedalRow, MedalTally, YearTotals,
};

/// Result type for olympicslib operations
pub type Result<T> = std::result::Result<T, OlympicsError>;
