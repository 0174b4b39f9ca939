//! Every country's medal tally in one year.

use serde::Serialize;
use tracing::debug;

use crate::data::RecordStore;
use crate::error::OlympicsError;
use crate::Result;

use super::tally::MedalTally;
use super::Grouped;

/// One country's row in the yearly totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryTally {
    /// Display name derived from the team
    pub country: String,
    pub medals: MedalTally,
}

/// Medal tallies for a year, one per country in first-encountered order.
#[derive(Debug, Clone, Serialize)]
pub struct YearTotals {
    pub year: u32,
    pub countries: Vec<CountryTally>,
}

impl YearTotals {
    pub fn query(store: &RecordStore, year: u32) -> Result<Self> {
        let mut grouped: Grouped<&str, MedalTally> = Grouped::new();
        for record in store.iter().filter(|r| r.year == year && r.has_medal()) {
            grouped.entry(record.display_name(), MedalTally::new).add(record.medal);
        }

        let countries: Vec<CountryTally> = grouped
            .into_entries()
            .into_iter()
            .map(|(country, medals)| CountryTally {
                country: country.to_string(),
                medals,
            })
            .collect();

        if countries.is_empty() {
            return Err(OlympicsError::EmptyResult);
        }
        debug!(year, countries = countries.len(), "year totals");

        Ok(YearTotals { year, countries })
    }
}
