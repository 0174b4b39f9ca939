//! Medals won by one country in one year.

use serde::Serialize;
use tracing::debug;

use crate::data::{Medal, RecordStore};
use crate::error::OlympicsError;
use crate::Result;

use super::tally::{CountryQuery, MedalTally};

/// How many entries the medal list shows.
pub const MEDAL_LIST_LIMIT: usize = 10;

/// One displayed medal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedalRow {
    pub name: String,
    pub sport: String,
    pub medal: Medal,
}

/// A country's medal entries for a year.
///
/// `rows` holds the first [`MEDAL_LIST_LIMIT`] matches in file order (not the
/// best ten); `total` counts every match.
#[derive(Debug, Clone, Serialize)]
pub struct MedalList {
    pub country: String,
    pub year: u32,
    pub rows: Vec<MedalRow>,
    pub total: MedalTally,
    /// Number of matching entries, including the ones not displayed
    pub matched: usize,
}

impl MedalList {
    pub fn query(store: &RecordStore, country: &str, year: u32) -> Result<Self> {
        let countries = CountryQuery::new(country);
        let entries: Vec<_> = store
            .iter()
            .filter(|r| countries.matches(r) && r.year == year && r.has_medal())
            .collect();

        if entries.is_empty() {
            return Err(OlympicsError::EmptyResult);
        }
        debug!(country, year, matched = entries.len(), "medal list");

        let rows = entries
            .iter()
            .take(MEDAL_LIST_LIMIT)
            .map(|r| MedalRow {
                name: r.name.clone(),
                sport: r.sport.clone(),
                medal: r.medal,
            })
            .collect();
        let total = entries.iter().map(|r| r.medal).collect();

        Ok(MedalList {
            country: country.to_string(),
            year,
            rows,
            total,
            matched: entries.len(),
        })
    }
}
