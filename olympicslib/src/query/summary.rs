//! Single-country summary used by the interactive mode.

use serde::Serialize;
use tracing::debug;

use crate::data::RecordStore;
use crate::error::OlympicsError;
use crate::Result;

use super::tally::{CountryQuery, MedalTally};
use super::Grouped;

/// Medal tally of one edition (a distinct `Games` value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditionTally {
    pub games: String,
    pub medals: MedalTally,
}

/// Everything the interactive report says about one country.
#[derive(Debug, Clone, Serialize)]
pub struct CountrySummary {
    /// Display name of the first matching record
    pub country: String,
    pub first_year: u32,
    /// City of the first record (in file order) from `first_year`
    pub first_city: String,
    /// Every edition the country took part in, in first-encountered order
    pub editions: Vec<EditionTally>,
    pub best: EditionTally,
    pub worst: EditionTally,
    pub average: MedalAverages,
}

/// Per-edition medal averages, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MedalAverages {
    pub gold: f64,
    pub silver: f64,
    pub bronze: f64,
}

impl CountrySummary {
    /// Summarize every entry of `country`, medal or not.
    pub fn query(store: &RecordStore, country: &str) -> Result<Self> {
        let query = CountryQuery::new(country);
        let entries: Vec<_> = store.iter().filter(|r| query.matches(r)).collect();

        let (first, first_year) = match entries.iter().map(|r| r.year).min() {
            Some(year) => (entries[0], year),
            None => return Err(OlympicsError::EmptyResult),
        };
        let first_city = entries
            .iter()
            .find(|r| r.year == first_year)
            .map(|r| r.city.clone())
            .unwrap_or_default();

        let mut grouped: Grouped<&str, MedalTally> = Grouped::new();
        for record in &entries {
            grouped.entry(record.games.as_str(), MedalTally::new).add(record.medal);
        }
        let editions: Vec<EditionTally> = grouped
            .into_entries()
            .into_iter()
            .map(|(games, medals)| EditionTally {
                games: games.to_string(),
                medals,
            })
            .collect();

        let ranked = rank_editions(&editions);
        let best = ranked[0].clone();
        let worst = ranked[ranked.len() - 1].clone();
        let average = MedalAverages::of(&editions);

        debug!(
            country,
            entries = entries.len(),
            editions = editions.len(),
            "country summary"
        );

        Ok(CountrySummary {
            country: first.display_name().to_string(),
            first_year,
            first_city,
            editions,
            best,
            worst,
            average,
        })
    }
}

/// Editions ordered by total medals descending; equal totals fall back to the
/// games label, also descending.
fn rank_editions(editions: &[EditionTally]) -> Vec<EditionTally> {
    let mut ranked = editions.to_vec();
    ranked.sort_by(|a, b| {
        (b.medals.total(), &b.games).cmp(&(a.medals.total(), &a.games))
    });
    ranked
}

impl MedalAverages {
    fn of(editions: &[EditionTally]) -> Self {
        let count = editions.len().max(1) as f64;
        let mut sum = MedalTally::new();
        for edition in editions {
            sum += edition.medals;
        }
        MedalAverages {
            gold: round2(sum.gold as f64 / count),
            silver: round2(sum.silver as f64 / count),
            bronze: round2(sum.bronze as f64 / count),
        }
    }
}

/// Two-decimal rounding with exact halves going to the even neighbour,
/// so 0.125 becomes 0.12 and 0.375 becomes 0.38.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
