//! Best-performing year(s) for each of several countries.

use serde::Serialize;
use tracing::debug;

use crate::data::RecordStore;
use crate::error::OlympicsError;
use crate::Result;

use super::tally::CountryQuery;
use super::Grouped;

/// A year in which a country reached its maximum medal count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestYearRow {
    pub noc: String,
    /// Display name taken from the NOC's first matching record
    pub country: String,
    pub year: u32,
    pub medals: u64,
}

/// Best years per NOC. Years tied for a NOC's maximum all appear.
#[derive(Debug, Clone, Serialize)]
pub struct BestYears {
    pub rows: Vec<BestYearRow>,
}

struct NocYears<'a> {
    country: &'a str,
    years: Grouped<u32, u64>,
}

impl BestYears {
    pub fn query<S: AsRef<str>>(store: &RecordStore, countries: &[S]) -> Result<Self> {
        let query = CountryQuery::any_of(countries.iter().map(|c| c.as_ref().to_string()));

        let mut by_noc: Grouped<&str, NocYears> = Grouped::new();
        for record in store.iter().filter(|r| query.matches(r) && r.has_medal()) {
            let entry = by_noc.entry(record.noc.as_str(), || NocYears {
                country: record.display_name(),
                years: Grouped::new(),
            });
            *entry.years.entry(record.year, || 0) += 1;
        }

        let mut rows = Vec::new();
        for (noc, noc_years) in by_noc.into_entries() {
            let best = noc_years.years.values().copied().max().unwrap_or(0);
            rows.extend(
                noc_years
                    .years
                    .into_entries()
                    .into_iter()
                    .filter(|(_, medals)| *medals == best)
                    .map(|(year, medals)| BestYearRow {
                        noc: noc.to_string(),
                        country: noc_years.country.to_string(),
                        year,
                        medals,
                    }),
            );
        }

        if rows.is_empty() {
            return Err(OlympicsError::EmptyResult);
        }
        debug!(countries = query.tokens().len(), rows = rows.len(), "best years");

        Ok(BestYears { rows })
    }
}
