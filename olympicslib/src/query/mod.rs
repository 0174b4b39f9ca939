//! Query processing: filter, group and aggregate records.
//!
//! This module handles the second stage of the pipeline - turning the raw
//! [`RecordStore`](crate::RecordStore) into one result per report:
//!
//! - **MedalList**: a country's medal entries in one year (first 10 shown)
//! - **YearTotals**: Gold/Silver/Bronze tallies per country in one year
//! - **BestYears**: each country's year(s) with the most medals
//! - **CountrySummary**: first appearance, best/worst edition, averages
//!
//! Every query fails with [`OlympicsError::EmptyResult`](crate::OlympicsError)
//! when its filter matches nothing. Groups always keep the order in which
//! their keys were first encountered while scanning the store.
//!
//! ## Example
//!
//! ```rust,ignore
//! use olympicslib::query::YearTotals;
//!
//! let totals = YearTotals::query(&store, 2008)?;
//! for country in &totals.countries {
//!     println!("{}: {}", country.country, country.medals);
//! }
//! ```

pub mod medals;
pub mod overall;
pub mod summary;
pub mod tally;
pub mod totals;

pub use medals::{MedalList, MedalRow, MEDAL_LIST_LIMIT};
pub use overall::{BestYearRow, BestYears};
pub use summary::{CountrySummary, EditionTally, MedalAverages};
pub use tally::{CountryQuery, MedalTally};
pub use totals::{CountryTally, YearTotals};

use std::collections::HashMap;
use std::hash::Hash;

/// Groups values by key, iterating in first-encountered key order.
#[derive(Debug)]
pub(crate) struct Grouped<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K: Eq + Hash + Clone, V> Grouped<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Value for `key`, inserting `default()` at the end if the key is new.
    pub(crate) fn entry(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                self.entries.push((key.clone(), default()));
                self.index.insert(key, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[position].1
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub(crate) fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}
