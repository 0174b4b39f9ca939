//! Shared building blocks: medal tallies and country matching.

use serde::Serialize;
use std::fmt;
use std::ops::AddAssign;

use crate::data::{Medal, ResultRecord};

/// Gold/Silver/Bronze counts. `NA` entries are never counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MedalTally {
    pub gold: u64,
    pub silver: u64,
    pub bronze: u64,
}

impl MedalTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one medal; `Medal::None` is ignored.
    pub fn add(&mut self, medal: Medal) {
        match medal {
            Medal::Gold => self.gold += 1,
            Medal::Silver => self.silver += 1,
            Medal::Bronze => self.bronze += 1,
            Medal::None => {}
        }
    }

    pub fn total(&self) -> u64 {
        self.gold + self.silver + self.bronze
    }
}

impl FromIterator<Medal> for MedalTally {
    fn from_iter<I: IntoIterator<Item = Medal>>(iter: I) -> Self {
        let mut tally = Self::new();
        for medal in iter {
            tally.add(medal);
        }
        tally
    }
}

impl AddAssign for MedalTally {
    fn add_assign(&mut self, other: Self) {
        self.gold += other.gold;
        self.silver += other.silver;
        self.bronze += other.bronze;
    }
}

impl fmt::Display for MedalTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gold: {}, Silver: {}, Bronze: {}",
            self.gold, self.silver, self.bronze
        )
    }
}

/// Country tokens as typed by the user: NOC codes or team names.
///
/// A record matches when any token equals its NOC, its team prefix
/// (`"Serbia/Montenegro"` for `"Serbia/Montenegro-2"`). The display name is
/// for grouping only; `"Serbia"` does not match `"Serbia/Montenegro-2"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryQuery {
    tokens: Vec<String>,
}

impl CountryQuery {
    /// Match a single country.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            tokens: vec![token.into()],
        }
    }

    /// Match any of several countries.
    pub fn any_of<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn matches(&self, record: &ResultRecord) -> bool {
        self.tokens.iter().any(|token| {
            token == &record.noc || token == record.team_prefix()
        })
    }
}
