//! The in-memory record store and its tab-delimited loader.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::OlympicsError;
use crate::Result;

use super::record::{FieldValue, Medal, ResultRecord};

/// Columns the reports read; every other column is kept as an opaque field.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Name", "Team", "NOC", "Year", "Games", "City", "Sport", "Medal",
];

/// Read-only collection of result records, in file order.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ResultRecord>,
}

/// Header positions of the required columns.
struct ColumnIndex {
    name: usize,
    team: usize,
    noc: usize,
    year: usize,
    games: usize,
    city: usize,
    sport: usize,
    medal: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| OlympicsError::MissingColumn(column.to_string()))
        };

        Ok(ColumnIndex {
            name: find("Name")?,
            team: find("Team")?,
            noc: find("NOC")?,
            year: find("Year")?,
            games: find("Games")?,
            city: find("City")?,
            sport: find("Sport")?,
            medal: find("Medal")?,
        })
    }

    fn is_required(&self, position: usize) -> bool {
        [
            self.name, self.team, self.noc, self.year, self.games, self.city, self.sport,
            self.medal,
        ]
        .contains(&position)
    }
}

impl RecordStore {
    /// Wrap already-typed records.
    pub fn new(records: Vec<ResultRecord>) -> Self {
        Self { records }
    }

    /// Load a results file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| OlympicsError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), records = store.len(), "loaded results table");
        Ok(store)
    }

    /// Parse a tab-delimited table whose first line is the header.
    ///
    /// Quote characters carry no meaning; every row must have exactly as many
    /// fields as the header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .quoting(false)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let index = ColumnIndex::from_headers(&headers)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            records.push(to_record(&headers, &index, &row)?);
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a ResultRecord;
    type IntoIter = std::slice::Iter<'a, ResultRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn to_record(headers: &StringRecord, index: &ColumnIndex, row: &StringRecord) -> Result<ResultRecord> {
    let line = row.position().map(|p| p.line()).unwrap_or(0);
    // Row length is already checked by the reader, so indexing the row is safe.
    let field = |i: usize| row[i].to_string();

    let year = row[index.year]
        .parse::<u32>()
        .map_err(|_| OlympicsError::Parse {
            line,
            message: format!("Year '{}' is not an integer", &row[index.year]),
        })?;
    let medal = row[index.medal]
        .parse::<Medal>()
        .map_err(|message| OlympicsError::Parse { line, message })?;

    let extra = headers
        .iter()
        .zip(row.iter())
        .enumerate()
        .filter(|(i, _)| !index.is_required(*i))
        .map(|(_, (column, raw))| (column.to_string(), FieldValue::parse(raw)))
        .collect();

    Ok(ResultRecord {
        name: field(index.name),
        team: field(index.team),
        noc: field(index.noc),
        year,
        games: field(index.games),
        city: field(index.city),
        sport: field(index.sport),
        medal,
        extra,
    })
}
