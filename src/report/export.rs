//! Flat export table
//!
//! Six interleaved columns per scope (`Free`, `Adj`, `Noun` × `Word`,
//! `Freq`) for every stimulus and then `Overall`. All columns are padded
//! with empty strings to the length of the longest ranked table.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use super::frequency::FrequencyTable;
use crate::aggregate::{StimulusAccumulator, SurveyAggregate};
use crate::errors::Result;
use crate::types::ItemKind;

/// Column-major table ready to be written as CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    headers: Vec<String>,
    columns: Vec<Vec<String>>,
    max_rows: usize,
}

impl ExportTable {
    /// Rank every counter of `aggregate` and lay the tables side by side.
    pub fn from_aggregate(aggregate: &SurveyAggregate) -> Self {
        let mut scopes: Vec<(String, &StimulusAccumulator)> = aggregate
            .stimuli()
            .map(|(stimulus, acc)| (stimulus.label(), acc))
            .collect();
        scopes.push(("Overall".to_string(), aggregate.overall()));

        let ranked: Vec<(String, ItemKind, FrequencyTable)> = scopes
            .iter()
            .flat_map(|(label, acc)| {
                ItemKind::ALL
                    .into_iter()
                    .map(move |kind| (label.clone(), kind, acc.counter(kind).rank()))
            })
            .collect();

        let max_rows = ranked.iter().map(|(_, _, t)| t.len()).max().unwrap_or(0);

        let mut headers = Vec::with_capacity(ranked.len() * 2);
        let mut columns = Vec::with_capacity(ranked.len() * 2);
        for (label, kind, table) in &ranked {
            headers.push(format!("{label}_{}_Word", kind.as_str()));
            headers.push(format!("{label}_{}_Freq", kind.as_str()));

            let (words, freqs) = padded_columns(table, max_rows);
            columns.push(words);
            columns.push(freqs);
        }

        debug!(columns = headers.len(), rows = max_rows, "Built export table");
        Self {
            headers,
            columns,
            max_rows,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows (the longest ranked table)
    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Column by header name.
    pub fn column(&self, header: &str) -> Option<&[String]> {
        self.headers
            .iter()
            .position(|h| h == header)
            .map(|i| self.columns[i].as_slice())
    }

    /// Data rows, top rank first.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        (0..self.max_rows).map(move |r| self.columns.iter().map(|c| c[r].as_str()).collect())
    }

    /// Write header and rows as CSV.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(&self.headers)?;
        for row in self.rows() {
            csv.write_record(&row)?;
        }
        csv.flush()?;
        Ok(())
    }

    /// Write the table to `path`, replacing any existing file.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.write_csv(File::create(path)?)?;
        info!(path = %path.display(), rows = self.max_rows, "Wrote frequency table");
        Ok(())
    }
}

fn padded_columns(table: &FrequencyTable, len: usize) -> (Vec<String>, Vec<String>) {
    let mut words = Vec::with_capacity(len);
    let mut freqs = Vec::with_capacity(len);
    for (word, count) in table.most_common(len) {
        words.push(word.clone());
        freqs.push(count.to_string());
    }
    words.resize(len, String::new());
    freqs.resize(len, String::new());
    (words, freqs)
}
