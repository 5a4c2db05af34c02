//! Survey export loading
//!
//! The survey sheet must first be exported to CSV (a header row plus the
//! questionnaire's fixed column layout); `.xlsx` workbooks are not read.
//! Header names are not inspected; columns are taken by position. A wrong
//! column count anywhere is fatal. Cells that are not valid UTF-8 are
//! decoded lossily, with U+FFFD in place of the bad bytes.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use csv::{ByteRecord, StringRecord};

use crate::errors::{Result, SurveyError};
use crate::types::{ResponseRow, StimulusResponse, RESPONSE_COLUMNS};

/// One export row, by position
#[derive(Debug, Deserialize)]
struct SurveyRecord {
    timestamp: Option<String>,
    participant_id: Option<String>,
    description_1: Option<String>,
    adjectives_1: Option<String>,
    description_2: Option<String>,
    adjectives_2: Option<String>,
    description_3: Option<String>,
    adjectives_3: Option<String>,
    description_4: Option<String>,
    adjectives_4: Option<String>,
    description_5: Option<String>,
    adjectives_5: Option<String>,
    description_6: Option<String>,
    adjectives_6: Option<String>,
    familiarity: Option<String>,
    realism: Option<String>,
    education: Option<String>,
}

impl From<SurveyRecord> for ResponseRow {
    fn from(record: SurveyRecord) -> Self {
        let pair = |description, adjectives| StimulusResponse {
            description,
            adjectives,
        };
        ResponseRow {
            timestamp: record.timestamp,
            participant_id: record.participant_id,
            responses: vec![
                pair(record.description_1, record.adjectives_1),
                pair(record.description_2, record.adjectives_2),
                pair(record.description_3, record.adjectives_3),
                pair(record.description_4, record.adjectives_4),
                pair(record.description_5, record.adjectives_5),
                pair(record.description_6, record.adjectives_6),
            ],
            familiarity: record.familiarity,
            realism: record.realism,
            education: record.education,
        }
    }
}

/// Reads every response row before analysis starts
#[derive(Debug, Clone, Copy, Default)]
pub struct SurveyLoader;

impl SurveyLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load the export at `path`.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Vec<ResponseRow>> {
        let path = path.as_ref();
        let rows = self.load(File::open(path)?)?;
        info!(path = %path.display(), rows = rows.len(), "Loaded survey responses");
        Ok(rows)
    }

    /// Load an export from any reader.
    pub fn load<R: Read>(&self, reader: R) -> Result<Vec<ResponseRow>> {
        let mut csv = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let found = csv.byte_headers()?.len();
        if found != RESPONSE_COLUMNS {
            return Err(SurveyError::SchemaMismatch {
                expected: RESPONSE_COLUMNS,
                found,
            });
        }

        let mut rows = Vec::new();
        for record in csv.byte_records() {
            let record = decode_lossy(&record?);
            let parsed: SurveyRecord = record.deserialize(None)?;
            rows.push(ResponseRow::from(parsed));
        }
        debug!(rows = rows.len(), "Parsed survey records");
        Ok(rows)
    }
}

fn decode_lossy(record: &ByteRecord) -> StringRecord {
    let mut decoded = StringRecord::with_capacity(record.as_slice().len(), record.len());
    for field in record.iter() {
        decoded.push_field(&String::from_utf8_lossy(field));
    }
    decoded
}
