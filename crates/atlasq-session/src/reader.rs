//! Readers producing the in-memory record sequence.
//!
//! CSV is header-driven through serde; empty cells become `None` for the
//! nullable columns. JSONL is one JSON object per line, blank lines
//! skipped. All failures map into `Error::Load`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use atlasq_core::prelude::{Error, Record, Result};

/// Reader configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadOptions {
    /// CSV field delimiter.
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Read all records from a headered CSV file.
pub fn read_csv(path: &Path, options: &LoadOptions) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|e| Error::Load(format!("{}: {}", path.display(), e)))?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .from_reader(file);

    let mut records = Vec::new();
    for row in reader.deserialize::<Record>() {
        let record = row.map_err(|e| Error::Load(format!("{}: {}", path.display(), e)))?;
        records.push(record);
    }
    Ok(records)
}

/// Read all records from a JSONL file (one object per line).
pub fn read_jsonl(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|e| Error::Load(format!("{}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::Load(format!("{}: {}", path.display(), e)))?;
        if line.trim().is_empty() {
            continue;
        }
        let record: Record = serde_json::from_str(&line)
            .map_err(|e| Error::Load(format!("{} line {}: {}", path.display(), idx + 1, e)))?;
        records.push(record);
    }
    Ok(records)
}
