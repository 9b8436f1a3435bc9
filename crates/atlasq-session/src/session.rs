//! The query session: one load, then immutable reads.

use std::collections::HashSet;
use std::path::Path;

use atlasq_core::prelude::{Error, Record, Result};
use atlasq_query::Query;

use crate::reader::{self, LoadOptions};

/// Owns the loaded dataset. Queries borrow it; nothing mutates it.
#[derive(Debug, Clone)]
pub struct Session {
    records: Vec<Record>,
}

impl Session {
    /// Build a session from already-materialized records.
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        validate(&records)?;
        tracing::debug!(rows = records.len(), "dataset loaded");
        Ok(Self { records })
    }

    /// Load the dataset from a headered CSV file.
    pub fn load_csv(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        Self::from_records(reader::read_csv(path.as_ref(), options)?)
    }

    /// Load the dataset from a JSONL file.
    pub fn load_jsonl(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_records(reader::read_jsonl(path.as_ref())?)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Start a query pipeline over the loaded records.
    pub fn query(&self) -> Query<'_> {
        Query::new(&self.records)
    }
}

/// Dataset invariants: unique codes, no negative magnitudes.
fn validate(records: &[Record]) -> Result<()> {
    let mut codes = HashSet::with_capacity(records.len());
    for record in records {
        if !codes.insert(record.code.as_str()) {
            return Err(Error::Load(format!("duplicate record code '{}'", record.code)));
        }
        if record.population < 0 {
            return Err(Error::Load(format!(
                "record '{}': negative population {}",
                record.code, record.population
            )));
        }
        if record.surface_area < 0.0 {
            return Err(Error::Load(format!(
                "record '{}': negative surface area {}",
                record.code, record.surface_area
            )));
        }
    }
    Ok(())
}
