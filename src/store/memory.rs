use super::types::{Record, Rows};

use anyhow::{Context, Result};
use std::path::Path;

/// Immutable, in-memory collection of records.
///
/// Records keep the order they had in the source document; that order is what
/// "as is" sorting and sort ties fall back to.
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parses an XML document of `<root><row>...</row></root>` into a store.
    pub fn from_xml_str(xml: &str) -> Result<Self> {
        let rows: Rows = quick_xml::de::from_str(xml).context("Failed to parse record XML")?;
        let records: Vec<Record> = rows.rows.into_iter().map(Record::from).collect();

        Ok(Self::new(records))
    }

    /// Reads and parses the dataset at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let xml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset {}", path.display()))?;

        let store = Self::from_xml_str(&xml)
            .with_context(|| format!("Invalid dataset {}", path.display()))?;

        tracing::info!("Loaded {} records from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
