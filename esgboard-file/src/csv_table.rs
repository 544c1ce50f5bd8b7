use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use async_trait::async_trait;
use esgboard_core::connector::{EsgConnector, EsgProvider};
use esgboard_core::{EsgError, EsgRecord, PillarScores, ScoreTable, normalize_company};

/// Serves pillar scores from a loaded score table.
///
/// Later rows win when a company appears twice.
pub struct CsvConnector {
    rows: HashMap<String, EsgRecord>,
}

impl CsvConnector {
    /// Connector name used for routing and error tagging.
    pub const NAME: &'static str = "esgboard-csv";

    /// Build from already-parsed records.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = EsgRecord>) -> Self {
        let rows = records
            .into_iter()
            .map(|r| (normalize_company(&r.company), r))
            .collect();
        Self { rows }
    }

    /// Parse a CSV score table from a reader.
    ///
    /// # Errors
    /// Propagates `ScoreTable::from_reader` failures.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, EsgError> {
        let table = ScoreTable::from_reader(reader)?;
        Ok(Self::from_records(table.records()))
    }

    /// Load a CSV score table from disk.
    ///
    /// # Errors
    /// Propagates `ScoreTable::from_path` failures.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EsgError> {
        let table = ScoreTable::from_path(path)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(rows = table.len(), "csv connector loaded");
        Ok(Self::from_records(table.records()))
    }

    /// Number of distinct companies served.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no company is served.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl EsgConnector for CsvConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "CSV"
    }

    fn as_esg_provider(&self) -> Option<&dyn EsgProvider> {
        Some(self as &dyn EsgProvider)
    }
}

#[async_trait]
impl EsgProvider for CsvConnector {
    async fn sustainability(&self, company: &str) -> Result<PillarScores, EsgError> {
        let Some(rec) = self.rows.get(&normalize_company(company)) else {
            return Err(EsgError::not_found(format!("esg for {}", company.trim())));
        };
        if rec.scores.complete().is_none() {
            return Err(EsgError::Data(format!(
                "{}: missing {} score",
                rec.company,
                rec.scores.missing().join("/")
            )));
        }
        Ok(rec.scores)
    }
}
