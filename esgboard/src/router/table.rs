use esgboard_core::{EsgError, EsgRecord, ScoreReport, ScoreSource, score_records};

use crate::EsgBoard;

impl EsgBoard {
    /// Score a loaded table with this board's `fill_missing_pillars` setting.
    ///
    /// # Errors
    /// See [`score_table`].
    pub fn score_table(&self, records: &[EsgRecord]) -> Result<ScoreReport, EsgError> {
        score_table(records, self.cfg.fill_missing_pillars)
    }
}

/// Score a loaded table: overall mean, rank, and grade per record.
///
/// Needs no connectors. Records with absent pillars are zero-filled when
/// `fill_missing` is true, otherwise skipped with a warning. Companies keep
/// input order.
///
/// # Errors
/// `InvalidArg` for an empty table; `NotFound` when every record was skipped.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(target = "esgboard::router", skip(records), fields(rows = records.len()))
)]
pub fn score_table(records: &[EsgRecord], fill_missing: bool) -> Result<ScoreReport, EsgError> {
    if records.is_empty() {
        return Err(EsgError::InvalidArg("score table has no rows".into()));
    }
    let (companies, warnings) = score_records(records, &ScoreSource::Table, fill_missing);
    #[cfg(feature = "tracing")]
    for w in &warnings {
        tracing::warn!(warning = %w, "skipped table row");
    }
    if companies.is_empty() {
        return Err(EsgError::not_found("a complete row in the score table"));
    }
    Ok(ScoreReport {
        companies,
        warnings,
    })
}
