//! Score tables: reading the `Company, Environmental, Social, Governance` CSV
//! and writing it back with derived columns.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use esgboard_types::{EsgError, EsgRecord, PillarScores, ScoredCompany};

/// Columns every input table must carry, in canonical spelling.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Company", "Environmental", "Social", "Governance"];

/// Columns appended to the augmented output.
pub const DERIVED_COLUMNS: [&str; 3] = ["Overall Score", "Rank", "Grade"];

/// One parsed row: the ESG record plus any extra columns, verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Company and pillar scores.
    pub record: EsgRecord,
    /// Values of the non-required columns, aligned with `ScoreTable::extra_headers`.
    pub extra: Vec<String>,
}

/// A loaded score table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreTable {
    /// Headers of columns beyond the required four, in input order.
    pub extra_headers: Vec<String>,
    /// Rows in input order.
    pub rows: Vec<TableRow>,
}

fn csv_err(e: csv::Error) -> EsgError {
    if e.is_io_error() {
        EsgError::Io(e.to_string())
    } else {
        EsgError::Data(e.to_string())
    }
}

fn header_key(h: &str) -> String {
    h.trim_start_matches('\u{feff}').trim().to_ascii_lowercase()
}

fn parse_score(raw: Option<&str>, row: usize, column: &str) -> Result<Option<f64>, EsgError> {
    let Some(v) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    match v.parse::<f64>() {
        Ok(n) if n.is_nan() => Ok(None),
        Ok(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(EsgError::Data(format!(
            "row {row}, column {column}: not a number: {v:?}"
        ))),
    }
}

impl ScoreTable {
    /// Build a table from records with no extra columns.
    #[must_use]
    pub fn from_records(records: Vec<EsgRecord>) -> Self {
        Self {
            extra_headers: Vec::new(),
            rows: records
                .into_iter()
                .map(|record| TableRow {
                    record,
                    extra: Vec::new(),
                })
                .collect(),
        }
    }

    /// Parse a CSV score table.
    ///
    /// Header matching ignores case and surrounding whitespace. Empty numeric
    /// cells become absent pillars.
    ///
    /// # Errors
    /// - `MissingColumns` naming every absent required column.
    /// - `Data` for a non-numeric score cell or an empty company cell.
    /// - `Io`/`Data` for underlying CSV read failures.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, EsgError> {
        let mut rdr = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);
        let headers: StringRecord = rdr.headers().map_err(csv_err)?.clone();
        let keys: Vec<String> = headers.iter().map(header_key).collect();

        let mut idx = [0usize; 4];
        let mut missing = Vec::new();
        for (slot, name) in REQUIRED_COLUMNS.iter().enumerate() {
            match keys.iter().position(|k| *k == name.to_ascii_lowercase()) {
                Some(i) => idx[slot] = i,
                None => missing.push((*name).to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(EsgError::MissingColumns { missing });
        }

        let extra_idx: Vec<usize> = (0..headers.len()).filter(|i| !idx.contains(i)).collect();
        let extra_headers = extra_idx
            .iter()
            .map(|&i| headers.get(i).unwrap_or_default().to_string())
            .collect();

        let mut rows = Vec::new();
        for (n, result) in rdr.records().enumerate() {
            let rec = result.map_err(csv_err)?;
            // header is line 1
            let line = n + 2;
            if rec.iter().all(str::is_empty) {
                continue;
            }
            let company = rec.get(idx[0]).unwrap_or_default().to_string();
            if company.is_empty() {
                return Err(EsgError::Data(format!("row {line}: empty Company")));
            }
            let scores = PillarScores {
                environmental: parse_score(rec.get(idx[1]), line, REQUIRED_COLUMNS[1])?,
                social: parse_score(rec.get(idx[2]), line, REQUIRED_COLUMNS[2])?,
                governance: parse_score(rec.get(idx[3]), line, REQUIRED_COLUMNS[3])?,
            };
            let extra = extra_idx
                .iter()
                .map(|&i| rec.get(i).unwrap_or_default().to_string())
                .collect();
            rows.push(TableRow {
                record: EsgRecord::new(company, scores),
                extra,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(rows = rows.len(), extra = extra_idx.len(), "loaded score table");

        Ok(Self {
            extra_headers,
            rows,
        })
    }

    /// Open and parse a CSV score table from disk.
    ///
    /// # Errors
    /// See [`ScoreTable::from_reader`]; also `Io` when the file cannot be opened.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EsgError> {
        let file = File::open(path.as_ref())
            .map_err(|e| EsgError::Io(format!("{}: {e}", path.as_ref().display())))?;
        Self::from_reader(BufReader::new(file))
    }

    /// The ESG records, in input order.
    #[must_use]
    pub fn records(&self) -> Vec<EsgRecord> {
        self.rows.iter().map(|r| r.record.clone()).collect()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the augmented CSV: the original columns followed by
    /// `Overall Score, Rank, Grade`.
    ///
    /// Each scored company is paired with its source row through
    /// [`ScoredCompany::row`], so `scored` must come from scoring this
    /// table's records. Skipped records have no output line.
    ///
    /// # Errors
    /// Returns `Io` when writing fails.
    pub fn write_scored<W: Write>(
        &self,
        scored: &[ScoredCompany],
        writer: W,
    ) -> Result<(), EsgError> {
        let mut out = WriterBuilder::new().from_writer(writer);
        let header: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .chain(self.extra_headers.iter().map(String::as_str))
            .chain(DERIVED_COLUMNS)
            .collect();
        out.write_record(&header).map_err(csv_err)?;

        for sc in scored {
            let Some(row) = self.rows.get(sc.row) else {
                continue;
            };
            let mut fields = scored_fields(sc);
            let derived = fields.split_off(REQUIRED_COLUMNS.len());
            fields.extend(row.extra.iter().cloned());
            fields.extend(derived);
            out.write_record(&fields).map_err(csv_err)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Write the augmented CSV to `path`.
    ///
    /// # Errors
    /// Returns `Io` when the file cannot be created or written.
    pub fn write_scored_path(
        &self,
        scored: &[ScoredCompany],
        path: impl AsRef<Path>,
    ) -> Result<(), EsgError> {
        let file = File::create(path.as_ref())
            .map_err(|e| EsgError::Io(format!("{}: {e}", path.as_ref().display())))?;
        self.write_scored(scored, BufWriter::new(file))
    }
}

fn scored_fields(sc: &ScoredCompany) -> Vec<String> {
    vec![
        sc.company.clone(),
        format!("{:.2}", sc.environmental),
        format!("{:.2}", sc.social),
        format!("{:.2}", sc.governance),
        format!("{:.2}", sc.overall_score),
        sc.rank.to_string(),
        sc.grade.to_string(),
    ]
}

/// Write scored companies that did not come from a table (e.g. a provider
/// leaderboard) using the required and derived columns only.
///
/// # Errors
/// Returns `Io` when writing fails.
pub fn write_scores<W: Write>(scored: &[ScoredCompany], writer: W) -> Result<(), EsgError> {
    let mut out = WriterBuilder::new().from_writer(writer);
    let header: Vec<&str> = REQUIRED_COLUMNS.iter().copied().chain(DERIVED_COLUMNS).collect();
    out.write_record(&header).map_err(csv_err)?;
    for sc in scored {
        out.write_record(scored_fields(sc)).map_err(csv_err)?;
    }
    out.flush()?;
    Ok(())
}
