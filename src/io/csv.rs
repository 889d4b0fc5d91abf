//! Two-column CSV ingestion.
//!
//! ## Purpose
//!
//! This module loads a [`Dataset`] from comma-separated text with two fields
//! per row: x first, y second. An optional first row of two non-numeric
//! tokens is taken as the axis labels.
//!
//! ## Design notes
//!
//! * **Header detection**: The first record is a header only when neither of
//!   its fields is a finite number, so `nan,inf` names the axes. Otherwise it
//!   is read as data.
//! * **Line records**: Quoting is off. Every physical line is one record,
//!   split on the comma, so a stray `"` only spoils its own line.
//! * **Lenient rows**: Rows that do not hold exactly two finite numbers are
//!   skipped and listed in the [`IngestReport`]; they never abort a load.
//! * **All or nothing**: The dataset is only replaced once at least one row
//!   parsed. A failed load leaves the previous samples and labels untouched.
//! * **Reader**: Built on `csv::Reader` with trimming, flexible record
//!   lengths, no quoting, and blank-line skipping.
//!
//! ## Non-goals
//!
//! * This module does not support delimiters other than the comma.
//! * This module does not write CSV.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

// External dependencies
use ::csv::{ReaderBuilder, StringRecord, Trim};
use num_traits::Float;

// Internal dependencies
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::LinregError;

// ============================================================================
// Report
// ============================================================================

/// Why a row was left out of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The row did not have exactly two fields.
    FieldCount(usize),

    /// A field could not be parsed as a number.
    NotNumeric,

    /// A field parsed to NaN or infinity.
    NonFinite,

    /// The reader rejected the record (e.g. invalid UTF-8).
    Malformed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::FieldCount(n) => write!(f, "expected 2 fields, found {}", n),
            SkipReason::NotNumeric => write!(f, "field is not a number"),
            SkipReason::NonFinite => write!(f, "field is not a finite number"),
            SkipReason::Malformed(reason) => write!(f, "malformed record: {}", reason),
        }
    }
}

/// A row that was skipped during ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based line number in the source.
    pub line: u64,

    /// Raw row content, fields re-joined with commas.
    pub content: String,

    /// Why the row was skipped.
    pub reason: SkipReason,
}

impl fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: Invalid data in line {}: {} ({})",
            self.line, self.content, self.reason
        )
    }
}

/// Outcome of a successful ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestReport {
    /// Name of the source (file path or caller-supplied name).
    pub source: String,

    /// Number of samples loaded.
    pub rows_loaded: usize,

    /// Labels taken from the header row, if one was detected.
    pub header: Option<(String, String)>,

    /// Rows left out, in source order.
    pub skipped: Vec<SkippedRow>,
}

impl IngestReport {
    /// Whether any row was skipped.
    pub fn has_warnings(&self) -> bool {
        !self.skipped.is_empty()
    }
}

// ============================================================================
// Dataset Ingestion
// ============================================================================

impl<T: Float> Dataset<T> {
    /// Replace the dataset with the contents of a CSV file.
    ///
    /// # Errors
    ///
    /// * [`LinregError::Ingestion`] when the file cannot be opened or read.
    /// * [`LinregError::EmptyDataset`] when no valid row was found.
    pub fn ingest_path<P: AsRef<Path>>(&mut self, path: P) -> Result<IngestReport, LinregError> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let file = File::open(path).map_err(|e| LinregError::Ingestion {
            source: source.clone(),
            reason: e.to_string(),
        })?;
        self.ingest_reader(file, &source)
    }

    /// Replace the dataset with CSV text read from `reader`.
    ///
    /// `source` names the input in errors and in the returned report.
    pub fn ingest_reader<R: Read>(
        &mut self,
        reader: R,
        source: &str,
    ) -> Result<IngestReport, LinregError> {
        let table = parse_table::<T, R>(reader, source)?;

        if table.x.is_empty() {
            log::debug!("no valid rows in {}", source);
            return Err(LinregError::EmptyDataset);
        }

        let report = IngestReport {
            source: source.to_string(),
            rows_loaded: table.x.len(),
            header: table.header.clone(),
            skipped: table.skipped,
        };
        self.replace(table.x, table.y, table.header);

        log::debug!(
            "loaded {} rows from {} ({} skipped)",
            report.rows_loaded,
            source,
            report.skipped.len()
        );
        Ok(report)
    }

    /// Replace the dataset with CSV text held in memory.
    pub fn ingest_str(&mut self, text: &str) -> Result<IngestReport, LinregError> {
        self.ingest_reader(text.as_bytes(), "<string>")
    }
}

// ============================================================================
// Parsing
// ============================================================================

struct ParsedTable<T> {
    x: Vec<T>,
    y: Vec<T>,
    header: Option<(String, String)>,
    skipped: Vec<SkippedRow>,
}

fn parse_table<T: Float, R: Read>(reader: R, source: &str) -> Result<ParsedTable<T>, LinregError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .quoting(false)
        .from_reader(reader);

    let mut table = ParsedTable {
        x: Vec::new(),
        y: Vec::new(),
        header: None,
        skipped: Vec::new(),
    };
    let mut first = true;

    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) if err.is_io_error() => {
                return Err(LinregError::Ingestion {
                    source: source.to_string(),
                    reason: err.to_string(),
                });
            }
            Err(err) => {
                let line = err.position().map_or(0, |p| p.line());
                skip(&mut table, line, String::new(), SkipReason::Malformed(err.to_string()));
                first = false;
                continue;
            }
        };
        let line = record.position().map_or(0, |p| p.line());

        if first {
            first = false;
            if let Some(labels) = header_labels(&record) {
                table.header = Some(labels);
                continue;
            }
        }

        match parse_row::<T>(&record) {
            Ok((x, y)) => {
                table.x.push(x);
                table.y.push(y);
            }
            Err(reason) => skip(&mut table, line, join_fields(&record), reason),
        }
    }

    Ok(table)
}

fn skip<T>(table: &mut ParsedTable<T>, line: u64, content: String, reason: SkipReason) {
    log::debug!("skipping line {}: {}", line, reason);
    table.skipped.push(SkippedRow {
        line,
        content,
        reason,
    });
}

/// Two fields that are not finite numbers form a header.
fn header_labels(record: &StringRecord) -> Option<(String, String)> {
    if record.len() != 2 {
        return None;
    }
    let (a, b) = (record.get(0)?, record.get(1)?);
    if !is_finite_number(a) && !is_finite_number(b) {
        Some((a.to_string(), b.to_string()))
    } else {
        None
    }
}

fn is_finite_number(field: &str) -> bool {
    field.parse::<f64>().is_ok_and(f64::is_finite)
}

fn parse_row<T: Float>(record: &StringRecord) -> Result<(T, T), SkipReason> {
    if record.len() != 2 {
        return Err(SkipReason::FieldCount(record.len()));
    }
    let x = parse_field(&record[0])?;
    let y = parse_field(&record[1])?;
    Ok((x, y))
}

fn parse_field<T: Float>(field: &str) -> Result<T, SkipReason> {
    let value: f64 = field.parse().map_err(|_| SkipReason::NotNumeric)?;
    if !value.is_finite() {
        return Err(SkipReason::NonFinite);
    }
    match T::from(value) {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(SkipReason::NonFinite),
    }
}

fn join_fields(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}
