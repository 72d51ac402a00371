//! CSV sample ingest.
//!
//! Turns a CSV with `x` and `y` columns (any other columns are ignored) into
//! paired sample vectors that are safe to fit.
//!
//! - Missing `x`/`y` header columns are a hard error (exit code 2).
//! - Rows with missing or non-finite values are skipped and reported.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::warn;

use crate::error::AppError;

/// A row-level error encountered during ingest.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: paired samples plus row bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestedSamples {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Load samples from a CSV file.
pub fn load_samples(path: &Path) -> Result<IngestedSamples, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;
    load_samples_from_reader(file)
}

pub fn load_samples_from_reader<R: Read>(source: R) -> Result<IngestedSamples, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);
    let x_idx = required_column(&header_map, "x")?;
    let y_idx = required_column(&header_map, "y")?;

    let mut out = IngestedSamples {
        x: Vec::new(),
        y: Vec::new(),
        row_errors: Vec::new(),
        rows_read: 0,
    };

    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header line; CSV lines are 1-based.
        let line = idx + 2;
        out.rows_read += 1;

        let parsed = result
            .map_err(|e| format!("Unreadable row: {e}"))
            .and_then(|record| Ok((parse_cell(&record, x_idx, "x")?, parse_cell(&record, y_idx, "y")?)));
        match parsed {
            Ok((x, y)) => {
                out.x.push(x);
                out.y.push(y);
            }
            Err(message) => {
                warn!(line, %message, "skipping CSV row");
                out.row_errors.push(RowError { line, message });
            }
        }
    }

    Ok(out)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim().to_ascii_lowercase(), idx))
        .collect()
}

fn required_column(header_map: &HashMap<String, usize>, name: &str) -> Result<usize, AppError> {
    header_map
        .get(name)
        .copied()
        .ok_or_else(|| AppError::new(2, format!("Missing required column: `{name}`")))
}

fn parse_cell(record: &StringRecord, idx: usize, name: &str) -> Result<f64, String> {
    let raw = record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing required value: `{name}`"))?;
    let v = raw
        .parse::<f64>()
        .map_err(|_| format!("Invalid number for `{name}`: '{raw}'"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("Non-finite value for `{name}`: '{raw}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_x_y_columns_in_any_order() {
        let csv = "label, Y ,x\np0,15,0\np1,13015,50\np2,51015,100\n";
        let samples = load_samples_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(samples.x, vec![0.0, 50.0, 100.0]);
        assert_eq!(samples.y, vec![15.0, 13_015.0, 51_015.0]);
        assert_eq!(samples.rows_read, 3);
        assert!(samples.row_errors.is_empty());
    }

    #[test]
    fn skips_bad_rows_and_reports_lines() {
        let csv = "x,y\n1,2\n,3\n2,abc\n3,inf\n4,5\n";
        let samples = load_samples_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(samples.x, vec![1.0, 4.0]);
        assert_eq!(samples.y, vec![2.0, 5.0]);
        assert_eq!(samples.rows_read, 5);
        let lines: Vec<usize> = samples.row_errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![3, 4, 5]);
        assert_eq!(samples.row_errors[0].message, "Missing required value: `x`");
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = load_samples_from_reader("x,z\n1,2\n".as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Missing required column: `y`");
    }
}
