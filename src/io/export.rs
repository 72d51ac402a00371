//! Export per-sample results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::Residual;
use crate::error::AppError;

/// Write per-sample results to a CSV file.
pub fn write_results_csv(path: &Path, residuals: &[Residual]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_results(file, residuals)
}

fn write_results<W: Write>(mut out: W, residuals: &[Residual]) -> Result<(), AppError> {
    writeln!(out, "x,y_obs,y_fit,residual")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for r in residuals {
        writeln!(out, "{:.10},{:.10},{:.10},{:.10}", r.x, r.y_obs, r.y_fit, r.residual)
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let rows = [
            Residual {
                x: 0.0,
                y_obs: 1.0,
                y_fit: 0.5,
                residual: 0.5,
            },
            Residual {
                x: 1.0,
                y_obs: 2.0,
                y_fit: 2.25,
                residual: -0.25,
            },
        ];
        let mut buf = Vec::new();
        write_results(&mut buf, &rows).unwrap();
        let txt = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines[0], "x,y_obs,y_fit,residual");
        assert_eq!(lines[2], "1.0000000000,2.0000000000,2.2500000000,-0.2500000000");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn exported_csv_is_not_a_sample_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let rows = [Residual {
            x: 3.0,
            y_obs: 9.0,
            y_fit: 9.0,
            residual: 0.0,
        }];
        write_results_csv(&path, &rows).unwrap();

        // The export carries `x` but not `y`, so it is not a valid sample file.
        let err = crate::io::load_samples(&path).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
