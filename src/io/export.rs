//! Export curves and Hubble diagrams to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::{Curve, ModelKind, ModulusPoint};
use crate::error::AppError;

/// Write a `(z, mu)` table.
pub fn write_modulus_csv(path: &Path, model: ModelKind, points: &[ModulusPoint]) -> Result<(), AppError> {
    let mut file = create(path)?;

    writeln!(file, "model,z,mu").map_err(header_err)?;
    for p in points {
        writeln!(file, "{},{:.10},{:.10}", model.display_name(), p.z, p.mu).map_err(row_err)?;
    }
    file.flush().map_err(row_err)?;
    Ok(())
}

/// Write an `(a, value)` curve; the value column is named after the curve kind.
pub fn write_curve_csv(path: &Path, curve: &Curve) -> Result<(), AppError> {
    let mut file = create(path)?;

    writeln!(file, "a,{}", curve.kind.value_label()).map_err(header_err)?;
    for (a, v) in curve.iter() {
        writeln!(file, "{a:.10},{v:.10e}").map_err(row_err)?;
    }
    file.flush().map_err(row_err)?;
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>, AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    Ok(BufWriter::new(file))
}

fn header_err(e: std::io::Error) -> AppError {
    AppError::new(2, format!("Failed to write export CSV header: {e}"))
}

fn row_err(e: std::io::Error) -> AppError {
    AppError::new(2, format!("Failed to write export CSV row: {e}"))
}
