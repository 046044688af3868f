//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a computed curve:
//! - model kind + parameter vector
//! - quadrature resolution and upper scale factor
//! - the `(a, value)` samples themselves
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{Curve, CurveFile, ModelKind};
use crate::error::AppError;

/// Build the file representation of a freshly computed curve.
pub fn curve_file(model: ModelKind, params: &[f64], resolution: usize, amax: f64, curve: Curve) -> CurveFile {
    CurveFile {
        tool: "cosmic".to_string(),
        generated: Utc::now(),
        model,
        params: params.to_vec(),
        resolution,
        amax,
        curve,
    }
}

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, file: &CurveFile) -> Result<(), AppError> {
    let out = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(out, file)
        .map_err(|e| AppError::new(2, format!("Failed to write curve JSON: {e}")))?;

    log::debug!("wrote {} samples to {}", file.curve.len(), path.display());
    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let curve: CurveFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid curve JSON: {e}")))?;

    if curve.curve.a.len() != curve.curve.values.len() {
        return Err(AppError::new(
            2,
            format!(
                "Invalid curve JSON: {} scale factors but {} values",
                curve.curve.a.len(),
                curve.curve.values.len()
            ),
        ));
    }
    Ok(curve)
}
