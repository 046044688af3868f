//! Formatted terminal output.
//!
//! We keep formatting code in one place so the numerical code stays clean and
//! output changes are localized.

use crate::domain::{Curve, CurveFile, ModelKind, ModulusPoint};

/// Header describing the model and its parameters.
pub fn format_model_summary(model: ModelKind, params: &[f64], resolution: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== cosmic - {} model ===\n", model.display_name()));

    let named: Vec<String> = model
        .param_names()
        .iter()
        .zip(params)
        .map(|(name, v)| format!("{name}={v}"))
        .collect();
    out.push_str(&format!("Parameters: {}\n", named.join(", ")));
    if params.len() > model.param_len() {
        out.push_str(&format!(
            "  (ignored trailing: {})\n",
            fmt_vec(&params[model.param_len()..])
        ));
    }
    out.push_str(&format!("Resolution: N={resolution}\n"));
    out
}

/// Format a Hubble diagram as a two-column table.
pub fn format_modulus_table(points: &[ModulusPoint]) -> String {
    let mut out = String::new();
    out.push_str(format!("{:>12} {:>14}", "z", "mu").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<12} {:-<14}", "", "").trim_end());
    out.push('\n');

    for p in points {
        out.push_str(&format!("{:>12.5} {:>14.6}\n", p.z, p.mu));
    }
    out
}

/// Format a curve, printing every `every`-th row plus the last one.
pub fn format_curve_table(curve: &Curve, every: usize) -> String {
    let every = every.max(1);
    let mut out = String::new();
    out.push_str(format!("{:>12} {:>16}", "a", curve.kind.value_label()).trim_end());
    out.push('\n');
    out.push_str(format!("{:-<12} {:-<16}", "", "").trim_end());
    out.push('\n');

    let last = curve.len().saturating_sub(1);
    for (i, (a, v)) in curve.iter().enumerate() {
        if i % every == 0 || i == last {
            out.push_str(&format!("{a:>12.6} {:>16}\n", fmt_value(v)));
        }
    }
    out
}

/// Summary of a saved curve file followed by its table.
pub fn format_curve_file(file: &CurveFile, every: usize) -> String {
    let mut out = format_model_summary(file.model, &file.params, file.resolution);
    out.push_str(&format!(
        "Curve: {:?} up to a={} (generated {} by {})\n\n",
        file.curve.kind,
        file.amax,
        file.generated.to_rfc3339(),
        file.tool
    ));
    out.push_str(&format_curve_table(&file.curve, every));
    out
}

fn fmt_value(v: f64) -> String {
    // Omega spans many decades near a -> 0.
    if v != 0.0 && (v.abs() >= 1e6 || v.abs() < 1e-4) {
        format!("{v:.6e}")
    } else {
        format!("{v:.8}")
    }
}

fn fmt_vec(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", parts.join(", "))
}
