//! Tabular reporting and reference complexity curves

use crate::BenchmarkRecord;

/// Formats benchmark records as an aligned text table.
pub fn format_table(records: &[BenchmarkRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>6} {:>14} {:>14} {:>9}\n",
        "N", "Naive [s]", "Fast [s]", "Speedup"
    ));
    out.push_str(&format!("{}\n", "-".repeat(46)));
    for record in records {
        out.push_str(&format!(
            "{:>6} {:>14.6} {:>14.6} {:>8.2}x\n",
            record.size,
            record.naive.as_secs_f64(),
            record.fast.as_secs_f64(),
            record.speedup()
        ));
    }
    out
}

/// Ideal complexity curves scaled to the measured peaks.
///
/// The N^3 curve is normalized so its peak equals the slowest measured
/// naive duration, the N^2 log2 N curve likewise against the fast
/// variant. Rendering them is a display concern; the values here are
/// plain seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCurves {
    pub sizes: Vec<usize>,
    pub cubic: Vec<f64>,
    pub quadratic_log: Vec<f64>,
}

pub fn reference_curves(records: &[BenchmarkRecord]) -> ReferenceCurves {
    let sizes: Vec<usize> = records.iter().map(|r| r.size).collect();
    let cubic_raw: Vec<f64> = sizes.iter().map(|&n| (n as f64).powi(3)).collect();
    let quadratic_log_raw: Vec<f64> = sizes
        .iter()
        .map(|&n| (n as f64).powi(2) * (n as f64).log2())
        .collect();

    let naive_peak = records
        .iter()
        .map(|r| r.naive.as_secs_f64())
        .fold(0.0, f64::max);
    let fast_peak = records
        .iter()
        .map(|r| r.fast.as_secs_f64())
        .fold(0.0, f64::max);

    ReferenceCurves {
        sizes,
        cubic: normalized(&cubic_raw, naive_peak),
        quadratic_log: normalized(&quadratic_log_raw, fast_peak),
    }
}

fn normalized(raw: &[f64], peak: f64) -> Vec<f64> {
    let max = raw.iter().fold(0.0f64, |a, &b| a.max(b));
    if max == 0.0 {
        return vec![0.0; raw.len()];
    }
    raw.iter().map(|&v| v / max * peak).collect()
}
