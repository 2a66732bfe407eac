//! Scale normalization for metric vectors.
//!
//! Two degenerate-case conventions exist in this crate: a constant vector
//! min-max scales to all zeros here, while `factors::normalize_distance`
//! maps a constant distance vector to all ones. Callers depend on each.

/// Min-max normalize a vector to [0, 1] via `(x - min) / (max - min)`.
///
/// A constant or single-element vector has no spread, so every entry maps
/// to 0 rather than dividing by zero.
pub fn min_max_scale(values: &[f64]) -> Vec<f64> {
    let Some(min) = fold_min(values) else {
        return Vec::new();
    };
    let max = fold_max(values).unwrap_or(min);
    let range = max - min;
    if range == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|x| (x - min) / range).collect()
}

/// Z-score normalize a vector using its own mean and population standard
/// deviation. Zero deviation yields all zeros.
pub fn z_score_scale(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64;
    z_score_scale_with(values, mean, variance.sqrt())
}

/// Z-score normalize against externally supplied moments, for callers that
/// standardize against a reference population rather than the sample itself.
pub fn z_score_scale_with(values: &[f64], mean: f64, std_dev: f64) -> Vec<f64> {
    if std_dev == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|x| (x - mean) / std_dev).collect()
}

fn fold_min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

fn fold_max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}
