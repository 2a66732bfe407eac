//! Weighted aggregation of factor scores into a final viability index.

use super::error::ScoringError;

/// Dot product of one site's factor scores with the criterion weights.
pub fn weighted_score(factor_scores: &[f64], weights: &[f64]) -> Result<f64, ScoringError> {
    ScoringError::length_check(factor_scores.len(), weights.len())?;
    Ok(factor_scores
        .iter()
        .zip(weights)
        .map(|(score, weight)| score * weight)
        .sum())
}

/// 2-D form: one row per criterion, one column per site. Returns the
/// aggregate score of every site at once.
///
/// Row count must match the weight count and all rows must be the same
/// length.
pub fn weighted_score_matrix(
    factor_rows: &[Vec<f64>],
    weights: &[f64],
) -> Result<Vec<f64>, ScoringError> {
    ScoringError::length_check(factor_rows.len(), weights.len())?;
    let Some(sites) = factor_rows.first().map(Vec::len) else {
        return Ok(Vec::new());
    };
    for row in factor_rows {
        ScoringError::length_check(sites, row.len())?;
    }

    let mut totals = vec![0.0; sites];
    for (row, weight) in factor_rows.iter().zip(weights) {
        for (total, score) in totals.iter_mut().zip(row) {
            *total += score * weight;
        }
    }
    Ok(totals)
}
