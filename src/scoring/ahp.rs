//! Criterion-weight derivation from an AHP pairwise comparison matrix.

use super::error::ScoringError;

/// Derive a normalized weight vector from an N x N pairwise comparison
/// matrix, where `matrix[i][j]` is the importance of criterion `i` relative
/// to criterion `j`.
///
/// Columns are normalized by their sums and each row is averaged: the
/// classical additive approximation to the principal eigenvector. The
/// approximation is part of the contract: swapping in an exact eigenvector
/// computation would change the numeric output for inconsistent matrices.
/// No consistency-ratio check is performed; inconsistent judgments are
/// accepted as given.
///
/// Fails with `NotSquare` for a ragged or non-square matrix, and with
/// `ZeroColumnSum` when a column cannot be normalized.
pub fn ahp_weights(matrix: &[Vec<f64>]) -> Result<Vec<f64>, ScoringError> {
    let n = matrix.len();
    for (row, entries) in matrix.iter().enumerate() {
        if entries.len() != n {
            return Err(ScoringError::NotSquare {
                rows: n,
                row,
                cols: entries.len(),
            });
        }
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut column_sums = vec![0.0; n];
    for row in matrix {
        for (column, entry) in row.iter().enumerate() {
            column_sums[column] += entry;
        }
    }
    if let Some(column) = column_sums.iter().position(|sum| *sum == 0.0) {
        return Err(ScoringError::ZeroColumnSum { column });
    }

    // Row means of the column-stochastic matrix.
    let mut weights: Vec<f64> = matrix
        .iter()
        .map(|row| {
            row.iter()
                .zip(&column_sums)
                .map(|(entry, sum)| entry / sum)
                .sum::<f64>()
                / n as f64
        })
        .collect();

    // Mathematically the means already sum to 1; renormalize to absorb
    // floating-point drift.
    let total: f64 = weights.iter().sum();
    for weight in &mut weights {
        *weight /= total;
    }
    Ok(weights)
}
