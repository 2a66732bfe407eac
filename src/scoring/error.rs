use thiserror::Error;

/// Errors the scoring pipeline can surface to callers.
///
/// Only shape problems are errors. Degenerate numeric inputs (constant
/// vectors, zero distances, zero column totals in a score sum) resolve to
/// documented sentinel values instead; see the individual scorers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// Two vectors that must be index-aligned have different lengths.
    #[error("input lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A pairwise comparison matrix is not square.
    #[error("pairwise matrix is not square: {rows} rows, but row {row} has {cols} entries")]
    NotSquare { rows: usize, row: usize, cols: usize },

    /// A pairwise comparison matrix column sums to zero, so it cannot be
    /// column-normalized.
    #[error("pairwise matrix column {column} sums to zero")]
    ZeroColumnSum { column: usize },
}

impl ScoringError {
    pub(crate) fn length_check(left: usize, right: usize) -> Result<(), Self> {
        if left == right {
            Ok(())
        } else {
            Err(Self::LengthMismatch { left, right })
        }
    }
}
