//! Spatial-interaction models: gravity and Huff.
//!
//! Both convert (mass, distance) pairs into comparable pull scores. Index 0
//! is conventionally the candidate site, the rest its competitors.

use super::error::ScoringError;

/// Documented decay exponent for direct `gravity_model` callers.
pub const DEFAULT_GRAVITY_BETA: f64 = 3.0;

/// Documented decay exponent for direct `huff_model` callers.
pub const DEFAULT_HUFF_BETA: f64 = 2.0;

/// Gravity score per site: `(population * attractiveness) / distance^beta`.
///
/// `attractiveness` defaults to all ones when omitted. A site at distance 0
/// scores exactly 0: this model treats it as having no meaningful gravity
/// contribution rather than infinite pull, and that convention is part of
/// the contract.
pub fn gravity_model(
    populations: &[f64],
    distances: &[f64],
    attractiveness: Option<&[f64]>,
    beta: f64,
) -> Result<Vec<f64>, ScoringError> {
    ScoringError::length_check(populations.len(), distances.len())?;
    if let Some(attr) = attractiveness {
        ScoringError::length_check(populations.len(), attr.len())?;
    }

    let scores = populations
        .iter()
        .enumerate()
        .map(|(i, population)| {
            let attr = attractiveness.map_or(1.0, |a| a[i]);
            mass_over_decay(population * attr, distances[i], beta)
        })
        .collect();
    Ok(scores)
}

/// Huff market-share probability per site:
/// `(a_i / d_i^beta) / sum_j (a_j / d_j^beta)`.
///
/// Zero-distance entries contribute 0 to the sum. When every raw term is 0
/// the model returns all zeros ("no site has any pull") instead of dividing
/// by zero; otherwise the output sums to 1.
pub fn huff_model(
    attractiveness: &[f64],
    distances: &[f64],
    beta: f64,
) -> Result<Vec<f64>, ScoringError> {
    ScoringError::length_check(attractiveness.len(), distances.len())?;

    let raw: Vec<f64> = attractiveness
        .iter()
        .zip(distances)
        .map(|(attr, dist)| mass_over_decay(*attr, *dist, beta))
        .collect();

    let total: f64 = raw.iter().sum();
    if total == 0.0 {
        return Ok(vec![0.0; raw.len()]);
    }
    Ok(raw.iter().map(|r| r / total).collect())
}

fn mass_over_decay(mass: f64, distance: f64, beta: f64) -> f64 {
    if distance == 0.0 {
        return 0.0;
    }
    mass / distance.powf(beta)
}
