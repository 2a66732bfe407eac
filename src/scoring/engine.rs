//! Full scoring pipeline: raw site metrics in, viability report out.
//!
//! The candidate is pooled with its competitors per metric (candidate at
//! index 0), each factor scorer runs over the pool, and the candidate's
//! column is aggregated with AHP-derived weights. Every call is a pure
//! computation over its inputs; nothing is cached or shared.

use serde::Serialize;

use super::aggregate::weighted_score_matrix;
use super::ahp::ahp_weights;
use super::config::{default_pairwise, ScoringConfig};
use super::error::ScoringError;
use super::factors::{
    accessibility_score, affordability_score, demographic_fit_score, normalize_distance,
    poi_amenity_score,
};
use super::normalize::min_max_scale;
use super::spatial::{gravity_model, huff_model};

/// Criterion order used by the engine, the pairwise matrix, and the report.
pub const CRITERIA: [&str; 6] = [
    "demographic",
    "poi_amenity",
    "accessibility",
    "affordability",
    "huff_model",
    "distance",
];

/// Raw metrics for one site. The surrounding layers (file loading, future
/// API glue) are responsible for assembling these; the engine never touches
/// storage.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteMetrics {
    pub attractiveness: f64,
    /// Distance from the demand point, in kilometres.
    pub distance: f64,
    pub population: f64,
    pub income: f64,
    pub amenities: f64,
    pub footfall: f64,
    pub connectivity: f64,
    pub rent: f64,
    pub revenue: f64,
}

/// One criterion's contribution to the final score.
#[derive(Debug, Clone, Serialize)]
pub struct CriterionScore {
    pub name: &'static str,
    pub score: f64,
    pub weight: f64,
}

/// Final score plus the full breakdown that produced it, so a caller can
/// render a labeled report instead of a bare number.
#[derive(Debug, Clone, Serialize)]
pub struct ViabilityReport {
    /// Weighted viability of the candidate, in [0, 1].
    pub score: f64,
    /// Per-criterion score and weight, in `CRITERIA` order.
    pub criteria: Vec<CriterionScore>,
    /// The competitors' own aggregate scores under the same weights, in
    /// input order.
    pub competitor_scores: Vec<f64>,
}

/// Score a candidate site against its competitors.
///
/// Factor scores are relative to the pool: adding or removing a competitor
/// changes the normalization spread and therefore the candidate's score.
/// Identical inputs always produce bit-identical output.
pub fn evaluate(
    candidate: &SiteMetrics,
    competitors: &[SiteMetrics],
    config: &ScoringConfig,
) -> Result<ViabilityReport, ScoringError> {
    let gravity_beta = config.gravity_beta.unwrap_or(2.0);
    let huff_beta = config.huff_beta.unwrap_or(2.0);
    let gravity_mix = config.gravity_mix.unwrap_or(2.0);
    let pairwise = config.pairwise.clone().unwrap_or_else(default_pairwise);

    let weights = ahp_weights(&pairwise)?;

    let attractiveness = pool(candidate, competitors, |s| s.attractiveness);
    let distances = pool(candidate, competitors, |s| s.distance);
    let populations = pool(candidate, competitors, |s| s.population);
    let incomes = pool(candidate, competitors, |s| s.income);
    let amenities = pool(candidate, competitors, |s| s.amenities);
    let footfalls = pool(candidate, competitors, |s| s.footfall);
    let connectivity = pool(candidate, competitors, |s| s.connectivity);
    let rents = pool(candidate, competitors, |s| s.rent);
    let revenues = pool(candidate, competitors, |s| s.revenue);

    let huff = huff_model(&attractiveness, &distances, huff_beta)?;
    let gravity_raw = gravity_model(
        &populations,
        &distances,
        Some(attractiveness.as_slice()),
        gravity_beta,
    )?;
    let gravity = min_max_scale(&gravity_raw);

    let demographic = demographic_fit_score(&populations, &incomes)?;
    let poi = poi_amenity_score(&amenities);
    let accessibility = accessibility_score(&footfalls, &connectivity)?;
    let affordability = affordability_score(&rents, &revenues)?;
    let proximity = normalize_distance(&distances);

    // Gravity folds into the demographic criterion: both measure how much
    // demand a site can draw, and keeping them as one criterion matches the
    // judgment matrix.
    let demographic_all: Vec<f64> = demographic
        .iter()
        .zip(&gravity)
        .map(|(dem, grav)| (dem + gravity_mix * grav) / (gravity_mix + 1.0))
        .collect();

    let factor_rows = vec![
        demographic_all,
        poi,
        accessibility,
        affordability,
        huff,
        proximity,
    ];
    let site_scores = weighted_score_matrix(&factor_rows, &weights)?;

    let criteria = CRITERIA
        .iter()
        .copied()
        .zip(&factor_rows)
        .zip(&weights)
        .map(|((name, row), weight)| CriterionScore {
            name,
            score: row[0],
            weight: *weight,
        })
        .collect();

    Ok(ViabilityReport {
        score: site_scores[0],
        criteria,
        competitor_scores: site_scores[1..].to_vec(),
    })
}

fn pool(candidate: &SiteMetrics, competitors: &[SiteMetrics], get: impl Fn(&SiteMetrics) -> f64) -> Vec<f64> {
    std::iter::once(candidate)
        .chain(competitors)
        .map(get)
        .collect()
}
