//! Independent factor scorers. Each maps one or two raw metric vectors to a
//! [0,1] score per site, candidate first.

use super::error::ScoringError;
use super::normalize::min_max_scale;

/// Demographic fit: mean of min-max-scaled population and income.
/// More people with more to spend scores higher.
pub fn demographic_fit_score(
    populations: &[f64],
    incomes: &[f64],
) -> Result<Vec<f64>, ScoringError> {
    ScoringError::length_check(populations.len(), incomes.len())?;
    Ok(elementwise_mean(
        &min_max_scale(populations),
        &min_max_scale(incomes),
    ))
}

/// POI/amenity density: min-max scale of nearby-facility counts.
pub fn poi_amenity_score(amenity_counts: &[f64]) -> Vec<f64> {
    min_max_scale(amenity_counts)
}

/// Accessibility: mean of min-max-scaled foot traffic and road connectivity.
pub fn accessibility_score(
    footfalls: &[f64],
    connectivity: &[f64],
) -> Result<Vec<f64>, ScoringError> {
    ScoringError::length_check(footfalls.len(), connectivity.len())?;
    Ok(elementwise_mean(
        &min_max_scale(footfalls),
        &min_max_scale(connectivity),
    ))
}

/// Affordability: `revenue / (revenue + rent)` per site, clipped to [0,1].
/// A site with zero rent and zero revenue scores 0.
pub fn affordability_score(rents: &[f64], revenues: &[f64]) -> Result<Vec<f64>, ScoringError> {
    ScoringError::length_check(rents.len(), revenues.len())?;
    let scores = rents
        .iter()
        .zip(revenues)
        .map(|(rent, revenue)| {
            let total = revenue + rent;
            if total == 0.0 {
                0.0
            } else {
                (revenue / total).clamp(0.0, 1.0)
            }
        })
        .collect();
    Ok(scores)
}

/// Competition pressure: `1 - min_max_scale(counts)`, so fewer rival outlets
/// nearby scores closer to 1.
pub fn competition_score(competitor_counts: &[f64]) -> Vec<f64> {
    min_max_scale(competitor_counts)
        .into_iter()
        .map(|c| 1.0 - c)
        .collect()
}

/// Distance proximity: `(max - x) / (max - min)`, so closer scores higher.
///
/// All-equal distances score 1 for every site: distance is irrelevant, so no
/// site is penalized. This is intentionally the opposite degenerate-case
/// convention from `min_max_scale` (which yields zeros for a constant
/// vector); the two must not be unified.
pub fn normalize_distance(distances: &[f64]) -> Vec<f64> {
    let Some(min) = distances.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    let max = distances.iter().copied().fold(min, f64::max);
    let range = max - min;
    if range == 0.0 {
        return vec![1.0; distances.len()];
    }
    distances.iter().map(|x| (max - x) / range).collect()
}

fn elementwise_mean(left: &[f64], right: &[f64]) -> Vec<f64> {
    left.iter().zip(right).map(|(a, b)| (a + b) / 2.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demographic_fit_averages_both_scales() {
        // populations scale to [0, 1], incomes to [1, 0]
        let scores = demographic_fit_score(&[1000.0, 2000.0], &[800.0, 400.0]).unwrap();
        assert_eq!(scores, vec![0.5, 0.5]);
    }

    #[test]
    fn test_demographic_fit_length_mismatch() {
        let err = demographic_fit_score(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, ScoringError::LengthMismatch { left: 2, right: 1 });
    }

    #[test]
    fn test_poi_amenity_more_is_better() {
        let scores = poi_amenity_score(&[5.0, 20.0, 10.0]);
        assert_eq!(scores[0], 0.0);
        assert_eq!(scores[1], 1.0);
        assert!((scores[2] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_accessibility_balanced_average() {
        let scores = accessibility_score(&[100.0, 300.0], &[4.0, 2.0]).unwrap();
        assert_eq!(scores, vec![0.5, 0.5]);
    }

    #[test]
    fn test_affordability_revenue_dominates_rent() {
        let scores = affordability_score(&[1000.0], &[3000.0]).unwrap();
        assert_eq!(scores, vec![0.75]);
    }

    #[test]
    fn test_affordability_zero_total_scores_zero() {
        let scores = affordability_score(&[0.0], &[0.0]).unwrap();
        assert_eq!(scores, vec![0.0]);
    }

    #[test]
    fn test_affordability_negative_rent_clipped() {
        // rent rebates can push the ratio past 1; the score is capped
        let scores = affordability_score(&[-500.0], &[1000.0]).unwrap();
        assert_eq!(scores, vec![1.0]);
    }

    #[test]
    fn test_affordability_length_mismatch() {
        let err = affordability_score(&[1.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, ScoringError::LengthMismatch { left: 1, right: 2 });
    }

    #[test]
    fn test_competition_fewer_rivals_scores_higher() {
        let scores = competition_score(&[3.0, 10.0]);
        assert_eq!(scores, vec![1.0, 0.0]);
    }

    #[test]
    fn test_normalize_distance_closer_is_higher() {
        let scores = normalize_distance(&[0.5, 3.0, 1.75]);
        assert_eq!(scores[0], 1.0);
        assert_eq!(scores[1], 0.0);
        assert_eq!(scores[2], 0.5);
    }

    #[test]
    fn test_normalize_distance_constant_scores_ones() {
        assert_eq!(normalize_distance(&[2.0, 2.0, 2.0]), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_normalize_distance_single_site_scores_one() {
        assert_eq!(normalize_distance(&[0.8]), vec![1.0]);
    }

    #[test]
    fn test_normalize_distance_empty() {
        assert!(normalize_distance(&[]).is_empty());
    }

    #[test]
    fn test_degenerate_conventions_stay_distinct() {
        let constant = [4.0, 4.0];
        assert_eq!(min_max_scale(&constant), vec![0.0, 0.0]);
        assert_eq!(normalize_distance(&constant), vec![1.0, 1.0]);
    }
}
