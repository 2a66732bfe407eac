use super::config::ScoringConfig;
use super::engine::CRITERIA;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref pairwise) = config.pairwise {
        validate_pairwise(pairwise, &mut errors);
    }

    if let Some(beta) = config.gravity_beta {
        if !beta.is_finite() {
            errors.push(format!("scoring.gravity_beta: must be finite, got {}", beta));
        }
    }

    if let Some(beta) = config.huff_beta {
        if !beta.is_finite() {
            errors.push(format!("scoring.huff_beta: must be finite, got {}", beta));
        }
    }

    if let Some(mix) = config.gravity_mix {
        if !mix.is_finite() || mix < 0.0 {
            errors.push(format!(
                "scoring.gravity_mix: must be non-negative and finite, got {}",
                mix
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_pairwise(pairwise: &[Vec<f64>], errors: &mut Vec<String>) {
    if pairwise.len() != CRITERIA.len() {
        errors.push(format!(
            "scoring.pairwise: expected {} rows (one per criterion), got {}",
            CRITERIA.len(),
            pairwise.len()
        ));
    }

    for (i, row) in pairwise.iter().enumerate() {
        if row.len() != pairwise.len() {
            errors.push(format!(
                "scoring.pairwise[{}]: expected {} entries, got {}",
                i,
                pairwise.len(),
                row.len()
            ));
        }
        for (j, entry) in row.iter().enumerate() {
            if !entry.is_finite() || *entry <= 0.0 {
                errors.push(format!(
                    "scoring.pairwise[{}][{}]: judgments must be positive, got {}",
                    i, j, entry
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::config::default_pairwise;

    #[test]
    fn test_valid_config() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_config() {
        let config = ScoringConfig {
            pairwise: None,
            gravity_beta: None,
            huff_beta: None,
            gravity_mix: None,
            attractiveness: None,
        };
        assert!(validate_scoring(&config).is_ok());
    }

    #[test]
    fn test_wrong_pairwise_dimension() {
        let config = ScoringConfig {
            pairwise: Some(vec![vec![1.0, 2.0], vec![0.5, 1.0]]),
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.pairwise"));
        assert!(errors[0].contains("expected 6 rows"));
    }

    #[test]
    fn test_ragged_pairwise_row() {
        let mut pairwise = default_pairwise();
        pairwise[3].pop();
        let config = ScoringConfig {
            pairwise: Some(pairwise),
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.pairwise[3]"));
    }

    #[test]
    fn test_non_positive_judgment() {
        let mut pairwise = default_pairwise();
        pairwise[2][4] = 0.0;
        let config = ScoringConfig {
            pairwise: Some(pairwise),
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.pairwise[2][4]"));
        assert!(errors[0].contains("positive"));
    }

    #[test]
    fn test_negative_gravity_mix() {
        let config = ScoringConfig {
            gravity_mix: Some(-1.0),
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("gravity_mix"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ScoringConfig {
            pairwise: Some(vec![vec![1.0, 2.0], vec![0.5, 1.0]]), // Error 1
            gravity_beta: Some(f64::NAN),                         // Error 2
            gravity_mix: Some(-0.5),                              // Error 3
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
