use serde::{Deserialize, Serialize};

/// Scoring engine configuration.
///
/// Every field is optional; defaults reproduce the reference judgment matrix
/// and model parameters. Criterion order for `pairwise` is the engine's
/// fixed order: demographic, poi_amenity, accessibility, affordability,
/// huff_model, distance.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   gravity_beta: 2.0
///   huff_beta: 2.0
///   gravity_mix: 2.0
///   pairwise:
///     - [1, 3, 3, 4, 2, 4]
///     - [0.33, 1, 2, 1, 0.25, 2]
///     - [0.33, 0.5, 1, 0.5, 0.33, 1]
///     - [0.25, 0.5, 2, 1, 0.25, 1.25]
///     - [0.5, 4, 3, 4, 1, 2]
///     - [0.25, 0.5, 1, 0.8, 1, 0.25]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Pairwise comparison matrix for the six criteria, row i / column j =
    /// importance of criterion i relative to criterion j.
    #[serde(default)]
    pub pairwise: Option<Vec<Vec<f64>>>,

    /// Distance-decay exponent for the gravity model (default: 2.0)
    #[serde(default)]
    pub gravity_beta: Option<f64>,

    /// Distance-decay exponent for the Huff model (default: 2.0)
    #[serde(default)]
    pub huff_beta: Option<f64>,

    /// Weight of the gravity score when merged into the demographic
    /// criterion as `(demographic + mix * gravity) / (mix + 1)`
    /// (default: 2.0)
    #[serde(default)]
    pub gravity_mix: Option<f64>,

    /// Coefficients for compiling attractiveness from site components
    #[serde(default)]
    pub attractiveness: Option<AttractivenessWeights>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            pairwise: Some(default_pairwise()),
            gravity_beta: Some(2.0),
            huff_beta: Some(2.0),
            gravity_mix: Some(2.0),
            attractiveness: Some(AttractivenessWeights::default()),
        }
    }
}

/// Reference 6x6 judgment matrix: demographics and market share dominate,
/// distance matters least.
pub fn default_pairwise() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 3.0, 3.0, 4.0, 2.0, 4.0],
        vec![0.33, 1.0, 2.0, 1.0, 0.25, 2.0],
        vec![0.33, 0.5, 1.0, 0.5, 0.33, 1.0],
        vec![0.25, 0.5, 2.0, 1.0, 0.25, 1.25],
        vec![0.5, 4.0, 3.0, 4.0, 1.0, 2.0],
        vec![0.25, 0.5, 1.0, 0.8, 1.0, 0.25],
    ]
}

/// Linear coefficients for compiling a site's attractiveness from its
/// component metrics. This is caller-level configuration, not engine
/// contract: the engine only ever sees the resolved number.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AttractivenessWeights {
    #[serde(default = "AttractivenessWeights::default_cost")]
    pub cost: f64,
    #[serde(default = "AttractivenessWeights::default_population")]
    pub population: f64,
    #[serde(default = "AttractivenessWeights::default_variety")]
    pub variety: f64,
    #[serde(default = "AttractivenessWeights::default_capacity")]
    pub capacity: f64,
    #[serde(default = "AttractivenessWeights::default_pop_grid")]
    pub pop_grid: f64,
}

impl AttractivenessWeights {
    fn default_cost() -> f64 {
        10.0
    }
    fn default_population() -> f64 {
        0.5
    }
    fn default_variety() -> f64 {
        20.0
    }
    fn default_capacity() -> f64 {
        3.0
    }
    fn default_pop_grid() -> f64 {
        5.0
    }
}

impl Default for AttractivenessWeights {
    fn default() -> Self {
        Self {
            cost: Self::default_cost(),
            population: Self::default_population(),
            variety: Self::default_variety(),
            capacity: Self::default_capacity(),
            pop_grid: Self::default_pop_grid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config() {
        let config = ScoringConfig::default();

        assert_eq!(config.gravity_beta, Some(2.0));
        assert_eq!(config.huff_beta, Some(2.0));
        assert_eq!(config.gravity_mix, Some(2.0));
        let pairwise = config.pairwise.unwrap();
        assert_eq!(pairwise.len(), 6);
        assert!(pairwise.iter().all(|row| row.len() == 6));
    }

    #[test]
    fn test_default_pairwise_has_unit_diagonal() {
        let pairwise = default_pairwise();
        for (i, row) in pairwise.iter().enumerate() {
            assert_eq!(row[i], 1.0);
        }
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let config = ScoringConfig::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_scoring_config_parse() {
        let yaml = r#"
huff_beta: 1.5
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.huff_beta, Some(1.5));
        assert!(config.pairwise.is_none());
        assert!(config.gravity_beta.is_none());
        assert!(config.attractiveness.is_none());
    }

    #[test]
    fn test_empty_scoring_config_parse() {
        let yaml = "{}";
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert!(config.pairwise.is_none());
        assert!(config.gravity_beta.is_none());
        assert!(config.huff_beta.is_none());
        assert!(config.gravity_mix.is_none());
    }

    #[test]
    fn test_attractiveness_partial_parse_fills_defaults() {
        let yaml = r#"
variety: 25.0
"#;
        let weights: AttractivenessWeights = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(weights.variety, 25.0);
        assert_eq!(weights.cost, 10.0);
        assert_eq!(weights.pop_grid, 5.0);
    }
}
