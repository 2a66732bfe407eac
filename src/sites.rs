//! Site input files: one candidate plus zero or more competitors, each with
//! the same attribute shape. Loading and attractiveness resolution happen
//! here so the scoring engine only ever sees plain numbers.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::scoring::{AttractivenessWeights, SiteMetrics};

/// Top-level shape of a sites file (YAML, or JSON for `.json` paths).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SitesFile {
    pub candidate: SiteRecord,
    #[serde(default)]
    pub competitors: Vec<SiteRecord>,
}

/// One site as written in the input file.
///
/// Attractiveness may be given directly, compiled from a component
/// `profile`, or omitted entirely, in which case revenue stands in for it.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub attractiveness: Option<f64>,
    #[serde(default)]
    pub profile: Option<SiteProfile>,
    pub distance: f64,
    pub population: f64,
    pub income: f64,
    pub amenities: f64,
    pub footfall: f64,
    pub connectivity: f64,
    pub rent: f64,
    pub revenue: f64,
}

/// Component metrics a site's attractiveness can be compiled from.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteProfile {
    pub capacity: f64,
    pub variety: f64,
    pub population: f64,
    pub pop_grid: f64,
    pub cost: f64,
}

impl SiteProfile {
    /// Linear attractiveness compilation with configurable coefficients.
    pub fn attractiveness(&self, weights: &AttractivenessWeights) -> f64 {
        self.cost * weights.cost
            + self.population * weights.population
            + self.variety * weights.variety
            + self.capacity * weights.capacity
            + self.pop_grid * weights.pop_grid
    }
}

impl SiteRecord {
    /// Display name, falling back to a positional label.
    pub fn label(&self, fallback: String) -> String {
        self.name.clone().unwrap_or(fallback)
    }

    /// Resolve the record into engine metrics. Attractiveness precedence:
    /// explicit value, then compiled profile, then revenue.
    pub fn resolve(&self, weights: &AttractivenessWeights) -> SiteMetrics {
        let attractiveness = self
            .attractiveness
            .or_else(|| self.profile.as_ref().map(|p| p.attractiveness(weights)))
            .unwrap_or(self.revenue);

        SiteMetrics {
            attractiveness,
            distance: self.distance,
            population: self.population,
            income: self.income,
            amenities: self.amenities,
            footfall: self.footfall,
            connectivity: self.connectivity,
            rent: self.rent,
            revenue: self.revenue,
        }
    }
}

/// Load a sites file. `.json` paths parse as JSON, everything else as YAML.
pub fn load_sites(path: &Path) -> Result<SitesFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read sites file at {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse sites file: invalid JSON in {}", path.display()))
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse sites file: invalid YAML in {}", path.display()))
    }
}
