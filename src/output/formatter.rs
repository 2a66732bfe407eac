use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::scoring::ViabilityReport;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a [0,1] score as a percentage with one decimal, e.g. "72.4%"
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Format the candidate's per-criterion breakdown plus the final score.
/// One line per criterion: name, score, and the weight it carried.
pub fn format_breakdown(report: &ViabilityReport, use_colors: bool) -> String {
    let mut lines: Vec<String> = report
        .criteria
        .iter()
        .map(|criterion| {
            let name_padded = format!("{:<15}", criterion.name);
            if use_colors {
                format!(
                    "{} {:.3}  {}",
                    name_padded.cyan(),
                    criterion.score,
                    format!("weight {:.3}", criterion.weight).dimmed()
                )
            } else {
                format!(
                    "{} {:.3}  weight {:.3}",
                    name_padded, criterion.score, criterion.weight
                )
            }
        })
        .collect();

    let final_line = if use_colors {
        format!("Final score: {}", format_percent(report.score).bold())
    } else {
        format!("Final score: {}", format_percent(report.score))
    };
    lines.push(String::new());
    lines.push(final_line);
    lines.join("\n")
}

/// A site with its aggregate score for the comparison table
pub struct RankedSite {
    pub name: String,
    pub score: f64,
    pub is_candidate: bool,
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a site name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format sites as a ranked table with columns: Index, Score, Name.
/// Callers pass the rows already sorted by score descending.
/// Index column: 3 chars, right-aligned. Score column: 6 chars (fits
/// "100.0%"), right-aligned. The candidate row is marked.
pub fn format_comparison(sites: &[RankedSite], use_colors: bool) -> String {
    if sites.is_empty() {
        return "No sites to compare.".to_string();
    }

    let term_width = get_terminal_width();
    let index_width = 3;
    let score_width = 6;
    let separator = "  ";
    let marker = " (candidate)";

    sites
        .iter()
        .enumerate()
        .map(|(idx, site)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>width$}", format_percent(site.score), width = score_width);
            let marker_len = if site.is_candidate { marker.len() } else { 0 };
            let fixed_width = index_width + 1 + score_width + separator.len() + marker_len;

            let name = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_name(&site.name, width - fixed_width)
                } else {
                    truncate_name(&site.name, 20)
                }
            } else {
                site.name.clone()
            };

            if use_colors {
                let tail = if site.is_candidate {
                    format!("{}{}", name.bold(), marker.green())
                } else {
                    name
                };
                format!("{} {}{}{}", index_str.dimmed(), score_padded.bold(), separator, tail)
            } else {
                let tail = if site.is_candidate {
                    format!("{}{}", name, marker)
                } else {
                    name
                };
                format!("{} {}{}{}", index_str, score_padded, separator, tail)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::CriterionScore;

    fn sample_report() -> ViabilityReport {
        ViabilityReport {
            score: 0.642,
            criteria: vec![
                CriterionScore {
                    name: "demographic",
                    score: 0.652,
                    weight: 0.297,
                },
                CriterionScore {
                    name: "distance",
                    score: 1.0,
                    weight: 0.071,
                },
            ],
            competitor_scores: vec![0.41],
        }
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.642), "64.2%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(1.0), "100.0%");
    }

    #[test]
    fn test_format_breakdown_plain() {
        let result = format_breakdown(&sample_report(), false);
        assert!(result.contains("demographic"));
        assert!(result.contains("0.652"));
        assert!(result.contains("weight 0.297"));
        assert!(result.contains("Final score: 64.2%"));
    }

    #[test]
    fn test_format_breakdown_lists_every_criterion() {
        let result = format_breakdown(&sample_report(), false);
        assert_eq!(result.lines().filter(|l| l.contains("weight")).count(), 2);
    }

    #[test]
    fn test_format_comparison_empty() {
        let sites: Vec<RankedSite> = vec![];
        assert_eq!(format_comparison(&sites, false), "No sites to compare.");
    }

    #[test]
    fn test_format_comparison_marks_candidate() {
        let sites = vec![
            RankedSite {
                name: "High Street".to_string(),
                score: 0.642,
                is_candidate: true,
            },
            RankedSite {
                name: "Riverside Mall".to_string(),
                score: 0.41,
                is_candidate: false,
            },
        ];
        let result = format_comparison(&sites, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" 1."));
        assert!(lines[0].contains("64.2%"));
        assert!(lines[0].contains("High Street (candidate)"));
        assert!(lines[1].contains(" 2."));
        assert!(!lines[1].contains("(candidate)"));
    }

    #[test]
    fn test_truncate_name_short() {
        assert_eq!(truncate_name("Short", 20), "Short");
    }

    #[test]
    fn test_truncate_name_long() {
        assert_eq!(truncate_name("A very long site name", 15), "A very long ...");
    }

    #[test]
    fn test_truncate_name_very_narrow() {
        assert_eq!(truncate_name("Hello world", 3), "Hel");
    }
}
