use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a candidate site against its competitors
    Evaluate {
        /// Path to the sites file (YAML, or JSON with a .json extension)
        input: PathBuf,

        /// Emit the full report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the criterion weights derived from the configured pairwise matrix
    Weights,
    /// Write a starter config file with the default judgment matrix
    Init {
        /// Destination path (defaults to ~/.config/site-scout/config.yaml)
        path: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "site-scout")]
#[command(about = "Candidate-site viability scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/site-scout/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match site_scout::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let effective_scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = site_scout::scoring::validate_scoring(&effective_scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    match cli.command {
        Commands::Init { path } => match site_scout::config::write_default_config(path) {
            Ok(written) => {
                println!("Config written to {}", written.display());
                println!("Edit the pairwise matrix to match your own judgments.");
            }
            Err(e) => {
                eprintln!("Init error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        },
        Commands::Weights => {
            let pairwise = effective_scoring
                .pairwise
                .clone()
                .unwrap_or_else(site_scout::scoring::default_pairwise);
            let weights = match site_scout::scoring::ahp_weights(&pairwise) {
                Ok(w) => w,
                Err(e) => {
                    eprintln!("Scoring config error: {}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };
            for (name, weight) in site_scout::scoring::CRITERIA.iter().zip(&weights) {
                println!("{:<15} {:.3}", name, weight);
            }
        }
        Commands::Evaluate { input, json } => {
            let sites = match site_scout::sites::load_sites(&input) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Input error: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let attractiveness_weights = effective_scoring.attractiveness.unwrap_or_default();
            let candidate = sites.candidate.resolve(&attractiveness_weights);
            let competitors: Vec<_> = sites
                .competitors
                .iter()
                .map(|record| record.resolve(&attractiveness_weights))
                .collect();

            if cli.verbose {
                eprintln!(
                    "Scoring 1 candidate against {} competitors",
                    competitors.len()
                );
            }

            let report =
                match site_scout::scoring::evaluate(&candidate, &competitors, &effective_scoring) {
                    Ok(r) => r,
                    Err(e) => {
                        eprintln!("Scoring error: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                };

            if cli.verbose {
                for criterion in &report.criteria {
                    eprintln!(
                        "  {:<15} score {:.3} weight {:.3}",
                        criterion.name, criterion.score, criterion.weight
                    );
                }
            }

            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Failed to serialize report: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                }
            } else {
                let use_colors = site_scout::output::should_use_colors();
                println!(
                    "{}",
                    site_scout::output::format_breakdown(&report, use_colors)
                );

                if !report.competitor_scores.is_empty() {
                    let mut ranked = vec![site_scout::output::RankedSite {
                        name: sites.candidate.label("Candidate".to_string()),
                        score: report.score,
                        is_candidate: true,
                    }];
                    for (i, (record, score)) in sites
                        .competitors
                        .iter()
                        .zip(&report.competitor_scores)
                        .enumerate()
                    {
                        ranked.push(site_scout::output::RankedSite {
                            name: record.label(format!("Competitor {}", i + 1)),
                            score: *score,
                            is_candidate: false,
                        });
                    }
                    ranked.sort_by(|a, b| {
                        b.score
                            .partial_cmp(&a.score)
                            .unwrap_or(std::cmp::Ordering::Equal)
                    });

                    println!();
                    println!(
                        "{}",
                        site_scout::output::format_comparison(&ranked, use_colors)
                    );
                }
            }

            if cli.verbose {
                eprintln!();
                eprintln!("Scored in {:?}", start_time.elapsed());
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
