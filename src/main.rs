use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dino_fitness::fitness::{score_candidate, Candidate, FitnessError};
use dino_fitness::output::{
    format_breakdown, format_fitness, format_json, format_ranked_table, rank_by_fitness,
    should_use_colors, ScoredCandidate,
};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_MATH: i32 = 2;
const EXIT_ROSTER: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a single candidate from 7 positional attributes
    /// (brain_size teeth_size height weight camouflage_level claw_size aggression)
    Score {
        /// Attribute values in canonical order
        #[arg(num_args = 1.., allow_negative_numbers = true)]
        attributes: Vec<f64>,
    },
    /// Score every candidate in a roster file and list them best-first
    Rank {
        /// Path to the roster YAML file
        #[arg(short, long)]
        file: PathBuf,

        /// Emit results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "dino-fitness")]
#[command(about = "T-Rex dating fitness scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Show the per-term breakdown for each candidate
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let use_colors = should_use_colors();

    match cli.command {
        Commands::Score { attributes } => {
            let candidate = match Candidate::from_slice(&attributes) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Invalid candidate: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let result = match score_candidate(&candidate) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Scoring failed: {}", e);
                    std::process::exit(EXIT_MATH);
                }
            };

            if cli.verbose {
                println!("{}", format_breakdown(&result, use_colors));
            } else {
                println!("{}", result.value);
            }
        }
        Commands::Rank { file, json } => {
            let roster = match dino_fitness::roster::load_roster(&file) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Roster error: {}", e);
                    std::process::exit(EXIT_ROSTER);
                }
            };

            if roster.candidates.is_empty() {
                eprintln!("No candidates in roster file.");
                eprintln!("Add candidates to {}:", file.display());
                eprintln!("  candidates:");
                eprintln!("    - name: rex");
                eprintln!("      attributes: [1, 2, 10, 5, 50, 1, 9]");
                std::process::exit(EXIT_ROSTER);
            }

            if cli.verbose {
                eprintln!("Loaded {} candidates from roster", roster.candidates.len());
            }

            // Parsed up front so ScoredCandidate can borrow each candidate
            let candidates: Vec<(String, Result<Candidate, FitnessError>)> = roster
                .candidates
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    (
                        entry.display_name(i),
                        Candidate::from_slice(&entry.attributes),
                    )
                })
                .collect();

            let mut scored: Vec<ScoredCandidate> = Vec::new();
            for (name, candidate) in &candidates {
                match candidate {
                    Ok(c) => match score_candidate(c) {
                        Ok(result) => scored.push(ScoredCandidate {
                            name: name.clone(),
                            candidate: c,
                            result,
                        }),
                        Err(e) => {
                            // Degenerate entry, keep scoring the rest
                            eprintln!("Skipping {}: {}", name, e);
                        }
                    },
                    Err(e) => {
                        eprintln!("Skipping {}: {}", name, e);
                    }
                }
            }

            if scored.is_empty() {
                eprintln!("No candidate in the roster could be scored.");
                std::process::exit(EXIT_INPUT);
            }

            rank_by_fitness(&mut scored);

            if json {
                match format_json(&scored) {
                    Ok(output) => println!("{}", output),
                    Err(e) => {
                        eprintln!("Failed to serialize results: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                }
            } else if cli.verbose {
                for entry in &scored {
                    println!("{} {}", entry.name, format_fitness(entry.result.value));
                    println!("{}", format_breakdown(&entry.result, use_colors));
                    println!();
                }
            } else {
                println!("{}", format_ranked_table(&scored, use_colors));
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
