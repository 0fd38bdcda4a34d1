use std::io::IsTerminal;

use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{terminal_size, Width};

use crate::fitness::{Candidate, ScoreResult};

/// A candidate with its calculated fitness for display
pub struct ScoredCandidate<'a> {
    pub name: String,
    pub candidate: &'a Candidate,
    pub result: ScoreResult,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Sort candidates by fitness descending. Stable, so ties keep their
/// roster order.
pub fn rank_by_fitness(candidates: &mut [ScoredCandidate]) {
    candidates.sort_by(|a, b| {
        b.result
            .value
            .partial_cmp(&a.result.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Format a fitness value in compact notation (-1.8k, 2.3M, 847.5)
pub fn format_fitness(value: f64) -> String {
    let magnitude = value.abs();
    let formatted = if magnitude >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else {
        format!("{:.1}", value)
    };

    // Trim trailing .0 (e.g., "1.0k" -> "1k", "847.0" -> "847")
    formatted
        .replace(".0M", "M")
        .replace(".0k", "k")
        .trim_end_matches(".0")
        .to_string()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a candidate name to fit available width, accounting for Unicode
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

fn format_attributes(candidate: &Candidate) -> String {
    let values: Vec<String> = candidate
        .to_vec()
        .iter()
        .map(|v| format!("{}", v))
        .collect();
    format!("[{}]", values.join(", "))
}

/// Format candidates as a ranked table with columns: Index, Fitness, Name, Attributes
/// No headers. Index column: 3 chars, right-aligned. Fitness column:
/// right-aligned, 8 chars wide (fits "-9999.9M").
pub fn format_ranked_table(candidates: &[ScoredCandidate], use_colors: bool) -> String {
    if candidates.is_empty() {
        return "No candidates found.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let fitness_width = 8;
    let separator = "  ";

    candidates
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            // 1-based index, right-aligned with trailing dot
            let index_str = format!("{:>2}.", idx + 1);
            let fitness_str = format_fitness(scored.result.value);
            let fitness_padded = format!("{:>width$}", fitness_str, width = fitness_width);

            let attrs = format_attributes(scored.candidate);
            let fixed_width = index_width + 1 + fitness_width + separator.len() * 2 + attrs.len();

            let name = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_name(&scored.name, width - fixed_width)
                } else {
                    // Very narrow terminal, show truncated
                    truncate_name(&scored.name, 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                scored.name.clone()
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    fitness_padded.bold(),
                    separator,
                    name.cyan(),
                    separator,
                    attrs
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, fitness_padded, separator, name, separator, attrs
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a score result as term-by-term detail (for verbose mode)
pub fn format_breakdown(result: &ScoreResult, use_colors: bool) -> String {
    let mut lines = Vec::with_capacity(result.terms.len() + 1);
    for term in &result.terms {
        let line = if use_colors {
            format!(
                "  {:<12} {:>10.1}  {}",
                term.label.cyan(),
                term.value,
                term.description.dimmed()
            )
        } else {
            format!("  {:<12} {:>10.1}  {}", term.label, term.value, term.description)
        };
        lines.push(line);
    }
    let total = if use_colors {
        format!("  {:<12} {:>10.1}", "Total".bold(), result.value)
    } else {
        format!("  {:<12} {:>10.1}", "Total", result.value)
    };
    lines.push(total);
    lines.join("\n")
}

#[derive(Serialize)]
struct ScoredRecord {
    name: String,
    fitness: f64,
    attributes: Vec<f64>,
}

/// Serialize ranked candidates as a JSON array (for `rank --json`)
pub fn format_json(candidates: &[ScoredCandidate]) -> serde_json::Result<String> {
    let records: Vec<ScoredRecord> = candidates
        .iter()
        .map(|scored| ScoredRecord {
            name: scored.name.clone(),
            fitness: scored.result.value,
            attributes: scored.candidate.to_vec(),
        })
        .collect();
    serde_json::to_string_pretty(&records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::{score_candidate, Candidate};

    fn sample_scored<'a>(name: &str, candidate: &'a Candidate) -> ScoredCandidate<'a> {
        ScoredCandidate {
            name: name.to_string(),
            candidate,
            result: score_candidate(candidate).unwrap(),
        }
    }

    #[test]
    fn test_format_fitness_plain() {
        assert_eq!(format_fitness(847.5), "847.5");
        assert_eq!(format_fitness(847.0), "847");
        assert_eq!(format_fitness(-25.0), "-25");
    }

    #[test]
    fn test_format_fitness_compact() {
        assert_eq!(format_fitness(-1820.0), "-1.8k");
        assert_eq!(format_fitness(1000.0), "1k");
        assert_eq!(format_fitness(2_300_000.0), "2.3M");
    }

    #[test]
    fn test_truncate_name_short() {
        assert_eq!(truncate_name("rex", 10), "rex");
    }

    #[test]
    fn test_truncate_name_long() {
        assert_eq!(truncate_name("tyrannosaurus", 10), "tyranno...");
    }

    #[test]
    fn test_rank_by_fitness_descending() {
        // Camouflage contributes linearly, so these three score low/mid/high
        let low = Candidate::from_slice(&[1.0, 2.0, 10.0, 5.0, 0.0, 1.0, 9.0]).unwrap();
        let mid = Candidate::from_slice(&[1.0, 2.0, 10.0, 5.0, 40.0, 1.0, 9.0]).unwrap();
        let high = Candidate::from_slice(&[1.0, 2.0, 10.0, 5.0, 75.0, 1.0, 9.0]).unwrap();

        let mut scored = vec![
            sample_scored("shy", &mid),
            sample_scored("drab", &low),
            sample_scored("sneaky", &high),
        ];
        rank_by_fitness(&mut scored);

        let names: Vec<&str> = scored.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["sneaky", "shy", "drab"]);
        assert!(scored[0].result.value > scored[1].result.value);
        assert!(scored[1].result.value > scored[2].result.value);
    }

    #[test]
    fn test_rank_by_fitness_ties_keep_roster_order() {
        let winner = Candidate::from_slice(&[1.0, 2.0, 10.0, 5.0, 75.0, 1.0, 9.0]).unwrap();
        let twin = Candidate::from_slice(&[1.0, 2.0, 10.0, 5.0, 50.0, 1.0, 9.0]).unwrap();

        let mut scored = vec![
            sample_scored("first-twin", &twin),
            sample_scored("second-twin", &twin),
            sample_scored("winner", &winner),
        ];
        rank_by_fitness(&mut scored);

        let names: Vec<&str> = scored.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["winner", "first-twin", "second-twin"]);
        assert_eq!(scored[1].result.value, scored[2].result.value);
    }

    #[test]
    fn test_ranked_table_empty() {
        assert_eq!(format_ranked_table(&[], false), "No candidates found.");
    }

    #[test]
    fn test_ranked_table_plain() {
        let candidate = Candidate::from_slice(&[1.0, 2.0, 10.0, 5.0, 50.0, 1.0, 9.0]).unwrap();
        let scored = vec![sample_scored("rex", &candidate)];
        let table = format_ranked_table(&scored, false);
        assert!(table.contains(" 1."));
        assert!(table.contains("-1.8k"));
        assert!(table.contains("rex"));
        assert!(table.contains("[1, 2, 10, 5, 50, 1, 9]"));
    }

    #[test]
    fn test_breakdown_lists_all_terms_and_total() {
        let candidate = Candidate::from_slice(&[1.0, 2.0, 10.0, 5.0, 50.0, 1.0, 9.0]).unwrap();
        let result = score_candidate(&candidate).unwrap();
        let detail = format_breakdown(&result, false);
        assert!(detail.contains("Brains"));
        assert!(detail.contains("Weaponry"));
        assert!(detail.contains("Build"));
        assert!(detail.contains("Camouflage"));
        assert!(detail.contains("Total"));
        assert!(detail.contains("-1820.0"));
    }

    #[test]
    fn test_json_output() {
        let candidate = Candidate::from_slice(&[1.0, 2.0, 10.0, 5.0, 50.0, 1.0, 9.0]).unwrap();
        let scored = vec![sample_scored("rex", &candidate)];
        let json = format_json(&scored).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "rex");
        assert_eq!(parsed[0]["fitness"], -1820.0);
        assert_eq!(parsed[0]["attributes"].as_array().unwrap().len(), 7);
    }
}
