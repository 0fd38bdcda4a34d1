use super::candidate::Candidate;
use super::error::FitnessError;

#[derive(Debug, Clone)]
pub struct TermContribution {
    pub label: &'static str, // e.g. "Brains", "Weaponry"
    pub description: String, // e.g. "(2 + 1) / (2 - 1)"
    pub value: f64,          // This term's contribution to the total
}

#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub value: f64,
    pub terms: Vec<TermContribution>,
}

/// Map a candidate to its dating fitness value.
///
/// ```text
/// value = brain_size * 200 * (1 - 100/(aggression + 1))
///       + (teeth_size + claw_size) / (teeth_size - claw_size)
///       + height / weight
///       - (75 - camouflage_level)
/// ```
///
/// # Errors
///
/// Returns `FitnessError::DivisionByZero` when `teeth_size == claw_size`,
/// `weight == 0`, or `aggression == -1`. These are checked up front: f64
/// division would otherwise produce inf/NaN silently.
pub fn dating_fitness(candidate: &Candidate) -> Result<f64, FitnessError> {
    let [brains, weaponry, build, camouflage] = term_values(candidate)?;
    Ok(brains + weaponry + build + camouflage)
}

/// Score a candidate and keep a per-term breakdown for display.
/// The term values always sum to the fitness value.
pub fn score_candidate(candidate: &Candidate) -> Result<ScoreResult, FitnessError> {
    let [brains, weaponry, build, camouflage] = term_values(candidate)?;

    let terms = vec![
        TermContribution {
            label: "Brains",
            description: format!(
                "{} * 200 * (1 - 100/({} + 1))",
                candidate.brain_size, candidate.aggression
            ),
            value: brains,
        },
        TermContribution {
            label: "Weaponry",
            description: format!(
                "({} + {}) / ({} - {})",
                candidate.teeth_size,
                candidate.claw_size,
                candidate.teeth_size,
                candidate.claw_size
            ),
            value: weaponry,
        },
        TermContribution {
            label: "Build",
            description: format!("{} / {}", candidate.height, candidate.weight),
            value: build,
        },
        TermContribution {
            label: "Camouflage",
            description: format!("-(75 - {})", candidate.camouflage_level),
            value: camouflage,
        },
    ];

    Ok(ScoreResult {
        value: brains + weaponry + build + camouflage,
        terms,
    })
}

fn term_values(candidate: &Candidate) -> Result<[f64; 4], FitnessError> {
    if candidate.teeth_size == candidate.claw_size {
        return Err(FitnessError::DivisionByZero { term: "weaponry" });
    }
    if candidate.weight == 0.0 {
        return Err(FitnessError::DivisionByZero { term: "build" });
    }
    if candidate.aggression == -1.0 {
        return Err(FitnessError::DivisionByZero { term: "brains" });
    }

    let brains = candidate.brain_size * 200.0 * (1.0 - 100.0 / (candidate.aggression + 1.0));
    let weaponry = (candidate.teeth_size + candidate.claw_size)
        / (candidate.teeth_size - candidate.claw_size);
    let build = candidate.height / candidate.weight;
    let camouflage = -(75.0 - candidate.camouflage_level);

    Ok([brains, weaponry, build, camouflage])
}
