pub mod candidate;
pub mod error;
pub mod score;

pub use candidate::Candidate;
pub use error::FitnessError;
pub use score::{dating_fitness, score_candidate, ScoreResult, TermContribution};
