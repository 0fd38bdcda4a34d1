use thiserror::Error;

/// Errors produced while scoring a candidate.
///
/// Both variants surface directly to the caller; the scorer has no fallback
/// behavior for degenerate inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FitnessError {
    /// The attribute vector had the wrong number of elements.
    #[error("expected {expected} attributes, got {actual}")]
    Shape { expected: usize, actual: usize },

    /// A denominator in the fitness formula evaluated to zero.
    #[error("division by zero in the {term} term")]
    DivisionByZero { term: &'static str },
}
