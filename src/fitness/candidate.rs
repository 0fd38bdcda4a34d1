use serde::{Deserialize, Serialize};

use super::error::FitnessError;

/// A T-Rex dating candidate.
///
/// Attribute order is canonical and matches the positional vector form:
/// brain_size, teeth_size, height, weight, camouflage_level, claw_size,
/// aggression.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Candidate {
    pub brain_size: f64,
    pub teeth_size: f64,
    pub height: f64,
    pub weight: f64,
    pub camouflage_level: f64,
    pub claw_size: f64,
    pub aggression: f64,
}

impl Candidate {
    /// Number of attributes in the canonical vector form.
    pub const ATTRIBUTE_COUNT: usize = 7;

    /// Bind a positional attribute vector to named attributes.
    ///
    /// # Errors
    ///
    /// Returns `FitnessError::Shape` when the slice length is not exactly 7.
    pub fn from_slice(values: &[f64]) -> Result<Self, FitnessError> {
        match values {
            &[brain_size, teeth_size, height, weight, camouflage_level, claw_size, aggression] => {
                Ok(Candidate {
                    brain_size,
                    teeth_size,
                    height,
                    weight,
                    camouflage_level,
                    claw_size,
                    aggression,
                })
            }
            _ => Err(FitnessError::Shape {
                expected: Self::ATTRIBUTE_COUNT,
                actual: values.len(),
            }),
        }
    }

    /// The candidate back in positional vector form, canonical order.
    pub fn to_vec(&self) -> Vec<f64> {
        vec![
            self.brain_size,
            self.teeth_size,
            self.height,
            self.weight,
            self.camouflage_level,
            self.claw_size,
            self.aggression,
        ]
    }
}

impl TryFrom<&[f64]> for Candidate {
    type Error = FitnessError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Candidate::from_slice(values)
    }
}
