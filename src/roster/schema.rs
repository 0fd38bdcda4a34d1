use serde::Deserialize;

/// A roster of candidates to score in one run.
///
/// Example YAML:
/// ```yaml
/// candidates:
///   - name: rex
///     attributes: [1, 2, 10, 5, 50, 1, 9]
///   - attributes: [3, 5, 12, 6, 70, 2, 4]
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Roster {
    pub candidates: Vec<RosterEntry>,
}

/// One candidate entry: an optional display name plus the positional
/// attribute vector (brain_size, teeth_size, height, weight,
/// camouflage_level, claw_size, aggression).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterEntry {
    #[serde(default)]
    pub name: Option<String>,
    pub attributes: Vec<f64>,
}

impl RosterEntry {
    /// Display name, falling back to a 1-based index label.
    pub fn display_name(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("candidate #{}", index + 1),
        }
    }
}
