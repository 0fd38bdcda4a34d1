mod schema;

pub use schema::{Roster, RosterEntry};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a candidate roster from a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The roster file does not exist
/// - The roster file cannot be read
/// - The YAML cannot be parsed
pub fn load_roster(path: &Path) -> Result<Roster> {
    if !path.exists() {
        anyhow::bail!("Roster file not found at {}", path.display());
    }

    let roster_content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file at {}", path.display()))?;

    let roster: Roster = serde_saphyr::from_str(&roster_content)
        .with_context(|| format!("Failed to parse roster: invalid YAML in {}", path.display()))?;

    Ok(roster)
}
