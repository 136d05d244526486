//! Grade tier configuration.
//!
//! A tier table is stored on disk as a JSON array:
//! ```json
//! [
//!   { "threshold": 59, "letter": "F" },
//!   { "threshold": 75, "letter": "C" },
//!   { "threshold": 100, "letter": "A" }
//! ]
//! ```
//! Entries may appear in any order.

use std::path::Path;
use tracing::{debug, info};

use crate::error::{GradeError, Result};
use crate::tiers::{GradeTiers, Tier};

/// Environment variable consulted when no tier file is passed on the command
/// line.
pub const TIERS_ENV: &str = "GRADEBOOK_TIERS";

/// Parses a tier table from JSON text.
pub fn parse_tiers(content: &str) -> Result<GradeTiers> {
    let tiers: Vec<Tier> = serde_json::from_str(content)
        .map_err(|e| GradeError::config(format!("invalid tier table: {e}")))?;
    GradeTiers::new(tiers)
}

/// Loads a tier table from a JSON file at `path`.
pub fn load_tiers(path: &Path) -> Result<GradeTiers> {
    let content = std::fs::read_to_string(path).map_err(|e| GradeError::io(path, e))?;
    let tiers = parse_tiers(&content).map_err(|e| match e {
        GradeError::Config { message } => {
            GradeError::config(format!("{}: {message}", path.display()))
        }
        other => other,
    })?;
    info!(path = %path.display(), tiers = tiers.len(), "Loaded grade tiers");
    Ok(tiers)
}

/// Loads the tier table from `path` if given, otherwise the standard table.
pub fn resolve_tiers(path: Option<&Path>) -> Result<GradeTiers> {
    match path {
        Some(path) => load_tiers(path),
        None => {
            debug!("Using standard grade tiers");
            Ok(GradeTiers::standard())
        }
    }
}
