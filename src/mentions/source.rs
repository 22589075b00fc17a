use std::fs;
use std::path::Path;

use super::item::MentionGroup;
use crate::error::MentionsError;

/// Load mention groups from a JSON file holding an array of groups
pub fn load_groups_from_path(path: &Path) -> Result<Vec<MentionGroup>, MentionsError> {
    let contents = fs::read_to_string(path).map_err(|source| MentionsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let groups = parse_groups_json(&contents)?;
    log::debug!("Loaded {} mention groups from {}", groups.len(), path.display());
    Ok(groups)
}

pub fn parse_groups_json(content: &str) -> Result<Vec<MentionGroup>, MentionsError> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
