use crate::error::{GhStatsError, Result};
use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;
use std::fs;
use std::path::Path;

/// Count non-blank lines across a worktree, honoring `.gitignore` plus the
/// configured exclusion globs. Unreadable or non-UTF-8 files are skipped.
pub fn count(path: &Path, exclude: &[String]) -> Result<u64> {
    let mut overrides = OverrideBuilder::new(path);
    for pattern in exclude {
        overrides
            .add(&format!("!{pattern}"))
            .map_err(|e| GhStatsError::InvalidPattern(e.to_string()))?;
    }
    let overrides = overrides
        .build()
        .map_err(|e| GhStatsError::InvalidPattern(e.to_string()))?;

    let walker = WalkBuilder::new(path)
        .overrides(overrides)
        .hidden(false)
        .filter_entry(|entry| entry.file_name() != ".git")
        .build();

    let mut lines = 0u64;
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        let Ok(content) = fs::read_to_string(entry.path()) else {
            continue;
        };
        lines += content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .count() as u64;
    }

    Ok(lines)
}
