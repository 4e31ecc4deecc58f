use crate::error::{GhStatsError, Result};
use std::path::Path;
use std::process::Command;

/// Summary counts from one cloc run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClocCounts {
    pub sloc: u64,
    pub comments: u64,
    pub blanks: u64,
}

/// Count lines with the external cloc tool. An unrunnable binary or
/// unparseable output means the dependency is missing and aborts the run.
pub fn count(path: &Path) -> Result<ClocCounts> {
    let output = Command::new("cloc")
        .arg("--csv")
        .arg(path)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GhStatsError::ToolNotAvailable
            } else {
                GhStatsError::Io(e)
            }
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_summary(&stdout).ok_or(GhStatsError::ToolNotAvailable)
}

/// Parse the trailing summary row of `cloc --csv` output. Columns end with
/// `..., blank, comment, code` in fixed order; individual fields that fail
/// to parse count as zero.
pub fn parse_summary(output: &str) -> Option<ClocCounts> {
    let last = output
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())?;
    let fields: Vec<&str> = last.split(',').collect();
    if fields.len() < 3 {
        return None;
    }

    let column = |from_end: usize| -> u64 {
        fields[fields.len() - 1 - from_end]
            .trim()
            .parse()
            .unwrap_or(0)
    };

    Some(ClocCounts {
        sloc: column(0),
        comments: column(1),
        blanks: column(2),
    })
}
