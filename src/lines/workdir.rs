use crate::error::{GhStatsError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A freshly cloned worktree under the scratch directory.
///
/// Any stale directory of the same name is removed *before* cloning, so a
/// leftover from an aborted earlier run can never shadow the fresh clone.
/// The directory is removed again on drop, on every exit path.
pub struct WorkingCopy {
    path: PathBuf,
}

impl WorkingCopy {
    pub fn clone_fresh(clone_base: &str, owner: &str, repo: &str, scratch: &Path) -> Result<Self> {
        fs::create_dir_all(scratch)?;
        let path = scratch.join(repo);
        if path.exists() {
            fs::remove_dir_all(&path)?;
        }

        let url = format!("{}/{owner}/{repo}", clone_base.trim_end_matches('/'));
        let output = Command::new("git")
            .args(["clone", "--quiet"])
            .arg(&url)
            .arg(&path)
            .output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GhStatsError::CloneFailed(format!(
                "{url}: {}",
                stderr.trim()
            )));
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for WorkingCopy {
    fn drop(&mut self) {
        // Best effort; a leftover is removed before the next clone anyway
        let _ = fs::remove_dir_all(&self.path);
    }
}
