pub mod cloc;
pub mod count;
pub mod workdir;

pub use workdir::WorkingCopy;

use crate::cli::{CountMode, RunConfig};
use crate::error::Result;
use crate::model::{LineStats, LineSummary, LineTotals};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;

/// Clone each repository fresh, count its lines with the selected backend,
/// and accumulate per-repository and grand totals. The working copy is
/// removed after each repository, including on the failure path.
pub fn line_counts(config: &RunConfig, repos: &[String]) -> Result<LineSummary> {
    let mut per_repo = BTreeMap::new();
    let mut totals = match config.count_mode {
        CountMode::Cloc => LineTotals::Cloc { sloc: 0, all: 0 },
        CountMode::Plain => LineTotals::Plain { lines: 0 },
    };

    let pb = ProgressBar::new(repos.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{pos}/{len} {bar:30.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb.set_message("Counting lines...");

    for repo in repos {
        pb.set_message(format!("cloning {repo}..."));
        let copy = WorkingCopy::clone_fresh(
            &config.clone_base,
            &config.owner,
            repo,
            &config.scratch_dir,
        )?;

        // Totals carry the mode, so one dispatch covers counting and
        // accumulation; a per-repo entry can never land in the wrong shape.
        let stats = match &mut totals {
            LineTotals::Cloc { sloc, all } => {
                let counts = cloc::count(copy.path())?;
                *sloc += counts.sloc;
                *all += counts.sloc + counts.comments + counts.blanks;
                LineStats::Cloc {
                    sloc: counts.sloc,
                    comments: counts.comments,
                    blanks: counts.blanks,
                }
            }
            LineTotals::Plain { lines } => {
                let counted = count::count(copy.path(), &config.exclude)?;
                *lines += counted;
                LineStats::Plain { lines: counted }
            }
        };
        per_repo.insert(repo.clone(), stats);
        pb.set_message(format!("{repo}: done"));
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(LineSummary { per_repo, totals })
}
