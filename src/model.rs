use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_VERSION: u32 = 1;

/// Rollup labels reserved in aggregate mappings; never valid chart categories.
pub const SUMMARY_KEYS: [&str; 2] = ["total", "past_year"];

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl Repository {
    pub fn is_active(&self) -> bool {
        !self.archived && !self.disabled
    }
}

/// Commit counts for one repository: all weeks, and weeks within the
/// trailing 365 days. `total >= past_year` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CommitCount {
    pub total: u64,
    pub past_year: u64,
}

impl CommitCount {
    pub fn add(&mut self, other: CommitCount) {
        self.total += other.total;
        self.past_year += other.past_year;
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CommitSummary {
    pub per_repo: BTreeMap<String, CommitCount>,
    pub grand: CommitCount,
    /// Repositories whose stats were still being computed server-side.
    pub pending: Vec<String>,
}

/// Per-contributor commit counts, all time and trailing year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContributorBreakdown {
    pub total: BTreeMap<String, u64>,
    pub past_year: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContributorSummary {
    pub per_repo: BTreeMap<String, ContributorBreakdown>,
    pub overall: ContributorBreakdown,
    pub pending: Vec<String>,
}

/// Line counts for one repository. The two counting backends produce
/// different shapes and are never mixed within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LineStats {
    Cloc { sloc: u64, comments: u64, blanks: u64 },
    Plain { lines: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LineTotals {
    Cloc { sloc: u64, all: u64 },
    Plain { lines: u64 },
}

#[derive(Debug, Clone, Serialize)]
pub struct LineSummary {
    pub per_repo: BTreeMap<String, LineStats>,
    pub totals: LineTotals,
}

/// Machine-readable envelope for `--json` output.
#[derive(Debug, Serialize)]
pub struct StatsOutput<'a> {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub owner: &'a str,
    pub count_mode: &'a str,
    pub commits: Option<&'a CommitSummary>,
    pub contributors: Option<&'a ContributorSummary>,
    pub lines: Option<&'a LineSummary>,
}
