pub mod client;
pub mod repos;

pub use client::{GithubClient, StatsResponse};
pub use repos::{last_page, list_repositories, sorted_active};

use serde::Deserialize;

/// One weekly bucket from the commit-activity endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WeekBucket {
    /// Start of the week, epoch seconds
    pub week: i64,
    pub total: u64,
}

/// One contributor's entry from the contributor-stats endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributorActivity {
    /// Missing for commits whose author no longer resolves to an account
    pub author: Option<Author>,
    pub total: u64,
    pub weeks: Vec<ContributorWeek>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub login: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ContributorWeek {
    /// Start of the week, epoch seconds
    pub w: i64,
    /// Commit count for the week
    #[serde(default)]
    pub c: u64,
}
