pub mod aggregate;
pub mod fetch;

pub use aggregate::{accumulate, one_year_ago, summarize_contributors, summarize_weeks};
pub use fetch::{anonymous_commit_totals, contributor_commit_totals};
