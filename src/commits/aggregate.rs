use crate::github::{ContributorActivity, WeekBucket};
use crate::model::{CommitCount, ContributorBreakdown};
use chrono::{Duration, Utc};

/// Epoch cutoff 365 days back. Weeks strictly newer than this count
/// toward `past_year`.
pub fn one_year_ago() -> i64 {
    (Utc::now() - Duration::days(365)).timestamp()
}

/// Sum weekly buckets into total and trailing-year counts.
pub fn summarize_weeks(weeks: &[WeekBucket], cutoff: i64) -> CommitCount {
    let mut count = CommitCount::default();
    for bucket in weeks {
        count.total += bucket.total;
        if bucket.week > cutoff {
            count.past_year += bucket.total;
        }
    }
    count
}

/// Per-contributor totals for one repository under the same window rule.
/// Entries without a resolvable author are skipped.
pub fn summarize_contributors(
    entries: &[ContributorActivity],
    cutoff: i64,
) -> ContributorBreakdown {
    let mut breakdown = ContributorBreakdown::default();
    for entry in entries {
        let Some(author) = &entry.author else { continue };
        let past_year: u64 = entry
            .weeks
            .iter()
            .filter(|week| week.w > cutoff)
            .map(|week| week.c)
            .sum();

        *breakdown.total.entry(author.login.clone()).or_insert(0) += entry.total;
        *breakdown.past_year.entry(author.login.clone()).or_insert(0) += past_year;
    }
    breakdown
}

/// Fold one repository's breakdown into the account-wide breakdown.
pub fn accumulate(overall: &mut ContributorBreakdown, repo: &ContributorBreakdown) {
    for (login, commits) in &repo.total {
        *overall.total.entry(login.clone()).or_insert(0) += commits;
    }
    for (login, commits) in &repo.past_year {
        *overall.past_year.entry(login.clone()).or_insert(0) += commits;
    }
}
