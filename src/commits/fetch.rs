use super::aggregate::{accumulate, one_year_ago, summarize_contributors, summarize_weeks};
use crate::error::Result;
use crate::github::{ContributorActivity, GithubClient, StatsResponse, WeekBucket};
use crate::model::{CommitSummary, ContributorSummary};
use indicatif::{ProgressBar, ProgressStyle};

fn progress(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{pos}/{len} {bar:30.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}

/// Per-repository weekly commit totals plus grand totals. Repositories
/// whose stats are still being computed are skipped for this run and
/// reported as pending; a rate limit aborts the whole aggregation.
pub fn anonymous_commit_totals(
    client: &GithubClient,
    owner: &str,
    repos: &[String],
) -> Result<CommitSummary> {
    let cutoff = one_year_ago();
    let mut summary = CommitSummary::default();

    let pb = progress(repos.len());
    pb.set_message("Fetching commit activity...");

    for repo in repos {
        let path = format!("/repos/{owner}/{repo}/stats/commit_activity");
        match client.get_stats::<Vec<WeekBucket>>(&path)? {
            StatsResponse::Ready(weeks) => {
                let count = summarize_weeks(&weeks, cutoff);
                summary.grand.add(count);
                summary.per_repo.insert(repo.clone(), count);
                pb.set_message(format!("{repo}: ok"));
            }
            StatsResponse::Pending => {
                pb.println(format!("{repo}: awaiting server-side computation"));
                summary.pending.push(repo.clone());
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(summary)
}

/// Per-repository and account-wide contributor totals under the trailing
/// 365-day window rule. Same pending/rate-limit semantics as above.
pub fn contributor_commit_totals(
    client: &GithubClient,
    owner: &str,
    repos: &[String],
) -> Result<ContributorSummary> {
    let cutoff = one_year_ago();
    let mut summary = ContributorSummary::default();

    let pb = progress(repos.len());
    pb.set_message("Fetching contributor stats...");

    for repo in repos {
        let path = format!("/repos/{owner}/{repo}/stats/contributors");
        match client.get_stats::<Vec<ContributorActivity>>(&path)? {
            StatsResponse::Ready(entries) => {
                let breakdown = summarize_contributors(&entries, cutoff);
                accumulate(&mut summary.overall, &breakdown);
                summary.per_repo.insert(repo.clone(), breakdown);
                pb.set_message(format!("{repo}: ok"));
            }
            StatsResponse::Pending => {
                pb.println(format!("{repo}: awaiting server-side computation"));
                summary.pending.push(repo.clone());
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(summary)
}
