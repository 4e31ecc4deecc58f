use crate::cli::RunConfig;
use crate::commits;
use crate::github::{self, GithubClient};
use crate::lines;
use crate::report;
use anyhow::Context;
use console::style;

/// The whole pipeline in fixed order: repository list, commit aggregates,
/// contributor aggregates, line counts, report and charts. Strictly
/// sequential; the fatal errors (rate limit, missing tool, malformed
/// response) abort before any report is written.
pub fn exec(config: RunConfig) -> anyhow::Result<()> {
    let client = GithubClient::new(&config.api_base, config.token.clone());

    let repos = github::list_repositories(&client, &config.owner, config.is_organization)
        .context("Failed to list repositories")?;
    // Status lines stay off stdout in JSON mode
    if !config.json {
        if repos.is_empty() {
            println!("No active repositories found for {}", config.owner);
        } else {
            println!(
                "{} active repositories for {}",
                style(repos.len()).cyan(),
                style(&config.owner).bold()
            );
        }
    }

    let (commit_summary, contributor_summary) = if config.include_commits {
        let commit_summary = commits::anonymous_commit_totals(&client, &config.owner, &repos)
            .context("Failed to aggregate commit activity")?;
        let contributor_summary =
            commits::contributor_commit_totals(&client, &config.owner, &repos)
                .context("Failed to aggregate contributor activity")?;
        (Some(commit_summary), Some(contributor_summary))
    } else {
        (None, None)
    };

    let line_summary = if config.include_lines {
        Some(lines::line_counts(&config, &repos).context("Failed to count lines")?)
    } else {
        None
    };

    report::write(
        &config,
        commit_summary.as_ref(),
        contributor_summary.as_ref(),
        line_summary.as_ref(),
    )
    .context("Failed to write report")?;

    Ok(())
}
