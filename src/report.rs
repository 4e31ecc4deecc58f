use crate::chart::{render, ChartKind, ChartSeries, ChartSpec};
use crate::cli::{CountMode, RunConfig};
use crate::error::Result;
use crate::model::{
    CommitSummary, ContributorSummary, LineStats, LineSummary, LineTotals, StatsOutput,
    SCHEMA_VERSION,
};
use chrono::{Local, Utc};
use console::style;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const SEPARATOR_WIDTH: usize = 42;

/// Write the merged report (and charts, when enabled), or print the JSON
/// envelope instead. Returns the report path, or None in JSON mode.
pub fn write(
    config: &RunConfig,
    commits: Option<&CommitSummary>,
    contributors: Option<&ContributorSummary>,
    lines: Option<&LineSummary>,
) -> anyhow::Result<Option<PathBuf>> {
    if config.json {
        let output = StatsOutput {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            owner: &config.owner,
            count_mode: config.count_mode.as_str(),
            commits,
            contributors,
            lines,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(None);
    }

    let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");
    let report_path = if config.generate_charts {
        let chart_dir = config.output_dir.join(timestamp.to_string());
        fs::create_dir_all(&chart_dir)?;
        write_charts(&chart_dir, commits, contributors)?;
        chart_dir.join("stats.txt")
    } else {
        fs::create_dir_all(&config.output_dir)?;
        config.output_dir.join(format!("stats-{timestamp}.txt"))
    };

    let text = format_report(&config.owner, config.count_mode, commits, contributors, lines);
    fs::write(&report_path, &text)?;

    println!("\n{text}");
    println!(
        "\n{} {}",
        style("Report written to").bold(),
        style(report_path.display()).cyan()
    );
    Ok(Some(report_path))
}

/// Build the structured text document from the typed aggregates. Absent
/// aggregates render as an explanatory line, never as a crash.
pub fn format_report(
    owner: &str,
    mode: CountMode,
    commits: Option<&CommitSummary>,
    contributors: Option<&ContributorSummary>,
    lines: Option<&LineSummary>,
) -> String {
    let separator = format!("\n\n{}\n\n", "*".repeat(SEPARATOR_WIDTH));
    let sections = [
        contributors_section(contributors),
        commits_section(commits),
        lines_section(lines),
    ];

    format!(
        "Stats generated by ghstats for {owner}\ncount_mode={}\n\n{}\n",
        mode.as_str(),
        sections.join(separator.as_str())
    )
}

/// Map entries sorted descending by value, ties broken by label.
fn sorted_desc(map: &BTreeMap<String, u64>) -> Vec<(&str, u64)> {
    let mut entries: Vec<(&str, u64)> = map
        .iter()
        .map(|(label, value)| (label.as_str(), *value))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    entries
}

fn contributors_section(summary: Option<&ContributorSummary>) -> String {
    let Some(summary) = summary else {
        return "No contributor stats were collected for this run.".to_string();
    };

    let mut out = String::new();
    for (repo, breakdown) in &summary.per_repo {
        out.push_str(&format!("{repo}:\n"));
        out.push_str("\ttotal:\n");
        for (login, commits) in sorted_desc(&breakdown.total) {
            out.push_str(&format!("\t\t{login}: {commits}\n"));
        }
        out.push_str("\tpast year:\n");
        for (login, commits) in sorted_desc(&breakdown.past_year) {
            out.push_str(&format!("\t\t{login}: {commits}\n"));
        }
    }

    out.push_str("Total all time:\n");
    for (login, commits) in sorted_desc(&summary.overall.total) {
        out.push_str(&format!("\t{login}: {commits}\n"));
    }
    out.push_str("Past year:\n");
    for (login, commits) in sorted_desc(&summary.overall.past_year) {
        out.push_str(&format!("\t{login}: {commits}\n"));
    }

    if !summary.pending.is_empty() {
        out.push_str(&pending_line(&summary.pending));
    }
    out.trim_end().to_string()
}

fn commits_section(summary: Option<&CommitSummary>) -> String {
    let Some(summary) = summary else {
        return "No commit stats were collected for this run.".to_string();
    };

    let mut out = String::new();
    for (repo, count) in &summary.per_repo {
        out.push_str(&format!("{repo}: {} commits past year\n", count.past_year));
    }
    out.push_str(&format!(
        "Total commits of past year: {}",
        summary.grand.past_year
    ));

    if !summary.pending.is_empty() {
        out.push('\n');
        out.push_str(&pending_line(&summary.pending));
    }
    out.trim_end().to_string()
}

fn pending_line(pending: &[String]) -> String {
    format!(
        "Stats still being computed for: {}. Re-run in a few minutes to include them.\n",
        pending.join(", ")
    )
}

fn lines_section(summary: Option<&LineSummary>) -> String {
    let Some(summary) = summary else {
        return "No line-count stats were collected for this run.".to_string();
    };

    let mut out = String::new();
    for (repo, stats) in &summary.per_repo {
        match stats {
            LineStats::Cloc {
                sloc,
                comments,
                blanks,
            } => {
                out.push_str(&format!(
                    "{repo}: {sloc} sloc - {comments} comments - {blanks} blank lines - {} total\n",
                    sloc + comments + blanks
                ));
            }
            LineStats::Plain { lines } => {
                out.push_str(&format!("{repo}: {lines} lines total\n"));
            }
        }
    }

    match summary.totals {
        LineTotals::Cloc { sloc, all } => {
            out.push_str(&format!("Total SLOC: {sloc}\n"));
            out.push_str(&format!(
                "Total lines including comments and blanks: {all}"
            ));
        }
        LineTotals::Plain { lines } => {
            out.push_str(&format!("Total SLOC: {lines}"));
        }
    }
    out.trim_end().to_string()
}

fn write_charts(
    dir: &Path,
    commits: Option<&CommitSummary>,
    contributors: Option<&ContributorSummary>,
) -> Result<()> {
    if let Some(summary) = commits {
        let raw: BTreeMap<String, u64> = summary
            .per_repo
            .iter()
            .map(|(repo, count)| (repo.clone(), count.past_year))
            .collect();
        render(
            &ChartSeries::build(&raw, 10),
            &ChartSpec {
                kind: ChartKind::Proportional,
                legend: "Repositories",
                title: "Total commits to all repositories in the last year",
            },
            &dir.join("yearly_commits_by_repo.svg"),
        )?;
    }

    if let Some(summary) = contributors {
        render(
            &ChartSeries::build(&summary.overall.total, 1),
            &ChartSpec {
                kind: ChartKind::RankedMagnitude,
                legend: "Commits",
                title: "Total commits from all members",
            },
            &dir.join("total_commits.svg"),
        )?;
        render(
            &ChartSeries::build(&summary.overall.past_year, 1),
            &ChartSpec {
                kind: ChartKind::RankedMagnitude,
                legend: "Commits",
                title: "Total commits from all members last year",
            },
            &dir.join("last_year_commits.svg"),
        )?;

        for (repo, breakdown) in &summary.per_repo {
            let repo_dir = dir.join(repo);
            fs::create_dir_all(&repo_dir)?;
            render(
                &ChartSeries::build(&breakdown.total, 1),
                &ChartSpec {
                    kind: ChartKind::RankedMagnitude,
                    legend: "Commits",
                    title: "Total commits from all contributors",
                },
                &repo_dir.join("total_commits.svg"),
            )?;
            render(
                &ChartSeries::build(&breakdown.past_year, 1),
                &ChartSpec {
                    kind: ChartKind::RankedMagnitude,
                    legend: "Commits",
                    title: "Total commits from all contributors last year",
                },
                &repo_dir.join("past_year_commits.svg"),
            )?;
        }
    }

    Ok(())
}
