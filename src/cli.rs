use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ghstats")]
#[command(about = "Aggregate commit, contributor, and line-count statistics across a GitHub account")]
#[command(version)]
pub struct Cli {
    #[arg(help = "GitHub user or organization whose repositories to analyze")]
    pub owner: String,

    #[arg(long, help = "Treat the owner as an organization rather than a user")]
    pub org: bool,

    #[arg(long, value_enum, default_value = "cloc", help = "Line-counting backend")]
    pub count_mode: CountMode,

    #[arg(long, help = "Skip commit and contributor statistics")]
    pub no_commits: bool,

    #[arg(long, help = "Skip line-count statistics (no cloning)")]
    pub no_lines: bool,

    #[arg(long, help = "Generate SVG charts alongside the text report")]
    pub charts: bool,

    #[arg(long, help = "Print the aggregates as JSON instead of writing a report")]
    pub json: bool,

    #[arg(long, help = "Directory for the report and charts", default_value = ".")]
    pub output: PathBuf,

    #[arg(long, help = "Scratch directory for temporary clones")]
    pub scratch: Option<PathBuf>,

    #[arg(long, help = "Exclude paths matching these globs from plain-mode counting")]
    pub exclude: Vec<String>,

    #[arg(long, help = "GitHub API token (defaults to $GITHUB_TOKEN; unauthenticated without one)")]
    pub token: Option<String>,

    #[arg(long, default_value = "https://api.github.com", help = "GitHub API base URL")]
    pub api_base: String,

    #[arg(long, default_value = "https://github.com", help = "Base URL for clones")]
    pub clone_base: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CountMode {
    /// External cloc tool: source, comment, and blank counts
    Cloc,
    /// Built-in counter: non-blank lines only
    Plain,
}

impl CountMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountMode::Cloc => "cloc",
            CountMode::Plain => "plain",
        }
    }
}

/// Everything the pipeline needs, resolved from the CLI and environment.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub owner: String,
    pub is_organization: bool,
    pub count_mode: CountMode,
    pub include_commits: bool,
    pub include_lines: bool,
    pub generate_charts: bool,
    pub json: bool,
    pub output_dir: PathBuf,
    pub scratch_dir: PathBuf,
    pub exclude: Vec<String>,
    pub api_base: String,
    pub clone_base: String,
    pub token: Option<String>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::run::exec(self.into_config())
    }

    fn into_config(self) -> RunConfig {
        let token = self
            .token
            .or_else(|| std::env::var("GITHUB_TOKEN").ok())
            .filter(|t| !t.is_empty());
        let scratch_dir = self
            .scratch
            .unwrap_or_else(|| std::env::temp_dir().join("ghstats"));

        RunConfig {
            owner: self.owner,
            is_organization: self.org,
            count_mode: self.count_mode,
            include_commits: !self.no_commits,
            include_lines: !self.no_lines,
            generate_charts: self.charts,
            json: self.json,
            output_dir: self.output,
            scratch_dir,
            exclude: self.exclude,
            api_base: self.api_base,
            clone_base: self.clone_base,
            token,
        }
    }
}
