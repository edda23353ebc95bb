//! Release notes generation command.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::{debug, info, warn};

use relnotes_config::{Config, ConfigError, OutputFormat, find_and_load_config, load_config};
use relnotes_core::{CoreError, NotesRequest, generate_release_notes};
use relnotes_format::{HtmlFormatter, MarkdownFormatter, NotesFormatter};
use relnotes_github::{GitHubClient, TokenProvider};

/// Output format argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// Markdown document
    Markdown,
    /// Standalone HTML page
    Html,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Markdown => OutputFormat::Markdown,
            OutputFormatArg::Html => OutputFormat::Html,
        }
    }
}

/// Arguments for generating release notes.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// GitHub user or organization owning the repository
    #[arg(short, long)]
    pub user: String,

    /// GitHub repository
    #[arg(short, long)]
    pub repo: String,

    /// Oldest commit to include (full or abbreviated SHA)
    #[arg(short, long)]
    pub since: String,

    /// Newest commit to include (full or abbreviated SHA)
    #[arg(long, visible_alias = "ut")]
    pub until: String,

    /// Output file for the release notes; the format's extension is appended
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Release version [default: v1.0.0]
    #[arg(short, long)]
    pub version: Option<String>,

    /// Output format [default: markdown]
    #[arg(short, long, value_enum, ignore_case = true)]
    pub output_format: Option<OutputFormatArg>,

    /// Path to a relnotes.toml (defaults to searching upwards from the current directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// GitHub API root URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// GitHub token (otherwise obtained from `gh auth status`)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

/// Loads the explicit config file, or the discovered one, or defaults.
fn resolve_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()));
    }

    match find_and_load_config() {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound(_)) => {
            debug!("no configuration file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => Err(e).context("failed to load configuration"),
    }
}

/// Creates the formatter for the requested output format.
fn create_formatter(format: OutputFormat) -> Box<dyn NotesFormatter> {
    match format {
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        OutputFormat::Html => Box::new(HtmlFormatter::new()),
    }
}

/// Appends the formatter's extension to the requested output path.
fn output_path(file: &Path, extension: &str) -> PathBuf {
    let mut path = file.as_os_str().to_owned();
    path.push(".");
    path.push(extension);
    PathBuf::from(path)
}

/// Runs the generate command.
pub fn run(args: GenerateArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;

    let format = args
        .output_format
        .map_or(config.notes.format, OutputFormat::from);
    let version = args.version.unwrap_or(config.notes.version);
    let api_url = args.api_url.unwrap_or(config.github.api_url);

    let tokens = match args.token {
        Some(token) => TokenProvider::from_token(token),
        None => TokenProvider::gh_cli(),
    };
    let client = GitHubClient::new(
        api_url,
        tokens,
        Duration::from_secs(config.github.timeout_secs),
    )
    .context("failed to create GitHub client")?;

    let request = NotesRequest {
        owner: &args.user,
        repo: &args.repo,
        since: &args.since,
        until: &args.until,
        version: Some(&version),
        page_size: config.github.page_size,
    };

    // Requests are strictly sequential, a single-threaded runtime is enough
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to create async runtime")?;

    let notes = rt
        .block_on(generate_release_notes(&client, &request))
        .inspect_err(|err| {
            if matches!(err, CoreError::GitHub(e) if e.is_transport()) {
                warn!(api_url = client.api_url(), "GitHub API unreachable or misbehaving");
            }
        })
        .with_context(|| {
            format!(
                "failed to generate release notes for {}/{}",
                args.user, args.repo
            )
        })?;

    let formatter = create_formatter(format);
    let rendered = formatter.format(&notes);

    match args.file {
        Some(file) => {
            let path = output_path(&file, formatter.extension());
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write release notes to {}", path.display()))?;
            info!(path = %path.display(), "release notes saved");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
