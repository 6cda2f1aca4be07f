use clap::Parser;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use repo_prs::remote::RemoteError;

const EXIT_SUCCESS: i32 = 0;
const EXIT_REPOSITORY: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_TERMINAL: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "repo-prs")]
#[command(about = "Browse the pull requests of the current GitHub repository", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/repo-prs/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Env file providing GITHUB_API_TOKEN
    #[arg(long, default_value = repo_prs::credentials::DEFAULT_ENV_FILE)]
    env_file: PathBuf,
}

/// Why startup or the session had to stop
#[derive(Debug, thiserror::Error)]
enum Failure {
    #[error("{0:#}")]
    Config(anyhow::Error),
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error("{0:#}")]
    Network(anyhow::Error),
    #[error("{0:#}")]
    Terminal(anyhow::Error),
}

impl Failure {
    fn exit_code(&self) -> i32 {
        match self {
            Failure::Config(_) => EXIT_CONFIG,
            Failure::Remote(_) => EXIT_REPOSITORY,
            Failure::Network(_) => EXIT_NETWORK,
            Failure::Terminal(_) => EXIT_TERMINAL,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Install rustls crypto provider (required for rustls 0.23+)
    let _ = rustls::crypto::ring::default_provider().install_default();

    match run(cli).await {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(failure) => {
            tracing::debug!(?failure, "fatal");
            let label = "Error:";
            if std::io::stderr().is_terminal() {
                eprintln!("{} {}", label.red().bold(), failure);
            } else {
                eprintln!("{} {}", label, failure);
            }
            std::process::exit(failure.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(repo_prs::stderr_buffer::BufferedStderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), Failure> {
    repo_prs::credentials::load_env_file(&cli.env_file).map_err(Failure::Config)?;
    let config = repo_prs::config::load_config(cli.config).map_err(Failure::Config)?;

    let slug = repo_prs::remote::resolve(Path::new("."))?;
    tracing::info!(repo = %slug, "resolved repository");

    let token = repo_prs::credentials::get_token_from_env();
    if token.is_none() {
        tracing::info!(
            "{} not set, using unauthenticated requests",
            repo_prs::credentials::ENV_TOKEN_VAR
        );
    }

    let client =
        repo_prs::github::create_client(token.as_deref()).map_err(Failure::Network)?;
    let prs = repo_prs::github::list_pull_requests(&client, &slug)
        .await
        .map_err(Failure::Network)?;

    let rows = repo_prs::review::project(prs);
    let app = repo_prs::tui::App::new(slug, rows, usize::from(config.table_height));
    let theme = repo_prs::tui::Theme::from_config(&config);

    repo_prs::tui::run_tui(app, theme)
        .await
        .map_err(Failure::Terminal)
}
