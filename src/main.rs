use anyhow::Result;
use clap::Parser;
use contract_smoke::{
    api::HttpApiClient,
    config::{self, Overrides},
    scenario::{self, Runner},
};
use std::path::PathBuf;
use tracing::info;

/// Smoke-test the validation-error contract of a running API.
#[derive(Parser, Debug)]
#[command(name = "contract-smoke", version)]
struct Cli {
    /// Configuration file (overrides `CONFIG_PATH`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Base URL of the API under test.
    #[arg(long, env = "CONTRACT_SMOKE_BASE_URL", value_name = "URL")]
    base_url: Option<String>,
    /// Log level: error, warn, info, debug, trace.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
    /// Also check `error.code`, `error.message` and the detail key set.
    #[arg(long)]
    strict: bool,
    /// Run the nested-field and no-5xx scenarios after the core suite.
    #[arg(long)]
    extended: bool,
    /// Scenario id to leave out; may be repeated.
    #[arg(long, value_name = "ID")]
    skip: Vec<String>,
}

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::try_new(level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .init();

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config).await?.apply(Overrides {
        base_url: cli.base_url,
        log_level: cli.log_level,
        strict: cli.strict,
        extended: cli.extended,
        skip: cli.skip,
    });

    // RUST_LOG overrides the configured level
    if std::env::var_os("RUST_LOG").is_none() {
        validate_log_level(&config.logs.level)?;
    }
    init_tracing(&config.logs.level)?;

    config.validate()?;
    info!("Checking validation contract at {}", config.target.base_url);

    let scenarios = scenario::plan(&config.checks)?;
    let client = HttpApiClient::new(&config.target.base_url)?;

    let stdout = std::io::stdout();
    let mut runner = Runner::new(client, stdout.lock(), config.checks.strict);
    runner.run(&scenarios).await?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("contract-smoke: {:#}", e);
        std::process::exit(1);
    }
}
