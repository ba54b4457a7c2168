use contract_smoke::{
    Result,
    api::HttpApiClient,
    config::{ChecksConfig, Config},
    scenario::{self, RunReport, Runner},
};
use tempfile::TempDir;
use tokio::fs;

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<std::path::PathBuf> {
    let config_path = dir.path().join("contract-smoke.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path)
}

/// Runs the planned scenarios against `base_url`, returning the outcome and
/// everything written to the diagnostic stream.
pub async fn run_suite(base_url: &str, checks: ChecksConfig) -> (Result<RunReport>, String) {
    let scenarios = scenario::plan(&checks).expect("valid plan");
    let client = HttpApiClient::new(base_url).expect("valid base url");

    let mut runner = Runner::new(client, Vec::new(), checks.strict);
    let result = runner.run(&scenarios).await;
    let output = String::from_utf8(runner.into_output()).expect("utf-8 output");

    (result, output)
}

pub fn strict_extended() -> ChecksConfig {
    ChecksConfig {
        strict: true,
        extended: true,
        skip: Vec::new(),
    }
}

pub fn config_for(base_url: &str) -> Config {
    let mut config = Config::default();
    config.target.base_url = base_url.to_string();
    config
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
target:
  base_url: "http://127.0.0.1:9000"

logs:
  level: "debug"

checks:
  strict: true
  extended: true
  skip:
    - "health"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
target:
  base_url: ["not", "a", "string"]

checks:
  strict: "sometimes"
"#;
