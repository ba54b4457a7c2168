use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Contract violation in '{scenario}': {reason}")]
    Violation { scenario: String, reason: String },
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn violation(scenario: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Violation {
            scenario: scenario.into(),
            reason: reason.into(),
        }
    }

    /// True when the run failed because the API broke the contract, as
    /// opposed to a transport or configuration problem.
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Violation { .. })
    }
}
