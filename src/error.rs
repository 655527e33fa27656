use std::path::PathBuf;

use thiserror::Error;

/// Fatal startup failures. None of them are retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration document could be found.
    #[error("no configuration found in '{}' (expected at least one *.json document)", .searched.display())]
    Missing { searched: PathBuf },

    /// Several documents exist and none (or an unknown one) was selected.
    #[error("{}", ambiguous_message(.selection, .available))]
    Ambiguous {
        selection: Option<String>,
        available: Vec<String>,
    },

    /// Total client demand exceeds what the fleet can carry.
    #[error("total demand {total_demand} exceeds fleet capacity {fleet_capacity}")]
    Infeasible {
        total_demand: f64,
        fleet_capacity: f64,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("result store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("result store format error: {0}")]
    Parse(#[from] serde_json::Error),
}

fn ambiguous_message(selection: &Option<String>, available: &[String]) -> String {
    match selection {
        Some(name) => format!(
            "configuration '{}' not found, available: {}",
            name,
            available.join(", ")
        ),
        None => format!(
            "multiple configurations available ({}), select one with --config",
            available.join(", ")
        ),
    }
}
