//! Runtime environment details attached to a successful job result.
//!
//! The key names are kept from the legacy result format consumed by
//! existing tooling: `python_path` carries the running executable's path.

use serde::{Deserialize, Serialize};

/// Environment variable naming the active conda environment.
pub const CONDA_ENV_VAR: &str = "CONDA_DEFAULT_ENV";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentInfo {
    pub python_path: String,
    pub conda_env: String,
}

impl EnvironmentInfo {
    pub fn collect() -> Self {
        Self {
            python_path: get_executable_path(),
            conda_env: get_conda_env(),
        }
    }
}

fn get_executable_path() -> String {
    std::env::current_exe()
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "Unknown".to_string())
}

fn get_conda_env() -> String {
    std::env::var(CONDA_ENV_VAR).unwrap_or_else(|_| "None".to_string())
}
