//! Environment-driven configuration

use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = ".cycle-tracker";
pub const DEFAULT_TOP_N: usize = 20;

/// Runtime configuration for the tracker binary
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted override records
    pub data_dir: PathBuf,
    /// Optional JSON catalog replacing the built-in indicators
    pub catalog_path: Option<PathBuf>,
    pub positions_report: Option<PathBuf>,
    pub traders_report: Option<PathBuf>,
    /// Row limit for report tables
    pub top_n: usize,
}

impl Config {
    /// Build configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` beforehand if a `.env` file should be honored.
    pub fn from_env() -> Self {
        let data_dir = env::var("CYCLE_TRACKER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        let top_n = env::var("CYCLE_TRACKER_TOP_N")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOP_N);

        Self {
            data_dir,
            catalog_path: optional_path("CYCLE_TRACKER_CATALOG"),
            positions_report: optional_path("CYCLE_TRACKER_POSITIONS_REPORT"),
            traders_report: optional_path("CYCLE_TRACKER_TRADERS_REPORT"),
            top_n,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_path: None,
            positions_report: None,
            traders_report: None,
            top_n: DEFAULT_TOP_N,
        }
    }
}

fn optional_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

/// Deployment environment name (`production`, `sandbox`, ...)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}
