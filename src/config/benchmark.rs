use crate::bands::MAX_WORKERS;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct BenchmarkConfig {
    pub input: PathBuf,
    /// Worker counts to run, in order. The first one is the parity reference.
    #[serde(default = "default_workers")]
    pub workers: Vec<usize>,
    /// Passes per worker count; timings report the min and mean.
    #[serde(default = "default_repetitions")]
    pub repetitions: usize,
    pub output: BenchmarkOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct BenchmarkOutputConfig {
    pub report_json: PathBuf,
    #[serde(default)]
    pub edges_image: Option<PathBuf>,
}

fn default_workers() -> Vec<usize> {
    (1..=MAX_WORKERS).collect()
}

fn default_repetitions() -> usize {
    3
}

impl BenchmarkConfig {
    /// Reject configurations that cannot produce a meaningful report.
    pub fn validate(&self) -> Result<(), String> {
        if self.workers.is_empty() {
            return Err("Config lists no worker counts".to_string());
        }
        if let Some(&bad) = self
            .workers
            .iter()
            .find(|&&n| !(1..=MAX_WORKERS).contains(&n))
        {
            return Err(format!("Worker count {bad} is outside 1..={MAX_WORKERS}"));
        }
        if self.repetitions == 0 {
            return Err("repetitions must be at least 1".to_string());
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<BenchmarkConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<BenchmarkConfig, String> {
    let config: BenchmarkConfig = serde_json::from_str(data).map_err(|e| e.to_string())?;
    config.validate()?;
    Ok(config)
}
