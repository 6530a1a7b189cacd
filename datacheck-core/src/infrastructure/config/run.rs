// datacheck-core/src/infrastructure/config/run.rs

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::infrastructure::error::InfrastructureError;

pub const CONFIG_FILE: &str = "datacheck.yaml";
pub const DEFAULT_INPUT: &str = "customers-100000.csv";
pub const DEFAULT_REPORT: &str = "validation_report.pdf";

pub const INPUT_ENV: &str = "DATACHECK_INPUT";
pub const REPORT_ENV: &str = "DATACHECK_REPORT";
pub const RESULTS_ENV: &str = "DATACHECK_RESULTS";

/// Where the run reads from and writes to.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RunConfig {
    #[serde(default = "default_input")]
    pub input_path: PathBuf,

    #[serde(default = "default_report")]
    pub report_path: PathBuf,

    /// Optional JSON dump of the run result.
    #[serde(default)]
    pub results_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: default_input(),
            report_path: default_report(),
            results_path: None,
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}
fn default_report() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT)
}

// --- LOADER ---

/// Defaults, then `datacheck.yaml` in `dir` if present, then environment.
#[instrument(skip(dir))]
pub fn load_run_config(dir: &Path) -> Result<RunConfig, InfrastructureError> {
    let mut config = match find_config_file(dir) {
        Some(path) => {
            info!(path = ?path, "Loading run configuration");
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                RunConfig::default()
            } else {
                serde_yaml::from_str(&content)?
            }
        }
        None => RunConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let candidates = [CONFIG_FILE, "datacheck.yml"];
    candidates
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.exists())
}

fn apply_env_overrides<F>(config: &mut RunConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(INPUT_ENV) {
        info!(old = ?config.input_path, new = ?val, "Overriding input path via ENV");
        config.input_path = PathBuf::from(val);
    }
    if let Some(val) = lookup(REPORT_ENV) {
        info!(old = ?config.report_path, new = ?val, "Overriding report path via ENV");
        config.report_path = PathBuf::from(val);
    }
    if let Some(val) = lookup(RESULTS_ENV) {
        config.results_path = Some(PathBuf::from(val));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_file() {
        let config = RunConfig::default();
        assert_eq!(config.input_path, PathBuf::from("customers-100000.csv"));
        assert_eq!(config.report_path, PathBuf::from("validation_report.pdf"));
        assert_eq!(config.results_path, None);
    }

    #[test]
    fn test_yaml_partial_override() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join(CONFIG_FILE),
            "input-path: data/customers.csv\nresults-path: out/results.json\n",
        )?;

        let path = find_config_file(dir.path()).unwrap();
        let config: RunConfig = serde_yaml::from_str(&fs::read_to_string(path)?)?;

        assert_eq!(config.input_path, PathBuf::from("data/customers.csv"));
        assert_eq!(config.report_path, PathBuf::from(DEFAULT_REPORT));
        assert_eq!(config.results_path, Some(PathBuf::from("out/results.json")));
        Ok(())
    }

    #[test]
    fn test_unknown_key_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join(CONFIG_FILE), "input_path: typo.csv\n")?;

        let err = load_run_config(dir.path()).unwrap_err();
        assert!(matches!(err, InfrastructureError::YamlError(_)));
        Ok(())
    }

    #[test]
    fn test_env_overrides_win() {
        let mut config = RunConfig::default();
        apply_env_overrides(&mut config, |key| match key {
            REPORT_ENV => Some("/tmp/r.pdf".to_string()),
            _ => None,
        });
        assert_eq!(config.report_path, PathBuf::from("/tmp/r.pdf"));
        assert_eq!(config.input_path, PathBuf::from(DEFAULT_INPUT));
    }
}
