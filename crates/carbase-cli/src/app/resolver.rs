//! Path resolution for config and data files.

use std::path::{Path, PathBuf};

use crate::config::{default_config_path, read_config, CarbaseConfig};
use crate::constants::DEFAULT_DATA_FILE;

/// Resolve the config file path, checking CARBASE_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("CARBASE_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file if one exists. A missing file is not an error.
pub fn load_config() -> anyhow::Result<CarbaseConfig> {
    let path = resolve_config_path()?;
    if !path.exists() {
        return Ok(CarbaseConfig::default());
    }
    read_config(&path)
}

/// Resolve the data file: `--data`/CARBASE_DATA, then config, then `base.txt`.
pub fn resolve_data_path(flag: Option<&str>, config: &CarbaseConfig) -> PathBuf {
    if let Some(path) = flag.filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }
    if let Some(path) = config.data.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_DATA_FILE)
}

/// Error message when the data file is missing.
pub fn missing_data_message(path: &Path) -> String {
    format!(
        "No data file found at {}\n\nRun:\n  carbase menu\n\nOr specify a data file:\n  CARBASE_DATA=/path/to/base.txt carbase list",
        path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DataSection;

    #[test]
    fn test_flag_wins_over_config() {
        let config = CarbaseConfig {
            data: DataSection {
                path: Some("from-config.txt".to_string()),
            },
            ..Default::default()
        };
        assert_eq!(
            resolve_data_path(Some("flag.txt"), &config),
            PathBuf::from("flag.txt")
        );
        assert_eq!(
            resolve_data_path(None, &config),
            PathBuf::from("from-config.txt")
        );
    }

    #[test]
    fn test_default_data_file() {
        let config = CarbaseConfig::default();
        assert_eq!(resolve_data_path(None, &config), PathBuf::from("base.txt"));
        assert_eq!(resolve_data_path(Some("  "), &config), PathBuf::from("base.txt"));
    }

    #[test]
    fn test_missing_data_message_mentions_path() {
        let message = missing_data_message(Path::new("/tmp/cars.txt"));
        assert!(message.contains("/tmp/cars.txt"));
        assert!(message.contains("CARBASE_DATA"));
    }
}
