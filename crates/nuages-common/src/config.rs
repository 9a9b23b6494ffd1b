//! Configuration model for a Nuages session.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{NuagesError, Result};

/// Root configuration for a dashboard session.
///
/// Every field has a default, so a config file only needs to name the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NuagesConfig {
    /// Suffix used to derive a container's domain from its name.
    pub domain_suffix: String,
    /// Memory allotted to newly created containers, in megabytes.
    pub default_ram_total_mb: u64,
    /// Inclusive lower bound of synthetic CPU values.
    pub cpu_min: u8,
    /// Exclusive upper bound of synthetic CPU values.
    pub cpu_max: u8,
    /// Whether the session starts with the demo containers.
    pub seed_demo_data: bool,
    /// Message of the seeded welcome notification.
    pub welcome_message: String,
}

impl Default for NuagesConfig {
    fn default() -> Self {
        Self {
            domain_suffix: constants::DEFAULT_DOMAIN_SUFFIX.to_string(),
            default_ram_total_mb: constants::DEFAULT_RAM_TOTAL_MB,
            cpu_min: constants::DEFAULT_CPU_MIN,
            cpu_max: constants::DEFAULT_CPU_MAX,
            seed_demo_data: true,
            welcome_message: constants::WELCOME_MESSAGE.to_string(),
        }
    }
}

impl NuagesConfig {
    /// Loads a configuration from a JSON file and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// fails [`NuagesConfig::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| NuagesError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configured values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`NuagesError::Config`] if the CPU range is empty or exceeds
    /// 100%, or the domain suffix is blank.
    pub fn validate(&self) -> Result<()> {
        if self.cpu_min >= self.cpu_max {
            return Err(NuagesError::Config {
                message: format!(
                    "cpu_min ({}) must be lower than cpu_max ({})",
                    self.cpu_min, self.cpu_max
                ),
            });
        }
        if self.cpu_max > constants::MAX_CPU_PERCENT {
            return Err(NuagesError::Config {
                message: format!("cpu_max ({}) cannot exceed 100", self.cpu_max),
            });
        }
        if self.domain_suffix.trim().is_empty() {
            return Err(NuagesError::Config {
                message: "domain_suffix cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = NuagesConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.domain_suffix, "nuages.tikloud.re");
        assert_eq!(config.default_ram_total_mb, 1024);
        assert_eq!((config.cpu_min, config.cpu_max), (10, 60));
    }

    #[test]
    fn load_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "seed_demo_data": false, "cpu_max": 90 }}"#).unwrap();

        let config = NuagesConfig::load(file.path()).unwrap();
        assert!(!config.seed_demo_data);
        assert_eq!(config.cpu_max, 90);
        assert_eq!(config.cpu_min, 10);
        assert_eq!(config.domain_suffix, "nuages.tikloud.re");
    }

    #[test]
    fn load_rejects_inverted_cpu_range() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "cpu_min": 50, "cpu_max": 20 }}"#).unwrap();

        let err = NuagesConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("cpu_min"), "got: {err}");
    }

    #[test]
    fn cpu_max_above_hundred_is_rejected() {
        let config = NuagesConfig {
            cpu_max: 101,
            ..NuagesConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = NuagesConfig::load(Path::new("/nonexistent/nuages.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/nuages.json"), "got: {err}");
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = NuagesConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, NuagesError::Serialization { .. }));
    }
}
