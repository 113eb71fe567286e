use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use tracing::debug;
use validator::Validate;

use crate::domain::error::Result;
use crate::domain::gradebook::GradebookConfig;

pub const ENV_PREFIX: &str = "GRADEBOOK_";

/// Layers defaults, an optional TOML file and `GRADEBOOK_*` variables
pub struct ConfigService {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = prefix.to_string();
        self
    }

    pub fn figment(&self) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(GradebookConfig::default()));
        if let Some(path) = &self.config_path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(&self.env_prefix))
    }

    pub fn load(&self) -> Result<GradebookConfig> {
        let config: GradebookConfig = self.figment().extract()?;
        config.validate()?;
        debug!(
            blank_lines = %config.blank_lines,
            export_quoting = %config.export_quoting,
            export_file_name = %config.export_file_name,
            "Loaded gradebook config"
        );
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use crate::domain::gradebook::{BlankLinePolicy, ExportQuoting};
    use std::fs;

    #[test]
    fn test_defaults_without_sources() {
        let config = ConfigService::new()
            .with_env_prefix("GRADEBOOK_TEST_DEFAULTS_")
            .load()
            .unwrap();
        assert_eq!(config, GradebookConfig::default());
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("gradebook.toml");
        fs::write(
            &path,
            "blank_lines = \"skip\"\nexport_quoting = \"never\"\nidentifier_name = \"Student\"\n",
        )
        .unwrap();

        let config = ConfigService::new()
            .with_file(&path)
            .with_env_prefix("GRADEBOOK_TEST_TOML_")
            .load()
            .unwrap();

        assert_eq!(config.blank_lines, BlankLinePolicy::Skip);
        assert_eq!(config.export_quoting, ExportQuoting::Never);
        assert_eq!(config.identifier_name, "Student");
        assert_eq!(config.export_file_name, "grade_results.csv");
    }

    #[test]
    fn test_env_overrides_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("gradebook.toml");
        fs::write(&path, "export_file_name = \"from_file.csv\"\n").unwrap();
        std::env::set_var("GRADEBOOK_TEST_ENV_EXPORT_FILE_NAME", "from_env.csv");

        let config = ConfigService::new()
            .with_file(&path)
            .with_env_prefix("GRADEBOOK_TEST_ENV_")
            .load()
            .unwrap();

        assert_eq!(config.export_file_name, "from_env.csv");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        std::env::set_var("GRADEBOOK_TEST_BAD_EXPORT_FILE_NAME", "../escape.csv");
        let err = ConfigService::new()
            .with_env_prefix("GRADEBOOK_TEST_BAD_")
            .load()
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_unknown_policy_is_config_error() {
        std::env::set_var("GRADEBOOK_TEST_POLICY_BLANK_LINES", "sometimes");
        let err = ConfigService::new()
            .with_env_prefix("GRADEBOOK_TEST_POLICY_")
            .load()
            .unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
