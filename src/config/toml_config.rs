use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub catalog: Option<CatalogSection>,
    pub output: Option<OutputSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSection {
    pub max_devices: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSection {
    pub enabled: Option<bool>,
    pub path: Option<String>,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern compiles"))
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn max_devices(&self) -> Option<usize> {
        self.catalog.as_ref().and_then(|c| c.max_devices)
    }

    pub fn output_enabled(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.enabled)
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn output_file(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.filename.as_deref())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(max_devices) = self.max_devices() {
            validation::validate_range("catalog.max_devices", max_devices, 1, super::MAX_DEVICES_LIMIT)?;
        }
        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
        }
        if let Some(name) = self.output_file() {
            validation::validate_file_name("output.filename", name)?;
        }
        if let Some(level) = self.log_level() {
            validation::validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[catalog]
max_devices = 4

[output]
enabled = true
path = "./reports"
filename = "accessories.txt"

[logging]
level = "info"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.max_devices(), Some(4));
        assert_eq!(config.output_enabled(), Some(true));
        assert_eq!(config.output_path(), Some("./reports"));
        assert_eq!(config.output_file(), Some("accessories.txt"));
        assert_eq!(config.log_level(), Some("info"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.max_devices(), None);
        assert_eq!(config.output_file(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ACCESSORY_CATALOG_TEST_DIR", "/tmp/catalog");

        let toml_content = r#"
[output]
path = "${ACCESSORY_CATALOG_TEST_DIR}"
filename = "${ACCESSORY_CATALOG_UNSET_VAR}.txt"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), Some("/tmp/catalog"));
        assert_eq!(config.output_file(), Some("${ACCESSORY_CATALOG_UNSET_VAR}.txt"));

        std::env::remove_var("ACCESSORY_CATALOG_TEST_DIR");
    }

    #[test]
    fn test_config_validation() {
        let zero = TomlConfig::from_toml_str("[catalog]\nmax_devices = 0\n").unwrap();
        assert!(zero.validate().is_err());

        let blank_name = TomlConfig::from_toml_str("[output]\nfilename = \"  \"\n").unwrap();
        assert!(blank_name.validate().is_err());

        let bad_level = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[catalog\nmax_devices = 3").unwrap_err();
        assert!(matches!(err, CatalogError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nenabled = false\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_enabled(), Some(false));
    }
}
