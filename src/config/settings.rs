use crate::config::toml_config::TomlConfig;
use crate::config::{DEFAULT_OUTPUT_FILE, DEFAULT_OUTPUT_PATH, MAX_DEVICES_LIMIT};
use crate::core::catalog::DEFAULT_CAPACITY;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

#[cfg(feature = "cli")]
use crate::config::CliConfig;

/// Effective configuration: command line over config file over defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub max_devices: usize,
    pub output_path: String,
    pub output_file: String,
    pub write_file: bool,
    pub verbose: bool,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_devices: DEFAULT_CAPACITY,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            write_file: true,
            verbose: false,
            log_level: None,
        }
    }
}

impl Settings {
    pub fn from_toml(file: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            max_devices: file.max_devices().unwrap_or(defaults.max_devices),
            output_path: file
                .output_path()
                .map(str::to_string)
                .unwrap_or(defaults.output_path),
            output_file: file
                .output_file()
                .map(str::to_string)
                .unwrap_or(defaults.output_file),
            write_file: file.output_enabled().unwrap_or(defaults.write_file),
            verbose: defaults.verbose,
            log_level: file.log_level().map(str::to_string),
        }
    }

    /// Loads the file named by `--config` (if any) and lays the flags over it.
    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::info!("Loading configuration from {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };
        Ok(Self::resolve(cli, &file))
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig, file: &TomlConfig) -> Self {
        let base = Self::from_toml(file);
        Self {
            max_devices: cli.max_devices.unwrap_or(base.max_devices),
            output_path: cli.output_path.clone().unwrap_or(base.output_path),
            output_file: cli.output_file.clone().unwrap_or(base.output_file),
            write_file: base.write_file && !cli.no_file,
            verbose: cli.verbose,
            log_level: base.log_level,
        }
    }
}

impl ConfigProvider for Settings {
    fn max_devices(&self) -> usize {
        self.max_devices
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn write_file_enabled(&self) -> bool {
        self.write_file
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_range("max_devices", self.max_devices, 1, MAX_DEVICES_LIMIT)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_file_name("output_file", &self.output_file)?;
        if let Some(level) = &self.log_level {
            validation::validate_log_level("log_level", level)?;
        }
        Ok(())
    }
}
