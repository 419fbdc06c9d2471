pub mod cli;
pub mod settings;
pub mod toml_config;

pub use settings::Settings;

pub const DEFAULT_OUTPUT_PATH: &str = ".";
pub const DEFAULT_OUTPUT_FILE: &str = "device_info.txt";
pub const MAX_DEVICES_LIMIT: usize = 1000;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "accessory-catalog")]
#[command(about = "Collect electronic accessories from the console and write a summary")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory the report file is written to
    #[arg(long)]
    pub output_path: Option<String>,

    /// Report file name
    #[arg(long)]
    pub output_file: Option<String>,

    /// Maximum number of devices to collect
    #[arg(long)]
    pub max_devices: Option<usize>,

    /// Print the summary only, do not write the report file
    #[arg(long)]
    pub no_file: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
