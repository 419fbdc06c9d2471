use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Builds the filter used by the CLI. `RUST_LOG` always wins.
pub fn cli_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("accessory_catalog=debug,info")
        } else {
            let level = level.unwrap_or(DEFAULT_LOG_LEVEL);
            EnvFilter::new(format!("accessory_catalog={}", level))
        }
    })
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(cli_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                // stdout belongs to the prompts
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
