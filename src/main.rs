use accessory_catalog::core::engine::ReportStatus;
use accessory_catalog::utils::error::{CatalogError, ErrorSeverity};
use accessory_catalog::utils::{logger, validation::Validate};
use accessory_catalog::{CatalogEngine, CliConfig, LocalStorage, Settings};
use anyhow::Context;
use clap::Parser;
use std::io::Write;

fn exit_code(e: &CatalogError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: CatalogError) -> ! {
    tracing::error!(
        "❌ {} (Severity: {:?}). Suggestion: {}",
        e,
        e.severity(),
        e.recovery_suggestion()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

fn main() -> anyhow::Result<()> {
    // Parse command line flags
    let cli = CliConfig::parse();

    // The log level may come from the config file, so settings load first.
    let settings = match Settings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            fail(e);
        }
    };

    // Initialise logging
    logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());
    tracing::info!("Starting accessory-catalog");
    tracing::debug!("Settings: {:?}", settings);

    // Validate resolved settings
    if let Err(e) = settings.validate() {
        fail(e);
    }

    // Create storage and engine
    let storage = LocalStorage::new(&settings.output_path);
    let engine = CatalogEngine::new(storage, settings);

    // Run the session on the console; write failures are reported on stderr
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    match engine.run(stdin.lock(), stdout.lock(), stderr.lock()) {
        Ok(summary) => {
            tracing::info!("✅ Session finished with {} devices", summary.catalog.len());
            if let ReportStatus::Failed(reason) = &summary.report {
                tracing::warn!("Report was not written: {}", reason);
            }
        }
        Err(e) => fail(e),
    }

    std::io::stdout().flush().context("flushing stdout")?;
    Ok(())
}
