use crate::core::report::{render_summary, write_failed_message, write_report, written_message};
use crate::core::session::Session;
use crate::core::{ConfigProvider, DeviceCatalog, Storage};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportStatus {
    Written(String),
    Skipped,
    Failed(String),
}

#[derive(Debug)]
pub struct RunSummary {
    pub catalog: DeviceCatalog,
    pub report: ReportStatus,
}

/// Collect, summarize, write: the whole console run.
pub struct CatalogEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CatalogEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Prompts and the summary go to `output`; a failed report write is described on `errors`.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &self,
        input: R,
        output: W,
        mut errors: E,
    ) -> Result<RunSummary> {
        tracing::info!(
            "Starting catalog session (capacity {})",
            self.config.max_devices()
        );

        // Collect
        let mut catalog = DeviceCatalog::new(self.config.max_devices());
        let mut session = Session::new(input, output);
        let added = session.collect(&mut catalog)?;
        tracing::info!("Collected {} devices", added);

        // Summarize
        let mut output = session.into_output();
        write!(output, "{}", render_summary(&catalog))?;
        writeln!(output)?;

        // Write
        let report = if self.config.write_file_enabled() {
            self.publish(&catalog, &mut output, &mut errors)?
        } else {
            tracing::info!("Report file disabled, skipping");
            ReportStatus::Skipped
        };
        output.flush()?;
        errors.flush()?;

        Ok(RunSummary { catalog, report })
    }

    /// A failed write is reported, not propagated.
    fn publish<W: Write, E: Write>(
        &self,
        catalog: &DeviceCatalog,
        output: &mut W,
        errors: &mut E,
    ) -> Result<ReportStatus> {
        let file_name = self.config.output_file();
        match write_report(&self.storage, file_name, catalog) {
            Ok(()) => {
                tracing::info!("📁 Report saved to {}/{}", self.config.output_path(), file_name);
                writeln!(output, "{}", written_message(file_name))?;
                Ok(ReportStatus::Written(file_name.to_string()))
            }
            Err(e) => {
                tracing::error!("❌ Report write failed: {}", e);
                let reason = e.reason();
                writeln!(errors, "{}", write_failed_message(&reason))?;
                Ok(ReportStatus::Failed(reason))
            }
        }
    }
}
