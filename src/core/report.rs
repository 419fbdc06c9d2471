use crate::core::{DeviceCatalog, Storage};
use crate::utils::error::Result;

pub const SUMMARY_HEADER: &str = "Информация об устройствах:";

/// Console summary: a blank line, the header, then one line per device.
pub fn render_summary(catalog: &DeviceCatalog) -> String {
    let mut summary = format!("\n{}\n", SUMMARY_HEADER);
    summary.push_str(&render_report(catalog));
    summary
}

/// File body: exactly the `info()` lines, newline-terminated.
pub fn render_report(catalog: &DeviceCatalog) -> String {
    catalog
        .iter()
        .map(|device| format!("{}\n", device.info()))
        .collect()
}

pub fn write_report<S: Storage>(storage: &S, file_name: &str, catalog: &DeviceCatalog) -> Result<()> {
    let body = render_report(catalog);
    tracing::debug!("Writing {} bytes to {}", body.len(), file_name);
    storage.write_file(file_name, body.as_bytes())
}

pub fn written_message(file_name: &str) -> String {
    format!("Информация об устройствах записана в файл '{}'.", file_name)
}

pub fn write_failed_message(reason: &str) -> String {
    format!("Ошибка при записи в файл: {}", reason)
}
