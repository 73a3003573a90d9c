pub mod setup;
pub mod summary;
pub mod transform;

pub use summary::{RunSummary, log_summary};
pub use transform::transform;

use crate::config::Config;
use crate::error::EtlError;
use crate::inbound::file::{Excel, Reader};
use crate::outbound::file::{Csv, Writer};
use std::time::Instant;
use tracing::info;

/// Runs the pipeline end to end: extract, transform, load. The first stage
/// failure aborts the run and no output file is produced.
pub fn run(config: &Config) -> Result<RunSummary, EtlError> {
    let start = Instant::now();
    let raw = <Reader as Excel>::try_excel_to_table(&config.source_path)?;
    let rows_extracted = raw.row_count();
    let cleaned = transform(raw, &config.state_filter)?;
    let rows_written = cleaned.row_count();
    <Writer as Csv>::try_table_to_csv(&cleaned, &config.output_path)?;
    info!("ETL pipeline completed successfully.");
    Ok(RunSummary {
        rows_extracted,
        rows_written,
        rows_discarded: rows_extracted - rows_written,
        runtime_secs: start.elapsed().as_secs_f64(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_aborts_before_any_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(
            dir.path().join("missing.xlsx"),
            dir.path().join("out").join("cleaned.csv"),
            "New South Wales",
        );
        let err = run(&config).unwrap_err();
        assert!(matches!(err, EtlError::SourceNotFound { .. }));
        assert!(!config.output_path.exists());
        assert!(!config.output_path.parent().unwrap().exists());
    }
}
