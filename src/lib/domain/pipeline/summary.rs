use tracing::info;

#[derive(Debug)]
pub struct RunSummary {
    pub rows_extracted: usize,
    pub rows_written: usize,
    pub rows_discarded: usize,
    pub runtime_secs: f64,
}

pub fn log_summary(summary: RunSummary) {
    info!("=== Run Summary ===");
    info!("Rows extracted from source: {}", summary.rows_extracted);
    info!(
        "Rows discarded by filtering and cleaning: {}",
        summary.rows_discarded
    );
    info!("Rows written to output: {}", summary.rows_written);
    info!("Total runtime: {:.1}s", summary.runtime_secs);
}
