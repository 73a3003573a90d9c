use crate::{domain::models::table::Table, error::EtlError, outbound::file::Writer};
use csv::WriterBuilder;
use std::path::Path;
use tracing::info;

pub trait Csv {
    fn try_table_to_csv(table: &Table, path: &Path) -> Result<(), EtlError>;
}

fn unwritable(path: &Path, reason: impl Into<String>) -> EtlError {
    EtlError::DestinationUnwritable {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

impl Csv for Writer {
    /// Writes the table as a comma-delimited file at `path`, creating any
    /// missing parent directories first. Overwrites an existing file.
    fn try_table_to_csv(table: &Table, path: &Path) -> Result<(), EtlError> {
        info!("Loading cleaned data to CSV...");
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| unwritable(path, e.to_string()))?;
            }
        }
        let mut wtr = WriterBuilder::new()
            .from_path(path)
            .map_err(|e| unwritable(path, e.to_string()))?;
        wtr.write_record(table.headers.iter())
            .map_err(|e| unwritable(path, e.to_string()))?;
        for row in &table.rows {
            wtr.write_record(row.iter().map(|cell| cell.to_string()))
                .map_err(|e| unwritable(path, e.to_string()))?;
        }
        wtr.flush().map_err(|e| unwritable(path, e.to_string()))?;
        info!("Cleaned data written to {}", path.display());
        Ok(())
    }
}
