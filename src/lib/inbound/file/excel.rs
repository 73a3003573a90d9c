use crate::{domain::models::table::{Cell, Table}, error::EtlError, inbound::file::Reader};
use calamine::{Reader as CalamineReader, open_workbook_auto};
use std::path::Path;
use tracing::info;

pub trait Excel {
    fn try_excel_to_table(path: &Path) -> Result<Table, EtlError>;
}

fn unreadable(path: &Path, reason: impl Into<String>) -> EtlError {
    EtlError::SourceUnreadable {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

impl Excel for Reader {
    /// Reads the first worksheet of the workbook at `path` into a [`Table`],
    /// treating the first row as the header.
    fn try_excel_to_table(path: &Path) -> Result<Table, EtlError> {
        info!("Extracting raw population data from {}", path.display());
        if !path.exists() {
            return Err(EtlError::SourceNotFound {
                path: path.display().to_string(),
            });
        }
        let mut workbook =
            open_workbook_auto(path).map_err(|e| unreadable(path, e.to_string()))?;
        let sheet_names = workbook.sheet_names().to_owned();
        let first_sheet_name = sheet_names
            .first()
            .ok_or_else(|| unreadable(path, "workbook has no worksheets"))?
            .clone();
        let range = workbook
            .worksheet_range(&first_sheet_name)
            .map_err(|e| {
                unreadable(
                    path,
                    format!("failed to read worksheet '{}': {}", first_sheet_name, e),
                )
            })?;
        let mut rows_iter = range.rows();
        let headers: Vec<String> = match rows_iter.next() {
            Some(header_row) => header_row.iter().map(|cell| cell.to_string()).collect(),
            None => {
                return Err(unreadable(
                    path,
                    format!("worksheet '{}' has no header row", first_sheet_name),
                ));
            }
        };
        let rows: Vec<Vec<Cell>> = rows_iter
            .map(|row| row.iter().map(Cell::from).collect())
            .collect();
        let table = Table::new(headers, rows);
        info!("Raw rows extracted: {}", table.row_count());
        Ok(table)
    }
}
