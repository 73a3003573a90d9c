use crate::domain::models::table::{Cell, Table};
use crate::error::EtlError;
use tracing::info;

const STATE_COLUMN: &str = "State";
const SA2_COLUMN: &str = "SA2";
const POPULATION_COLUMN: &str = "Population";
const YEAR_COLUMN: &str = "Year";

fn column_not_found(column: &str) -> EtlError {
    EtlError::ColumnNotFound {
        column: column.to_string(),
    }
}

/// Cleans a raw table into its final form. The step order matters: the state
/// filter and completeness check match on the source's unnormalized headers,
/// and the year coercion and sort run against the normalized ones.
pub fn transform(mut table: Table, state_filter: &str) -> Result<Table, EtlError> {
    info!("Transforming data...");
    info!("Rows before state filter: {}", table.row_count());
    filter_state(&mut table, state_filter)?;
    info!("Rows after state filter: {}", table.row_count());
    drop_incomplete(&mut table)?;
    normalize_headers(&mut table);
    coerce_year(&mut table)?;
    sort_rows(&mut table)?;
    info!("Transformation complete.");
    Ok(table)
}

/// Keeps only rows whose `State` cell equals `state_filter` exactly.
pub fn filter_state(table: &mut Table, state_filter: &str) -> Result<(), EtlError> {
    let state = table
        .column_index(STATE_COLUMN)
        .ok_or_else(|| column_not_found(STATE_COLUMN))?;
    table
        .rows
        .retain(|row| matches!(&row[state], Cell::Text(s) if s == state_filter));
    Ok(())
}

/// Drops rows missing an `SA2` identifier or a `Population` value.
pub fn drop_incomplete(table: &mut Table) -> Result<(), EtlError> {
    let sa2 = table
        .column_index(SA2_COLUMN)
        .ok_or_else(|| column_not_found(SA2_COLUMN))?;
    let population = table
        .column_index(POPULATION_COLUMN)
        .ok_or_else(|| column_not_found(POPULATION_COLUMN))?;
    table
        .rows
        .retain(|row| !row[sa2].is_missing() && !row[population].is_missing());
    Ok(())
}

/// Canonical column name: trimmed, lowercased, spaces replaced with
/// underscores. Idempotent.
pub fn normalize_header(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

pub fn normalize_headers(table: &mut Table) {
    for header in &mut table.headers {
        *header = normalize_header(header);
    }
}

/// Converts every `year` cell to an integer. Runs after header
/// normalization, so the column is resolved by its normalized name.
pub fn coerce_year(table: &mut Table) -> Result<(), EtlError> {
    let year_column = normalize_header(YEAR_COLUMN);
    let year = table
        .column_index(&year_column)
        .ok_or_else(|| column_not_found(&year_column))?;
    for (row_num, row) in table.rows.iter_mut().enumerate() {
        let cell = &mut row[year];
        let coerced = match &*cell {
            Cell::Int(i) => Some(*i),
            Cell::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
            Cell::Text(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        match coerced {
            Some(value) => *cell = Cell::Int(value),
            None => {
                return Err(EtlError::TypeConversion {
                    column: year_column.clone(),
                    row: row_num + 1,
                    value: cell.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Stable sort by `sa2` ascending, then `year` ascending.
pub fn sort_rows(table: &mut Table) -> Result<(), EtlError> {
    let sa2_column = normalize_header(SA2_COLUMN);
    let year_column = normalize_header(YEAR_COLUMN);
    let sa2 = table
        .column_index(&sa2_column)
        .ok_or_else(|| column_not_found(&sa2_column))?;
    let year = table
        .column_index(&year_column)
        .ok_or_else(|| column_not_found(&year_column))?;
    table
        .rows
        .sort_by(|a, b| a[sa2].compare(&b[sa2]).then_with(|| a[year].compare(&b[year])));
    Ok(())
}
