use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("source spreadsheet not found: {path}")]
    SourceNotFound { path: String },

    #[error("source spreadsheet {path} is not readable: {reason}")]
    SourceUnreadable { path: String, reason: String },

    #[error("required column '{column}' not present in table")]
    ColumnNotFound { column: String },

    #[error("cannot convert value '{value}' in column '{column}' (row {row}) to an integer")]
    TypeConversion {
        column: String,
        row: usize,
        value: String,
    },

    #[error("cannot write output file {path}: {reason}")]
    DestinationUnwritable { path: String, reason: String },
}
