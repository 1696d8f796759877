use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Scaler name that is neither `minmax` nor `normalized`
    #[error("Unsupported scaler '{0}'. Choose between 'minmax' or 'normalized'.")]
    UnsupportedScaler(String),

    #[error("Row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("Index has {found} labels, table has {expected} rows")]
    IndexLength { found: usize, expected: usize },

    #[error("'{value}' in row {row}, column '{column}' should be a valid float")]
    InvalidCell {
        row: usize,
        column: String,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors caused by how the renderer was configured rather than by the data.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::UnsupportedScaler(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
