/// Error types for loading the parcel catalog
use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A numeric column could not be parsed
    #[error("Invalid number in column {column}: {value:?}")]
    InvalidNumber { column: &'static str, value: String },

    /// A boolean column could not be parsed
    #[error("Invalid boolean in column {column}: {value:?}")]
    InvalidBool { column: &'static str, value: String },

    /// Date parsing failed
    #[error("Failed to parse date: {0}")]
    DateParse(String),

    /// A child row references a parcel row that does not exist
    #[error("{table} row references parcel {parcel}, but only {size} parcels exist")]
    ParcelOutOfRange {
        table: &'static str,
        parcel: usize,
        size: usize,
    },

    /// A boundary polygon has fewer than three vertices
    #[error("Boundary of parcel {parcel} has {points} points (at least 3 required)")]
    DegenerateBoundary { parcel: usize, points: usize },
}

/// Type alias for Results using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;
