use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShadesError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Unknown color name: {0}")]
    UnknownColorName(String),

    #[error("Invalid cell count: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Position ({row}, {column}) is outside a {width}x{height} bitmap")]
    OutOfBounds {
        row: usize,
        column: usize,
        width: usize,
        height: usize,
    },
}

pub type Result<T> = std::result::Result<T, ShadesError>;
