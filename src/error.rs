// src/error.rs

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors raised while loading, binning or rendering measurements.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("input has no header row")]
    EmptyInput,

    #[error(
        "missing required column(s): {} (found: {})",
        .missing.join(", "),
        .found.join(", ")
    )]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("experimental trace needs time and voltage columns, found {0} column(s)")]
    TooFewTraceColumns(usize),

    #[error("non-numeric value '{value}' in column '{column}' at data row {row}")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },

    #[error("bin size must be at least 1, got {0}")]
    InvalidBinSize(usize),

    #[error("failed to reshape series into bins: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("plotting failed: {0}")]
    Plot(String),

    #[error("viewer failed: {0}")]
    Viewer(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for RenderError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Plot(err.to_string())
    }
}
