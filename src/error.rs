//! Error taxonomy for both tools.
//!
//! [`ImportError`] covers user-correctable input failures in the Record
//! Formatter; [`RenderError`] covers encode/write failures in the Icon
//! Renderer. Every error is terminal: no retries, no partial-output cleanup.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::record::RecordKind;

/// Failures while converting a CSV file into declaration lines.
///
/// All variants abort the entire run. Declaration lines already written
/// before the failure are not rolled back.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The input file does not exist.
    #[error("file '{0}' not found")]
    FileNotFound(PathBuf),

    /// A required column is absent from the header, or a row is too short
    /// to provide it.
    #[error("missing required column '{column}'")]
    MissingColumn { column: String, kind: RecordKind },

    /// A numeric column holds a value that does not parse as a float.
    #[error("invalid numeric value '{value}' in column '{column}'")]
    InvalidNumber { column: String, value: String },

    /// The CSV reader itself failed (malformed quoting, I/O mid-read).
    #[error("failed to read CSV input: {0}")]
    Csv(#[from] csv::Error),

    /// Writing the declaration stream failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Failures while encoding or writing the rendered icon.
#[derive(Debug, Error)]
pub enum RenderError {
    /// PNG encoding or the final file write failed.
    #[error("failed to encode or write image: {0}")]
    Encode(#[from] image::ImageError),

    /// A filesystem operation around the output path failed.
    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
