//! Error types for the akta library.

use std::io;
use thiserror::Error;

/// Result type alias for akta operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during contract document generation.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading assets or writing output files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Contract data could not be deserialized.
    #[error("Invalid contract data: {0}")]
    ContractData(String),

    /// An image asset could not be decoded.
    #[error("Image decoding error: {0}")]
    ImageDecode(String),

    /// The configured policy requires a signature and none was usable.
    #[error("A signature is required before the contract can be generated")]
    SignatureRequired,

    /// Error assembling the PDF object structure.
    #[error("PDF write error: {0}")]
    PdfWrite(String),

    /// Error during layout or rendering.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Asset was not found in the store.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::PdfWrite(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ContractData(err.to_string())
    }
}
