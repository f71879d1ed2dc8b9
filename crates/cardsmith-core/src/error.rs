//! Error types for Cardsmith

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for Cardsmith operations
#[derive(Error, Debug)]
pub enum CardError {
    /// An image file picked for a card slot could not be read
    #[error("Failed to read image {path:?}: {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A field name did not match any editable card field
    #[error("Unknown card field: {0}")]
    UnknownField(String),

    /// A side name other than front/back
    #[error("Unknown card side: {0}")]
    UnknownSide(String),

    /// The QR payload could not be encoded as a symbol
    #[error("QR encoding error: {0}")]
    Qr(#[from] qrcode::types::QrError),

    /// Error during payload serialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The rendered card markup could not be parsed for rasterization
    #[error("Card markup error: {0}")]
    Markup(#[from] resvg::usvg::Error),

    /// A pixel buffer of the requested size could not be allocated
    #[error("Cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding error: {0}")]
    Encode(String),

    /// An export was requested while another one is still running
    #[error("An export is already in progress")]
    ExportBusy,

    /// A background export task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::UnknownField("shoe_size".to_string());
        assert_eq!(format!("{}", err), "Unknown card field: shoe_size");

        let err = CardError::Canvas {
            width: 0,
            height: 10,
        };
        assert_eq!(err.to_string(), "Cannot allocate a 0x10 canvas");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let card_err: CardError = io_err.into();
        assert!(matches!(card_err, CardError::Io(_)));
    }
}
