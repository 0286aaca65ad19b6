use thiserror::Error;

/// Errors emitted while writing to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ClipboardError {
    #[error("clipboard write failed: {0}")]
    Write(String),
}
