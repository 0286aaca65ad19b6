use thiserror::Error;

/// Errors emitted while parsing a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The color body (without `#`) was not exactly six characters long.
    #[error("expected 6 hex digits, got {len} characters")]
    Length { len: usize },
    /// The color body contained a character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit {ch:?}")]
    Digit { ch: char },
}
