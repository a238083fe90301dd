use thiserror::Error;

/// Failures of the decoding layer. Translation itself never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("invalid URL escape {0:?}")]
    InvalidEscape(String),

    #[error("invalid semicolon separator in query")]
    InvalidSemicolon,

    #[error("invalid request URI: {0}")]
    InvalidUri(#[from] url::ParseError),
}
