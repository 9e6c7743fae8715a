use thiserror::Error;

pub type Result<T> = std::result::Result<T, TdspError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TdspError {
    #[error("parse syntax error in {text:?}: {reason}")]
    ParseSyntax { text: String, reason: String },

    #[error("unknown color name: {text:?}")]
    UnknownName { text: String },

    #[error("bad sign suffix in {text:?}: need exactly 3 of +/- after a color")]
    BadSignSuffix { text: String },

    #[error("sample construction needs {expected} values, got {actual}")]
    ConstructionLengthMismatch { expected: usize, actual: usize },

    #[error("validation error: {0}")]
    Validation(String),
}

impl TdspError {
    /// The input text a parse error refers to, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            TdspError::ParseSyntax { text, .. }
            | TdspError::UnknownName { text }
            | TdspError::BadSignSuffix { text } => Some(text),
            _ => None,
        }
    }
}
