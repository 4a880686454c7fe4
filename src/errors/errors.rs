use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenType, Position};

/// An error raised while consuming tokens or loading a script.
///
/// Scanning itself never fails; these come from the layers around it.
#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfStream { .. } => "UnexpectedEndOfStream",
            ErrorImpl::SourceUnreadable { .. } => "SourceUnreadable",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token, expected } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected {}",
                token, expected
            )),
            ErrorImpl::UnexpectedEndOfStream { expected } => {
                ErrorTip::Suggestion(format!("Input ended, expected {}", expected))
            }
            ErrorImpl::SourceUnreadable { path, message } => {
                ErrorTip::Suggestion(format!("Could not read `{}`: {}", path, message))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected token {token:?}: expected {expected}")]
    UnexpectedToken { token: String, expected: TokenType },
    #[error("unexpected end of stream: expected {expected}")]
    UnexpectedEndOfStream { expected: TokenType },
    #[error("cannot read {path:?}: {message}")]
    SourceUnreadable { path: String, message: String },
}
