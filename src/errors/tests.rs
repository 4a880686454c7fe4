//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenType;
use crate::Position;

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "age".to_string(),
            expected: TokenType::Int,
        },
        Position(42),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "age".to_string(),
            expected: TokenType::Int,
        },
        Position(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.to_string(), "unexpected token \"age\": expected Int");
}

#[test]
fn test_unexpected_end_of_stream_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedEndOfStream {
            expected: TokenType::SemiColon,
        },
        Position(12),
    );

    assert_eq!(error.get_error_name(), "UnexpectedEndOfStream");
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedEndOfStream {
            expected: TokenType::SemiColon
        }
    );
}

#[test]
fn test_source_unreadable_error() {
    let error = Error::new(
        ErrorImpl::SourceUnreadable {
            path: "missing.lex".to_string(),
            message: "No such file or directory".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "SourceUnreadable");
    assert_eq!(
        error.get_tip().to_string(),
        "Could not read `missing.lex`: No such file or directory"
    );
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ">".to_string(),
            expected: TokenType::GE,
        },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Unexpected token: `>`, expected GE"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
