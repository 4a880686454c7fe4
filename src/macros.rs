//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance from a kind, its text and the
//!   byte offset the lexeme starts at

/// Creates a Token instance.
///
/// The span is derived from the start offset and the byte length of the text.
///
/// # Arguments
///
/// * `$kind` - The TokenType
/// * `$text` - The matched text (a `String`)
/// * `$start` - Byte offset of the first character of the lexeme
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenType::IntLiteral, "42".to_string(), 8);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $start:expr) => {{
        let text: String = $text;
        let start: usize = $start;
        Token {
            kind: $kind,
            span: Span {
                start: Position(start as u32),
                end: Position((start + text.len()) as u32),
            },
            text,
        }
    }};
}
