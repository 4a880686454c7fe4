#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

/// Byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub u32);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

/// Half-open byte range `[start, end)` of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing byte `position`.
///
/// Returns the 1-based line number, the line text (with its newline) and the
/// offset of `position` within that line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        // The end of the last line is still a valid position
        if (start..end).contains(&pos) || (pos == end && end == source.len()) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // Empty source, or a position just past a trailing newline
    Some((line_number, String::new(), 0))
}

pub fn display_error(error: &Error, file: &str, source: &str) -> String {
    /*
        Error: message (tip)
        -> script.lex
           |
        20 | int age = ;
           | ----------^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();

    (String::from(&string[start..]), start)
}

/// Routes `tracing` output through the test harness.
#[cfg(test)]
pub fn init_test_logger() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use crate::{
        display_error,
        errors::errors::{Error, ErrorImpl},
        get_line_at_position,
        lexer::tokens::TokenType,
        Position,
    };

    const SOURCE: &str = "int age = 45;\n  age >= 45;\nint x";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = get_line_at_position(SOURCE, 4).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "int age = 45;\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = get_line_at_position(SOURCE, 20).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "  age >= 45;\n");
        assert_eq!(line_pos, 6);
    }

    #[test]
    fn test_get_line_at_end_of_source() {
        let (line_number, line, line_pos) = get_line_at_position(SOURCE, SOURCE.len() as u32).unwrap();
        assert_eq!(line_number, 3);
        assert_eq!(line, "int x");
        assert_eq!(line_pos, 5);
    }

    #[test]
    fn test_get_line_out_of_range() {
        assert!(get_line_at_position(SOURCE, 1000).is_none());
    }

    #[test]
    fn test_display_error_points_at_token() {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                token: String::from(">="),
                expected: TokenType::Assignment,
            },
            Position(20),
        );

        let rendered = display_error(&error, "test.lex", SOURCE);
        let lines = rendered.lines().collect::<Vec<&str>>();

        assert!(lines[0].starts_with("Error: UnexpectedToken ("));
        assert_eq!(lines[1], "-> test.lex");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | age >= 45;");
        assert_eq!(lines[4], "  | ----^");
    }
}
