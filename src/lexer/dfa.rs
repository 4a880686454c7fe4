//! Transition table of the scanning automaton.
//!
//! The automaton is hand-specified per token family. `transition` is a pure
//! function of the current state and one input character, so every edge can
//! be tested without running the scanner loop.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::tokens::TokenType;

lazy_static! {
    /// Characters that open an operator or delimiter lexeme from `Initial`.
    pub static ref OPERATOR_LOOKUP: HashMap<char, (ScanState, TokenType)> = {
        let mut map = HashMap::new();
        map.insert('+', (ScanState::Plus, TokenType::Plus));
        map.insert('-', (ScanState::Minus, TokenType::Minus));
        map.insert('*', (ScanState::Star, TokenType::Star));
        map.insert('/', (ScanState::Slash, TokenType::Slash));
        map.insert(';', (ScanState::SemiColon, TokenType::SemiColon));
        map.insert('(', (ScanState::LeftParen, TokenType::LeftParen));
        map.insert(')', (ScanState::RightParen, TokenType::RightParen));
        map.insert('=', (ScanState::Assignment, TokenType::Assignment));
        map.insert('>', (ScanState::GT, TokenType::GT));
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ScanState {
    Initial,

    // "int" prefix chain: after "i", "in", "int"
    IdInt1,
    IdInt2,
    IdInt3,
    Id,

    GT,
    GE,

    Assignment,
    Plus,
    Minus,
    Star,
    Slash,
    SemiColon,
    LeftParen,
    RightParen,

    IntLiteral,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CharClass {
    Alpha,
    Digit,
    Blank,
    Other,
}

/// What the scanner does with the character that caused a transition.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    /// Open a new lexeme of this kind with the character.
    Start(TokenType),
    /// Append the character to the open lexeme.
    Extend,
    /// Append the character and reclassify the open lexeme.
    ExtendAs(TokenType),
    /// Close the open lexeme, then dispatch the character again from `Initial`.
    Close,
    /// Like `Close`, reclassifying the lexeme first.
    CloseAs(TokenType),
    /// Drop the character.
    Skip,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Transition {
    pub next: ScanState,
    pub action: Action,
}

impl Transition {
    fn to(next: ScanState, action: Action) -> Self {
        Transition { next, action }
    }

    fn close() -> Self {
        Transition::to(ScanState::Initial, Action::Close)
    }
}

pub fn classify(ch: char) -> CharClass {
    if ch.is_ascii_alphabetic() {
        CharClass::Alpha
    } else if ch.is_ascii_digit() {
        CharClass::Digit
    } else if ch == ' ' || ch == '\t' || ch == '\n' {
        CharClass::Blank
    } else {
        CharClass::Other
    }
}

fn is_alphanumeric(ch: char) -> bool {
    matches!(classify(ch), CharClass::Alpha | CharClass::Digit)
}

/// Computes the edge taken from `state` on `ch`.
///
/// A `Close`/`CloseAs` edge always leads to `Initial`; the caller is expected
/// to feed the same character again from there. Edges out of `Initial` never
/// close.
pub fn transition(state: ScanState, ch: char) -> Transition {
    match state {
        ScanState::Initial => initial(ch),
        ScanState::Id => {
            if is_alphanumeric(ch) {
                Transition::to(ScanState::Id, Action::Extend)
            } else {
                Transition::close()
            }
        }
        ScanState::IdInt1 => keyword_prefix(ch, 'n', ScanState::IdInt2),
        ScanState::IdInt2 => keyword_prefix(ch, 't', ScanState::IdInt3),
        ScanState::IdInt3 => {
            if is_alphanumeric(ch) {
                Transition::to(ScanState::Id, Action::Extend)
            } else {
                Transition::to(ScanState::Initial, Action::CloseAs(TokenType::Int))
            }
        }
        ScanState::GT => {
            if ch == '=' {
                Transition::to(ScanState::GE, Action::ExtendAs(TokenType::GE))
            } else {
                Transition::close()
            }
        }
        ScanState::IntLiteral => {
            if classify(ch) == CharClass::Digit {
                Transition::to(ScanState::IntLiteral, Action::Extend)
            } else {
                Transition::close()
            }
        }
        // Always exactly one (or, for GE, two) characters wide
        ScanState::GE
        | ScanState::Assignment
        | ScanState::Plus
        | ScanState::Minus
        | ScanState::Star
        | ScanState::Slash
        | ScanState::SemiColon
        | ScanState::LeftParen
        | ScanState::RightParen => Transition::close(),
    }
}

/// The action that flushes whatever lexeme is still open once input runs out.
pub fn end_of_input(state: ScanState) -> Action {
    match state {
        ScanState::Initial => Action::Skip,
        ScanState::IdInt3 => Action::CloseAs(TokenType::Int),
        _ => Action::Close,
    }
}

fn initial(ch: char) -> Transition {
    match classify(ch) {
        CharClass::Alpha if ch == 'i' => {
            Transition::to(ScanState::IdInt1, Action::Start(TokenType::Identifier))
        }
        CharClass::Alpha => Transition::to(ScanState::Id, Action::Start(TokenType::Identifier)),
        CharClass::Digit => {
            Transition::to(ScanState::IntLiteral, Action::Start(TokenType::IntLiteral))
        }
        CharClass::Blank => Transition::to(ScanState::Initial, Action::Skip),
        CharClass::Other => match OPERATOR_LOOKUP.get(&ch) {
            Some((next, kind)) => Transition::to(*next, Action::Start(*kind)),
            None => Transition::to(ScanState::Initial, Action::Skip),
        },
    }
}

fn keyword_prefix(ch: char, expected: char, next: ScanState) -> Transition {
    if ch == expected {
        Transition::to(next, Action::Extend)
    } else if is_alphanumeric(ch) {
        Transition::to(ScanState::Id, Action::Extend)
    } else {
        Transition::close()
    }
}
