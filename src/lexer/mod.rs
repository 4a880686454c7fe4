//! Lexical analysis for the mini-language.
//!
//! Converts source text into a `TokenStream`. It handles:
//!
//! - A hand-specified DFA over ASCII characters (`dfa`)
//! - Maximal munch along the `int` keyword chain and `>`/`>=` lookahead
//! - Byte spans on every token
//! - A cursor with peek, unread and absolute positioning for parsers

pub mod dfa;
pub mod lexer;
pub mod stream;
pub mod tokens;
