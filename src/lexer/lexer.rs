use std::mem;

use tracing::{debug, trace};

use crate::{Position, Span, MK_TOKEN};

use super::{
    dfa::{self, Action, CharClass, ScanState, Transition},
    stream::TokenStream,
    tokens::{Token, TokenType},
};

/// Scanning state for a single `tokenize` call.
struct Scanner {
    state: ScanState,
    buffer: String,
    kind: Option<TokenType>,
    start: usize,
    tokens: Vec<Token>,
}

impl Scanner {
    fn new() -> Scanner {
        Scanner {
            state: ScanState::Initial,
            buffer: String::new(),
            kind: None,
            start: 0,
            tokens: vec![],
        }
    }

    fn step(&mut self, offset: usize, ch: char) {
        let mut state = self.state;

        loop {
            let Transition { next, action } = dfa::transition(state, ch);

            match action {
                Action::Close => self.close(None),
                Action::CloseAs(kind) => self.close(Some(kind)),
                Action::Start(kind) => {
                    self.kind = Some(kind);
                    self.start = offset;
                    self.buffer.push(ch);
                }
                Action::Extend => self.buffer.push(ch),
                Action::ExtendAs(kind) => {
                    self.kind = Some(kind);
                    self.buffer.push(ch);
                }
                Action::Skip => {
                    if dfa::classify(ch) != CharClass::Blank {
                        debug!(target: "simple_lexer::lexer", offset, ch = ?ch, "Skipped unrecognised character");
                    }
                }
            }

            // A closed lexeme hands the character back to Initial
            if matches!(action, Action::Close | Action::CloseAs(_)) {
                state = next;
                continue;
            }

            self.state = next;
            break;
        }
    }

    fn close(&mut self, reclassify: Option<TokenType>) {
        let kind = reclassify.or(self.kind.take());
        let text = mem::take(&mut self.buffer);

        if text.is_empty() {
            return;
        }

        if let Some(kind) = kind {
            let token = MK_TOKEN!(kind, text, self.start);
            debug!(target: "simple_lexer::lexer",
                kind = ?token.kind,
                text = ?token.text,
                start = token.span.start.0,
                "Produced token"
            );
            self.tokens.push(token);
        }
    }

    fn finish(mut self) -> TokenStream {
        match dfa::end_of_input(self.state) {
            Action::CloseAs(kind) => self.close(Some(kind)),
            Action::Skip => {}
            _ => self.close(None),
        }

        TokenStream::new(self.tokens)
    }
}

/// Splits `source` into tokens in a single left-to-right pass.
///
/// Blanks separate lexemes and are dropped, as is any character that cannot
/// start a lexeme. A lexeme still open at the end of the input is flushed.
pub fn tokenize(source: &str) -> TokenStream {
    let mut scanner = Scanner::new();

    for (offset, ch) in source.char_indices() {
        scanner.step(offset, ch);
    }

    let stream = scanner.finish();
    trace!(target: "simple_lexer::lexer", bytes = source.len(), tokens = stream.len(), "Tokenized source");
    stream
}
