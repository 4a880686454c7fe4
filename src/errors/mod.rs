//! Error types for consumers of the token stream.
//!
//! Tokenizing never fails: unrecognised characters are skipped. The errors
//! here come from the layers around the scanner:
//!
//! - Token expectations that fail while reading a `TokenStream`
//! - Scripts the driver cannot load
//!
//! Each error carries a source position for caret diagnostics.

pub mod errors;

#[cfg(test)]
mod tests;
