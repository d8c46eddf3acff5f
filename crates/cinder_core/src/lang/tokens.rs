//! Token classes and their display names.
//!
//! A [`TokenClass`] is the semantic tag of a token independent of any payload: the lexer decides it, the parser's
//! match primitives compare against it, and diagnostics name it (“expected identifier, found ...”).
//!
//! ## Notes
//! - The mapping in [`as_str`] is closed and exhaustively matched: adding a class without a display name is a
//!   compile error rather than a runtime fallback.
//!
//! ## Examples
//! ```rust
//! use cinder_core::lang::tokens::{self, TokenClass};
//!
//! assert_eq!(tokens::as_str(TokenClass::Eof), "end of file");
//! assert_eq!(TokenClass::Ident.to_string(), "identifier");
//! ```

use std::fmt;

/// Semantic class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// No token has been loaded yet.
    Undefined,
    /// Punctuation and operators.
    Other,
    Eof,
    Keyword,
    Ident,
    Int,
    Str,
    Char,
}

/// Every token class, in declaration order.
pub const TOKEN_CLASSES: &[TokenClass] = &[
    TokenClass::Undefined,
    TokenClass::Other,
    TokenClass::Eof,
    TokenClass::Keyword,
    TokenClass::Ident,
    TokenClass::Int,
    TokenClass::Str,
    TokenClass::Char,
];

/// Display name used in diagnostics.
pub fn as_str(class: TokenClass) -> &'static str {
    match class {
        TokenClass::Undefined => "<undefined>",
        TokenClass::Other => "other",
        TokenClass::Eof => "end of file",
        TokenClass::Keyword => "keyword",
        TokenClass::Ident => "identifier",
        TokenClass::Int => "integer",
        TokenClass::Str => "string",
        TokenClass::Char => "character",
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}
