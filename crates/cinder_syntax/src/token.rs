//! Token types shared by the lexer contract and the parser.
//!
//! Keyword tokens carry a stable [`KeywordId`] from `cinder_core::lang`, so a token's class and its keyword identity
//! can never disagree: only `TokenKind::Keyword` has one.
//!
//! ## Examples
//! ```rust
//! use cinder_syntax::token::{Location, Token, TokenKind};
//! use cinder_core::lang::keywords::KeywordId;
//!
//! let tok = Token::from_spelling("struct", Location::new(1, 1));
//! assert_eq!(tok.kind, TokenKind::Keyword(KeywordId::Struct));
//! assert_eq!(tok.keyword_id(), Some(KeywordId::Struct));
//! ```

use std::fmt;

use cinder_core::lang::keywords::{self, KeywordId};
use cinder_core::lang::tokens::TokenClass;

/// Source position of a token (1-based line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Undefined,
    Other,
    Eof,
    Keyword(KeywordId),
    Ident,
    Int,
    Str,
    Char,
}

impl TokenKind {
    /// Payload-free class of this kind.
    pub fn class(self) -> TokenClass {
        match self {
            TokenKind::Undefined => TokenClass::Undefined,
            TokenKind::Other => TokenClass::Other,
            TokenKind::Eof => TokenClass::Eof,
            TokenKind::Keyword(_) => TokenClass::Keyword,
            TokenKind::Ident => TokenClass::Ident,
            TokenKind::Int => TokenClass::Int,
            TokenKind::Str => TokenClass::Str,
            TokenKind::Char => TokenClass::Char,
        }
    }

    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(id),
            _ => None,
        }
    }
}

/// A token with its kind, raw text and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw spelling exactly as it appeared in the source.
    pub text: String,
    pub location: Location,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    /// The terminal token. Its text is empty.
    pub fn eof(location: Location) -> Self {
        Self::new(TokenKind::Eof, "", location)
    }

    /// Classify an already-split word by its spelling.
    ///
    /// ## Notes
    /// - Reserved spellings become keywords; a leading digit means integer, a leading `"` string, a leading `'`
    ///   character; identifier-shaped words are identifiers and everything else is `Other`.
    /// - No scanning happens here: escapes and suffixes are the lexer's business.
    pub fn from_spelling(text: &str, location: Location) -> Self {
        let kind = if let Some(id) = keywords::from_str(text) {
            TokenKind::Keyword(id)
        } else {
            match text.chars().next() {
                Some(c) if c.is_ascii_digit() => TokenKind::Int,
                Some('"') => TokenKind::Str,
                Some('\'') => TokenKind::Char,
                Some(c) if (c.is_ascii_alphabetic() || c == '_')
                    && text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') =>
                {
                    TokenKind::Ident
                }
                _ => TokenKind::Other,
            }
        };
        Self::new(kind, text, location)
    }

    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.class()`.
    pub fn class(&self) -> TokenClass {
        self.kind.class()
    }
}
