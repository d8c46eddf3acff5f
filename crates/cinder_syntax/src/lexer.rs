//! The lexer contract consumed by the parser, plus a replaying implementation.
//!
//! The character-level lexer lives outside this crate. Whatever produces tokens only has to implement
//! [`TokenSource`]: expose the current token and step to the next one.
//!
//! ## Notes
//! - End of file is terminal and repeatable: once `current()` is `Eof`, every further `advance()` keeps returning
//!   the same token and location, so error recovery that keeps advancing can never read past the end.
//! - The current token is borrowed; it is only guaranteed to stay valid until the next `advance()`. Anything that
//!   must outlive that is copied by the caller.

use crate::token::{Location, Token, TokenKind};

/// A stream of tokens with a single current token.
pub trait TokenSource {
    /// The token the stream is positioned on.
    fn current(&self) -> &Token;

    /// Step to the next token and return its location.
    ///
    /// Idempotent at end of file.
    fn advance(&mut self) -> Location;
}

/// A [`TokenSource`] over tokens that were already produced, e.g. by a batch lexer.
///
/// ## Examples
/// ```rust
/// use cinder_syntax::lexer::{TokenReplay, TokenSource};
///
/// let mut replay = TokenReplay::split_whitespace("int x ;\nx = 1 ;");
/// assert_eq!(replay.current().text, "int");
/// replay.advance();
/// assert_eq!(replay.current().location.column, 5);
/// ```
#[derive(Debug, Clone)]
pub struct TokenReplay {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenReplay {
    /// Replay `tokens`, ending the stream at its first end-of-file token or appending one if there is none.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if let Some(i) = tokens.iter().position(|t| t.kind == TokenKind::Eof) {
            tokens.truncate(i + 1);
        } else {
            let end = tokens
                .last()
                .map(|t| Location::new(t.location.line, t.location.column.saturating_add(char_width(&t.text))))
                .unwrap_or_else(|| Location::new(1, 1));
            tokens.push(Token::eof(end));
        }
        Self { tokens, pos: 0 }
    }

    /// Replay single-line words, classified by spelling and separated by one space each.
    pub fn from_words(words: &[&str]) -> Self {
        let mut column = 1u32;
        let tokens = words
            .iter()
            .map(|word| {
                let tok = Token::from_spelling(word, Location::new(1, column));
                column = column.saturating_add(char_width(word)).saturating_add(1);
                tok
            })
            .collect();
        Self::new(tokens)
    }

    /// Replay whitespace-separated words of `source`, keeping their real line and column.
    pub fn split_whitespace(source: &str) -> Self {
        let mut tokens = Vec::new();
        for (line_idx, line) in source.lines().enumerate() {
            let mut start: Option<usize> = None;
            let mut column = 0u32;
            let mut start_column = 0u32;
            for (byte, c) in line.char_indices() {
                column = column.saturating_add(1);
                match (c.is_whitespace(), start) {
                    (false, None) => {
                        start = Some(byte);
                        start_column = column;
                    }
                    (true, Some(s)) => {
                        let loc = Location::new(line_number(line_idx), start_column);
                        tokens.push(Token::from_spelling(&line[s..byte], loc));
                        start = None;
                    }
                    _ => {}
                }
            }
            if let Some(s) = start {
                let loc = Location::new(line_number(line_idx), start_column);
                tokens.push(Token::from_spelling(&line[s..], loc));
            }
        }
        Self::new(tokens)
    }

    /// Number of tokens including the end-of-file token, so always at least 1.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

/// Width of `text` in columns, saturating on absurdly long words.
fn char_width(text: &str) -> u32 {
    u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
}

/// 1-based line number for a 0-based line index.
fn line_number(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |n| n.saturating_add(1))
}

impl TokenSource for TokenReplay {
    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Location {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        self.tokens[self.pos].location
    }
}
