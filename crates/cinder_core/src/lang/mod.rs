//! Cinder language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, token classes and the kinds of
//! entity a symbol can be declared as.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no token buffers, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings for shared use (diagnostics, tracing, tests).
//!
//! ## Examples
//! ```rust
//! use cinder_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("struct"), Some(KeywordId::Struct));
//! assert_eq!(keywords::as_str(KeywordId::Struct), "struct");
//! ```

pub mod keywords;
pub mod symbols;
pub mod tokens;
