//! Syntax interface layer for the Cinder C frontend: token cursor, match primitives, positioned diagnostics.
//!
//! This crate sits between a character-level lexer and a recursive-descent grammar. It advances the token cursor,
//! classifies the current token (including the declaration-start heuristic that needs the symbol table) and
//! produces diagnostics that cross-reference earlier declarations.
//!
//! ## Notes
//! - This crate does not decide *what* to parse next; grammar rules do. It only answers “does the current token
//!   match?” and reports when it does not.
//! - Vocabulary identity (keywords, token classes, symbol kinds) comes from `cinder_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use cinder_syntax::lexer::TokenReplay;
//! use cinder_syntax::parser::ParserCtx;
//! use cinder_syntax::symbols::SymbolTable;
//! use cinder_core::lang::keywords::KeywordId;
//!
//! let mut symbols = SymbolTable::new();
//! let lexer = TokenReplay::from_words(&["int", "x", ";"]);
//! let mut ctx = ParserCtx::new(lexer, &mut symbols);
//!
//! assert!(ctx.is_declaration_start());
//! ctx.match_keyword(KeywordId::Int);
//! assert_eq!(ctx.match_identifier(), "x");
//! ctx.match_literal(";");
//! assert!(ctx.is_eof());
//! assert_eq!(ctx.error_count(), 0);
//! ```

pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod symbols;
pub mod token;
