#![forbid(unsafe_code)]
//! Cinder: the interface layer between a C lexer and a recursive-descent grammar.
//!
//! This crate re-exports the workspace so drivers depend on one name:
//! - [`lang`]: language vocabulary from `cinder_core` (keywords, token classes, symbol kinds).
//! - [`syntax`]: the token cursor, predicates, match primitives and the diagnostic engine.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or`. Reporting preconditions that do not hold
//!   (e.g. citing an implementation that was never recorded) come back as `ReportError`, never as a panic.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: registry lookups that can only fail on a missing table row use `.expect(...)`.
//!
//! ## Examples
//! ```rust
//! use cinder::prelude::*;
//!
//! let mut symbols = SymbolTable::new();
//! let mut ctx = ParserCtx::new(TokenReplay::split_whitespace("int x ;"), &mut symbols);
//! ctx.match_keyword(KeywordId::Int);
//! let name = ctx.match_identifier();
//! ctx.match_literal(";");
//! assert_eq!(name, "x");
//! assert_eq!(ctx.error_count(), 0);
//! ```

pub use cinder_core::lang;
pub use cinder_syntax as syntax;

pub use cinder_syntax::config::ParserConfig;
pub use cinder_syntax::diagnostics;
pub use cinder_syntax::lexer;
pub use cinder_syntax::parser;
pub use cinder_syntax::symbols;

/// The names a grammar rule usually needs.
pub mod prelude {
    pub use cinder_core::lang::keywords::KeywordId;
    pub use cinder_core::lang::symbols::SymbolKind;
    pub use cinder_core::lang::tokens::TokenClass;
    pub use cinder_syntax::config::ParserConfig;
    pub use cinder_syntax::diagnostics::{Diagnostic, DiagnosticSink, ReportError, StderrSink, SyntaxError};
    pub use cinder_syntax::lexer::{TokenReplay, TokenSource};
    pub use cinder_syntax::parser::{ParserCtx, ScopeGuard};
    pub use cinder_syntax::symbols::{ScopeId, SymbolId, SymbolTable};
    pub use cinder_syntax::token::{Location, Token, TokenKind};
}
