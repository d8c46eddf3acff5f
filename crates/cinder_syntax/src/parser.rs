//! Token cursor and match primitives for Cinder's recursive-descent grammar.
//!
//! [`ParserCtx`] is the live state of one parse: the lexer position, the symbol scope in effect and the error
//! counter. Grammar rules drive it through predicates (`is_*`), match primitives (`match_*` / `try_match_*`) and the
//! diagnostic engine (`expected`, `redeclared`, ...).
//!
//! ## Examples
//!
//! ```rust
//! use cinder_syntax::lexer::TokenReplay;
//! use cinder_syntax::parser::ParserCtx;
//! use cinder_syntax::symbols::SymbolTable;
//! use cinder_core::lang::keywords::KeywordId;
//!
//! let mut symbols = SymbolTable::new();
//! let mut ctx = ParserCtx::new(TokenReplay::from_words(&["foo", "(", ")"]), &mut symbols);
//!
//! ctx.match_keyword(KeywordId::Int);
//! assert_eq!(ctx.error_count(), 1);
//! assert_eq!(ctx.current().text, "(");
//! assert_eq!(ctx.sink()[0].to_string(), "error(1:1): expected 'int', found 'foo'.");
//! ```

use std::ops::{Deref, DerefMut};

use crate::config::ParserConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink, ReportError, SyntaxError};
use crate::lexer::TokenSource;
use crate::symbols::{ScopeId, SymbolId, SymbolTable};
use crate::token::{Location, Token, TokenKind};
use cinder_core::lang::keywords::{self, KeywordId};
use cinder_core::lang::symbols::SymbolKind;
use cinder_core::lang::tokens::TokenClass;

// NOTE: This module is split across multiple files using `include!` to keep all cursor
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/report.rs");
include!("parser/predicates.rs");
include!("parser/classify.rs");
include!("parser/matching.rs");
include!("parser/tests.rs");
