//! Provide the canonical language vocabulary shared by the Cinder frontend and its tooling.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no parser-specific types.
//! - Callers work with stable IDs ([`lang::keywords::KeywordId`], [`lang::tokens::TokenClass`],
//!   [`lang::symbols::SymbolKind`]) and look up spellings via the registries.

pub mod lang;
