//! Positioned diagnostics produced while matching tokens.
//!
//! Every diagnostic is recoverable: it is rendered into a sink, bumps the parser's error count, and parsing goes on.
//! Whether to stop after too many errors is the driver's call.
//!
//! ## Notes
//! - Rendering is line oriented: `error(<line>:<col>): <message>.`, followed by an indented
//!   `(<line>:<col>): <note>.` continuation when the error cites an earlier declaration or implementation.
//! - [`SyntaxError`] owns all of its text; nothing in a diagnostic borrows from the token stream or the symbol
//!   table.

use std::fmt;

use cinder_core::lang::symbols::SymbolKind;
use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::symbols::SymbolId;
use crate::token::Location;

/// Broad category of a [`SyntaxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A wanted token, keyword or literal was not present.
    Expectation,
    /// An identifier is unknown, or known but not a type where one was required.
    UndefinedReference,
    /// A construct appeared outside the context it is allowed in.
    IllegalContext,
    Redeclaration,
    Reimplementation,
}

/// A single syntax-level error. The `Display` form is the first line of the rendered diagnostic, without the
/// trailing period.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum SyntaxError {
    #[error("expected {expected}, found '{found}'")]
    #[diagnostic(code(cinder::expected))]
    Expected { expected: String, found: String },

    #[error("undefined symbol '{name}'")]
    #[diagnostic(code(cinder::undefined_symbol))]
    UndefinedSymbol { name: String },

    #[error("undefined symbol '{name}', expected type")]
    #[diagnostic(code(cinder::undefined_type))]
    UndefinedType { name: String },

    #[error("illegal {what} outside of {place}")]
    #[diagnostic(code(cinder::illegal_outside))]
    IllegalOutside { what: String, place: String },

    #[error("'{ident}' redeclared as {attempted}")]
    #[diagnostic(code(cinder::redeclared))]
    Redeclared {
        ident: String,
        attempted: SymbolKind,
        first: Location,
        first_kind: SymbolKind,
    },

    #[error("{} '{ident}' reimplemented", implemented_noun(.kind))]
    #[diagnostic(code(cinder::reimplemented))]
    Reimplemented {
        ident: String,
        kind: SymbolKind,
        first: Location,
    },
}

/// Functions are plain values in the symbol table, so they are named explicitly.
fn implemented_noun(kind: &SymbolKind) -> &'static str {
    match kind {
        SymbolKind::Value => "function",
        other => cinder_core::lang::symbols::as_str(*other),
    }
}

impl SyntaxError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SyntaxError::Expected { .. } => ErrorCategory::Expectation,
            SyntaxError::UndefinedSymbol { .. } | SyntaxError::UndefinedType { .. } => {
                ErrorCategory::UndefinedReference
            }
            SyntaxError::IllegalOutside { .. } => ErrorCategory::IllegalContext,
            SyntaxError::Redeclared { .. } => ErrorCategory::Redeclaration,
            SyntaxError::Reimplemented { .. } => ErrorCategory::Reimplementation,
        }
    }

    /// The earlier location this error points back to, with the note to print there.
    pub fn cross_reference(&self) -> Option<(Location, String)> {
        match self {
            SyntaxError::Redeclared { first, first_kind, .. } => {
                Some((*first, format!("first declaration here as {first_kind}")))
            }
            SyntaxError::Reimplemented { first, .. } => Some((*first, "first implementation here".to_string())),
            _ => None,
        }
    }
}

/// A [`SyntaxError`] pinned to the location of the token that was current when it was reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub location: Location,
    pub error: SyntaxError,
    pub continuation_indent: usize,
}

impl Diagnostic {
    pub fn new(location: Location, error: SyntaxError) -> Self {
        Self {
            location,
            error,
            continuation_indent: 5,
        }
    }

    pub fn with_continuation_indent(mut self, width: usize) -> Self {
        self.continuation_indent = width;
        self
    }

    pub fn category(&self) -> ErrorCategory {
        self.error.category()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error({}): {}.", self.location, self.error)?;
        if let Some((at, note)) = self.error.cross_reference() {
            write!(f, "\n{:width$}({}): {}.", "", at, note, width = self.continuation_indent)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Where reported diagnostics go.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: &Diagnostic);
}

/// Collect diagnostics for later inspection.
impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.push(diagnostic.clone());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// Print each diagnostic to stderr as soon as it is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        eprintln!("{diagnostic}");
    }
}

/// A reporting call whose preconditions did not hold. Nothing was emitted and the error count is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("symbol #{0} is not in the symbol table")]
    UnknownSymbol(SymbolId),

    #[error("'{0}' has no recorded declaration to cite")]
    NoDeclaration(String),

    #[error("'{0}' has no implementation to cite")]
    NoImplementation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_renders_single_line() {
        let diag = Diagnostic::new(
            Location::new(2, 7),
            SyntaxError::Expected {
                expected: "';'".to_string(),
                found: "}".to_string(),
            },
        );
        insta::assert_snapshot!(diag.to_string(), @"error(2:7): expected ';', found '}'.");
        assert_eq!(diag.category(), ErrorCategory::Expectation);
    }

    #[test]
    fn test_redeclared_renders_cross_reference() {
        let diag = Diagnostic::new(
            Location::new(5, 9),
            SyntaxError::Redeclared {
                ident: "x".to_string(),
                attempted: SymbolKind::Typedef,
                first: Location::new(3, 5),
                first_kind: SymbolKind::Value,
            },
        );
        assert_eq!(
            diag.to_string(),
            "error(5:9): 'x' redeclared as typedef.\n     (3:5): first declaration here as variable."
        );
    }

    #[test]
    fn test_reimplemented_names_functions() {
        let err = SyntaxError::Reimplemented {
            ident: "main".to_string(),
            kind: SymbolKind::Value,
            first: Location::new(1, 1),
        };
        assert_eq!(err.to_string(), "function 'main' reimplemented");

        let err = SyntaxError::Reimplemented {
            ident: "node".to_string(),
            kind: SymbolKind::Struct,
            first: Location::new(1, 1),
        };
        assert_eq!(err.to_string(), "struct 'node' reimplemented");
    }

    #[test]
    fn test_continuation_indent_is_configurable() {
        let diag = Diagnostic::new(
            Location::new(4, 1),
            SyntaxError::Reimplemented {
                ident: "f".to_string(),
                kind: SymbolKind::Value,
                first: Location::new(2, 1),
            },
        )
        .with_continuation_indent(2);
        insta::assert_snapshot!(diag.to_string(), @r"
        error(4:1): function 'f' reimplemented.
          (2:1): first implementation here.
        ");
    }

    #[test]
    fn test_contextless_errors_have_no_cross_reference() {
        let err = SyntaxError::IllegalOutside {
            what: "break".to_string(),
            place: "loop".to_string(),
        };
        assert_eq!(err.to_string(), "illegal break outside of loop");
        assert_eq!(err.cross_reference(), None);
        assert_eq!(err.category(), ErrorCategory::IllegalContext);
    }

    #[test]
    fn test_diagnostic_codes() {
        use miette::Diagnostic as _;

        let err = SyntaxError::UndefinedType { name: "T".to_string() };
        assert_eq!(err.code().map(|c| c.to_string()), Some("cinder::undefined_type".to_string()));
    }

    #[test]
    fn test_vec_sink_collects() {
        fn emit_into<S: DiagnosticSink>(mut sink: S, diag: &Diagnostic) {
            sink.emit(diag);
        }

        let mut sink: Vec<Diagnostic> = Vec::new();
        let diag = Diagnostic::new(
            Location::new(1, 1),
            SyntaxError::UndefinedSymbol { name: "y".to_string() },
        );
        emit_into(&mut sink, &diag);
        sink.emit(&diag);
        assert_eq!(sink.len(), 2);
    }
}
