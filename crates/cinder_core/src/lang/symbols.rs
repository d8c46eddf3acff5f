//! Kinds of entity a symbol can be declared as.
//!
//! The symbol table stores one [`SymbolKind`] per symbol; the parser uses it to decide whether an identifier can
//! prefix a declaration and diagnostics spell it out (“'x' redeclared as typedef”).
//!
//! ## Examples
//! ```rust
//! use cinder_core::lang::symbols::{self, SymbolKind};
//!
//! assert_eq!(symbols::as_str(SymbolKind::Value), "variable");
//! assert!(SymbolKind::Param.is_value_like());
//! assert!(!SymbolKind::Typedef.is_value_like());
//! ```

use std::fmt;

/// Declaration kind of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Undefined,
    /// A named or anonymous lexical scope.
    Scope,
    /// A builtin type such as `int`.
    Type,
    Typedef,
    Struct,
    Union,
    Enum,
    EnumConstant,
    /// An ordinary value: variable or function.
    Value,
    Param,
}

/// Every symbol kind, in declaration order.
pub const SYMBOL_KINDS: &[SymbolKind] = &[
    SymbolKind::Undefined,
    SymbolKind::Scope,
    SymbolKind::Type,
    SymbolKind::Typedef,
    SymbolKind::Struct,
    SymbolKind::Union,
    SymbolKind::Enum,
    SymbolKind::EnumConstant,
    SymbolKind::Value,
    SymbolKind::Param,
];

/// Display name used in diagnostics.
pub fn as_str(kind: SymbolKind) -> &'static str {
    match kind {
        SymbolKind::Undefined => "<undefined>",
        SymbolKind::Scope => "scope",
        SymbolKind::Type => "type",
        SymbolKind::Typedef => "typedef",
        SymbolKind::Struct => "struct",
        SymbolKind::Union => "union",
        SymbolKind::Enum => "enum",
        SymbolKind::EnumConstant => "enum constant",
        SymbolKind::Value => "variable",
        SymbolKind::Param => "parameter",
    }
}

impl SymbolKind {
    /// Return `true` for ordinary values and parameters.
    ///
    /// Everything else (types, typedefs, tags, ...) may prefix a declaration.
    pub fn is_value_like(self) -> bool {
        matches!(self, SymbolKind::Value | SymbolKind::Param)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}
