//! Symbol table and scope chain consumed by the parser.
//!
//! The parser never decides insertion policy; declaration handling in the grammar does. This table only stores what
//! the cursor and diagnostics need to read: a symbol's identifier, declaration kind, declaration history and
//! implementation site, plus enclosing-scope chaining for lookup.

use std::collections::HashMap;

use cinder_core::lang::symbols::SymbolKind;

use crate::token::Location;

/// Unique identifier for symbols
pub type SymbolId = usize;

/// Unique identifier for scopes
pub type ScopeId = usize;

/// Symbol table managing all named entities
#[derive(Debug)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    scopes: Vec<Scope>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Create a table holding only the (empty) global scope.
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
            scopes: vec![Scope::new(None)],
        }
    }

    /// The outermost scope.
    pub fn global(&self) -> ScopeId {
        0
    }

    /// Open a new scope nested in `parent`.
    pub fn push_scope(&mut self, parent: ScopeId) -> ScopeId {
        self.scopes.push(Scope::new(Some(parent)));
        self.scopes.len() - 1
    }

    /// Enclosing scope of `scope`, if any.
    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes.get(scope).and_then(|s| s.parent)
    }

    /// Bind `ident` in `scope` to a fresh symbol of `kind` with an empty declaration history.
    ///
    /// A later definition of the same name in the same scope replaces the binding. Returns `None`, and leaves the
    /// table untouched, if `scope` does not exist.
    pub fn define(&mut self, scope: ScopeId, ident: impl Into<String>, kind: SymbolKind) -> Option<SymbolId> {
        let id = self.symbols.len();
        let ident = ident.into();
        self.scopes.get_mut(scope)?.symbols.insert(ident.clone(), id);
        self.symbols.push(Symbol {
            ident,
            kind,
            declarations: Vec::new(),
            implementation: None,
        });
        Some(id)
    }

    /// Look up `name` starting at `scope` and walking outwards.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<SymbolId> {
        let mut scope_idx = Some(scope);
        while let Some(idx) = scope_idx {
            let scope = self.scopes.get(idx)?;
            if let Some(&id) = scope.symbols.get(name) {
                return Some(id);
            }
            scope_idx = scope.parent;
        }
        None
    }

    /// Look up a symbol only in `scope` (no parent lookup)
    pub fn lookup_local(&self, scope: ScopeId, name: &str) -> Option<SymbolId> {
        self.scopes.get(scope)?.symbols.get(name).copied()
    }

    /// Get a symbol by ID
    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id)
    }

    /// Get a mutable symbol by ID
    pub fn get_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        self.symbols.get_mut(id)
    }

    /// Append a declaration site to the symbol's history.
    pub fn record_declaration(&mut self, id: SymbolId, at: Location) {
        if let Some(sym) = self.symbols.get_mut(id) {
            sym.declarations.push(at);
        }
    }

    /// Record where the symbol's body (function or type definition) was given.
    pub fn set_implementation(&mut self, id: SymbolId, at: Location) {
        if let Some(sym) = self.symbols.get_mut(id) {
            sym.implementation = Some(at);
        }
    }
}

/// A lexical scope: its bindings and the scope that encloses it.
#[derive(Debug)]
pub struct Scope {
    pub parent: Option<ScopeId>,
    pub symbols: HashMap<String, SymbolId>,
}

impl Scope {
    pub fn new(parent: Option<ScopeId>) -> Self {
        Self {
            parent,
            symbols: HashMap::new(),
        }
    }
}

/// A named entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub ident: String,
    pub kind: SymbolKind,
    /// Declaration sites in source order; the first is the one cited by redeclaration errors.
    pub declarations: Vec<Location>,
    /// Where the body was given, for functions and complete types.
    pub implementation: Option<Location>,
}

impl Symbol {
    /// First recorded declaration site.
    pub fn first_declaration(&self) -> Option<Location> {
        self.declarations.first().copied()
    }
}
