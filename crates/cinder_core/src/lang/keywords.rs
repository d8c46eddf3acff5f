//! Define the reserved keyword vocabulary for the Cinder C frontend.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and byte-exact.
//! - A token that is not a keyword has no [`KeywordId`]; callers model that as `Option<KeywordId>::None`, which can
//!   never compare equal to a real keyword.
//!
//! ## Examples
//! ```rust
//! use cinder_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("typedef"), Some(KeywordId::Typedef));
//! assert_eq!(keywords::from_str("Typedef"), None);
//! assert!(keywords::starts_declaration(KeywordId::Const));
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Storage classes
    Auto,
    Static,
    Extern,
    Typedef,

    // Qualifiers
    Const,

    // Type specifiers
    Struct,
    Union,
    Enum,
    Void,
    Bool,
    Char,
    Int,

    // Control flow / statements
    If,
    Else,
    While,
    Do,
    For,
    Return,
    Break,
    Continue,

    // Operators
    Sizeof,

    // Literals
    True,
    False,
}

/// High-level grouping for documentation and diagnostics.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    StorageClass,
    Qualifier,
    TypeSpecifier,
    ControlFlow,
    Operator,
    Literal,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Storage classes
    info(KeywordId::Auto, "auto", KeywordCategory::StorageClass),
    info(KeywordId::Static, "static", KeywordCategory::StorageClass),
    info(KeywordId::Extern, "extern", KeywordCategory::StorageClass),
    info(KeywordId::Typedef, "typedef", KeywordCategory::StorageClass),
    // Qualifiers
    info(KeywordId::Const, "const", KeywordCategory::Qualifier),
    // Type specifiers
    info(KeywordId::Struct, "struct", KeywordCategory::TypeSpecifier),
    info(KeywordId::Union, "union", KeywordCategory::TypeSpecifier),
    info(KeywordId::Enum, "enum", KeywordCategory::TypeSpecifier),
    info(KeywordId::Void, "void", KeywordCategory::TypeSpecifier),
    info(KeywordId::Bool, "bool", KeywordCategory::TypeSpecifier),
    info(KeywordId::Char, "char", KeywordCategory::TypeSpecifier),
    info(KeywordId::Int, "int", KeywordCategory::TypeSpecifier),
    // Control flow / statements
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow),
    info(KeywordId::Do, "do", KeywordCategory::ControlFlow),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow),
    info(KeywordId::Continue, "continue", KeywordCategory::ControlFlow),
    // Operators
    info(KeywordId::Sizeof, "sizeof", KeywordCategory::Operator),
    // Literals
    info(KeywordId::True, "true", KeywordCategory::Literal),
    info(KeywordId::False, "false", KeywordCategory::Literal),
];

/// Keywords that begin a declaration regardless of what the symbol table contains.
///
/// This is the fixed half of the one-token declaration-start heuristic; the other half consults the scope.
pub const DECLARATION_KEYWORDS: &[KeywordId] = &[
    KeywordId::Const,
    KeywordId::Auto,
    KeywordId::Static,
    KeywordId::Extern,
    KeywordId::Typedef,
    KeywordId::Struct,
    KeywordId::Union,
    KeywordId::Enum,
    KeywordId::Void,
    KeywordId::Bool,
    KeywordId::Char,
    KeywordId::Int,
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is exactly a reserved spelling.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Return `true` if `id` is one of the [`DECLARATION_KEYWORDS`].
pub fn starts_declaration(id: KeywordId) -> bool {
    DECLARATION_KEYWORDS.contains(&id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
