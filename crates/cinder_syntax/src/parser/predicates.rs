/// Token predicates.
///
/// Pure checks against the current token; none of them move the cursor or report anything.
impl<'a, L: TokenSource, S: DiagnosticSink> ParserCtx<'a, L, S> {
    // ========================================================================
    // Predicates
    // ========================================================================

    /// Return `true` if the current token's raw text is exactly `text` (byte-exact, case-sensitive).
    pub fn is_literal(&self, text: &str) -> bool {
        self.current().text == text
    }

    /// Return `true` if the current token is the keyword `id`.
    ///
    /// Non-keyword tokens carry no keyword identity, so they never match.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.current().keyword_id() == Some(id)
    }

    /// Return `true` if the current token belongs to `class`.
    pub fn is_token_kind(&self, class: TokenClass) -> bool {
        self.current().class() == class
    }

    pub fn is_identifier(&self) -> bool {
        self.is_token_kind(TokenClass::Ident)
    }

    pub fn is_integer(&self) -> bool {
        self.is_token_kind(TokenClass::Int)
    }

    pub fn is_string(&self) -> bool {
        self.is_token_kind(TokenClass::Str)
    }

    pub fn is_character(&self) -> bool {
        self.is_token_kind(TokenClass::Char)
    }
}
