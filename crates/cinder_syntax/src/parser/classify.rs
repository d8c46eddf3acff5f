/// Declaration-start classification.
///
/// One token of lookahead decides whether a declaration begins here. An identifier is enough when the scope chain
/// binds it to something that can prefix a declaration (a type, typedef or tag); ordinary values and parameters
/// never are.
impl<'a, L: TokenSource, S: DiagnosticSink> ParserCtx<'a, L, S> {
    /// Return `true` if the current token can begin a declaration.
    ///
    /// ## Notes
    /// - Keywords in [`keywords::DECLARATION_KEYWORDS`] always qualify, whatever the scope holds.
    /// - Otherwise the nearest binding of the token's text decides. A name shadowed by a value in an inner scope is
    ///   therefore not a declaration start, even if an outer scope binds it as a type.
    pub fn is_declaration_start(&self) -> bool {
        if self.current().keyword_id().is_some_and(keywords::starts_declaration) {
            return true;
        }
        self.symbols
            .lookup(self.scope, &self.current().text)
            .and_then(|id| self.symbols.get(id))
            .is_some_and(|sym| !sym.kind.is_value_like())
    }
}
