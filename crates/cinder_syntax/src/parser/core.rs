/// Cursor core: the [`ParserCtx`] type, scope binding and token advancement.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all cursor methods in a
///   single module while avoiding a single “god file”.
/// - `location` is only ever written from the value returned by the lexer's `advance()`, so it always describes
///   the token the lexer currently holds.

/// Parser state for one pass over one token stream.
///
/// ## Notes
/// - Owned by the driver for the duration of a parse; concurrent parses each build their own context.
/// - The symbol table is borrowed, never owned. Declaration handling in the grammar may mutate it through
///   [`ParserCtx::symbols_mut`] between matches.
/// - Diagnostics go to the sink `S` (a `Vec<Diagnostic>` unless another sink is supplied).
pub struct ParserCtx<'a, L: TokenSource, S: DiagnosticSink = Vec<Diagnostic>> {
    lexer: L,
    symbols: &'a mut SymbolTable,
    scope: ScopeId,
    location: Location,
    errors: usize,
    sink: S,
    config: ParserConfig,
    debug_hook: Option<Box<dyn FnMut() + 'a>>,
}

impl<'a, L: TokenSource> ParserCtx<'a, L> {
    /// Create a context that collects diagnostics into a `Vec`.
    ///
    /// ## Parameters
    /// - `lexer`: Token source positioned on the first token.
    /// - `symbols`: Symbol table; lookups start at its global scope.
    pub fn new(lexer: L, symbols: &'a mut SymbolTable) -> Self {
        Self::with_sink(lexer, symbols, Vec::new())
    }
}

impl<'a, L: TokenSource, S: DiagnosticSink> ParserCtx<'a, L, S> {
    /// Create a context reporting into `sink`.
    #[tracing::instrument(skip_all, fields(first = %lexer.current().text))]
    pub fn with_sink(lexer: L, symbols: &'a mut SymbolTable, sink: S) -> Self {
        let location = lexer.current().location;
        let scope = symbols.global();
        Self {
            lexer,
            symbols,
            scope,
            location,
            errors: 0,
            sink,
            config: ParserConfig::default(),
            debug_hook: None,
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Install the debug hook, called once per reported diagnostic and once per consumed token.
    ///
    /// The hook cannot observe or change the parse; it exists for interactive stepping and verbose tracing.
    pub fn set_debug_hook(&mut self, hook: impl FnMut() + 'a) {
        self.debug_hook = Some(Box::new(hook));
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    // ========================================================================
    // Scope
    // ========================================================================

    /// Make `scope` the active scope and return the one it replaces.
    ///
    /// The caller restores the returned scope when it is done; prefer [`ParserCtx::enter_scope`], which does so
    /// automatically.
    pub fn bind_scope(&mut self, scope: ScopeId) -> ScopeId {
        tracing::trace!(from = self.scope, to = scope, "bind scope");
        std::mem::replace(&mut self.scope, scope)
    }

    /// Bind `scope` until the returned guard is dropped, then restore the previous scope.
    pub fn enter_scope(&mut self, scope: ScopeId) -> ScopeGuard<'_, 'a, L, S> {
        let previous = self.bind_scope(scope);
        ScopeGuard { ctx: self, previous }
    }

    /// The scope lookups currently start from.
    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    pub fn symbols(&self) -> &SymbolTable {
        &*self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut *self.symbols
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    /// The token being looked at.
    pub fn current(&self) -> &Token {
        self.lexer.current()
    }

    /// Position of the current token.
    pub fn location(&self) -> Location {
        self.location
    }

    pub fn is_eof(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    /// Step to the next token. Stays put at end of file.
    pub fn advance(&mut self) {
        self.location = self.lexer.advance();
    }

    /// Skip the current token unless it is a closing `)`, `]` or `}`.
    ///
    /// Used after a failed match: closers are left for the enclosing rule that opened them.
    pub fn skip_if_resumable(&mut self) {
        if !self.is_literal(")") && !self.is_literal("]") && !self.is_literal("}") {
            tracing::trace!(text = %self.current().text, at = %self.location, "resync skip");
            self.advance();
        }
    }

    // ========================================================================
    // Error accounting
    // ========================================================================

    /// Number of diagnostics reported so far.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// `true` once the configured error limit has been reached. Always `false` without a limit.
    ///
    /// The context never stops on its own; the driver decides what to do with this.
    pub fn error_limit_reached(&self) -> bool {
        self.config.error_limit.is_some_and(|limit| self.errors >= limit)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Finish the parse and hand back the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn notify_debug_hook(&mut self) {
        if let Some(hook) = self.debug_hook.as_mut() {
            hook();
        }
    }
}

/// Restores the previously bound scope when dropped.
///
/// Dereferences to the [`ParserCtx`], so grammar rules keep parsing through the guard.
pub struct ScopeGuard<'c, 'a, L: TokenSource, S: DiagnosticSink> {
    ctx: &'c mut ParserCtx<'a, L, S>,
    previous: ScopeId,
}

impl<L: TokenSource, S: DiagnosticSink> ScopeGuard<'_, '_, L, S> {
    /// The scope that will be restored.
    pub fn previous(&self) -> ScopeId {
        self.previous
    }
}

impl<'a, L: TokenSource, S: DiagnosticSink> Deref for ScopeGuard<'_, 'a, L, S> {
    type Target = ParserCtx<'a, L, S>;

    fn deref(&self) -> &Self::Target {
        &*self.ctx
    }
}

impl<L: TokenSource, S: DiagnosticSink> DerefMut for ScopeGuard<'_, '_, L, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.ctx
    }
}

impl<L: TokenSource, S: DiagnosticSink> Drop for ScopeGuard<'_, '_, L, S> {
    fn drop(&mut self) {
        self.ctx.bind_scope(self.previous);
    }
}
