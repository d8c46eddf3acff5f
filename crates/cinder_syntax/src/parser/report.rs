/// Diagnostic engine.
///
/// Every report is pinned to the location of the current token, counted exactly once and handed to the sink.
/// Nothing here aborts the parse or moves the cursor.
impl<'a, L: TokenSource, S: DiagnosticSink> ParserCtx<'a, L, S> {
    // ========================================================================
    // Reporting
    // ========================================================================

    /// Report `error` at the current location.
    pub fn report(&mut self, error: SyntaxError) {
        let diagnostic = Diagnostic::new(self.location, error)
            .with_continuation_indent(self.config.continuation_indent);
        tracing::debug!(
            line = self.location.line,
            column = self.location.column,
            category = ?diagnostic.category(),
            "{}",
            diagnostic.error
        );
        if self.config.echo_diagnostics {
            eprintln!("{diagnostic}");
        }
        self.sink.emit(&diagnostic);
        self.errors += 1;
        self.notify_debug_hook();
    }

    /// `expected <description>, found '<current text>'`
    pub fn expected(&mut self, description: &str) {
        let found = self.current().text.clone();
        self.report(SyntaxError::Expected {
            expected: description.to_string(),
            found,
        });
    }

    /// The current token names a symbol that is not in scope.
    pub fn undefined_symbol(&mut self) {
        let name = self.current().text.clone();
        self.report(SyntaxError::UndefinedSymbol { name });
    }

    /// The current token should have named a type but does not.
    pub fn undefined_type(&mut self) {
        let name = self.current().text.clone();
        self.report(SyntaxError::UndefinedType { name });
    }

    /// `illegal <what> outside of <place>`, with no cross reference.
    pub fn illegal_outside(&mut self, what: &str, place: &str) {
        self.report(SyntaxError::IllegalOutside {
            what: what.to_string(),
            place: place.to_string(),
        });
    }

    /// Report that `symbol` is being declared again as `attempted`, citing its first declaration.
    ///
    /// ## Errors
    /// - [`ReportError::UnknownSymbol`] if `symbol` is not in the table.
    /// - [`ReportError::NoDeclaration`] if the symbol has no recorded declaration to cite.
    ///
    /// Nothing is reported (and the error count is untouched) when this returns `Err`.
    pub fn redeclared(&mut self, symbol: SymbolId, attempted: SymbolKind) -> Result<(), ReportError> {
        let sym = self.symbols.get(symbol).ok_or(ReportError::UnknownSymbol(symbol))?;
        let first = sym
            .first_declaration()
            .ok_or_else(|| ReportError::NoDeclaration(sym.ident.clone()))?;
        let error = SyntaxError::Redeclared {
            ident: sym.ident.clone(),
            attempted,
            first,
            first_kind: sym.kind,
        };
        self.report(error);
        Ok(())
    }

    /// Report that the body of `symbol` is given a second time, citing the existing implementation.
    ///
    /// ## Errors
    /// - [`ReportError::UnknownSymbol`] if `symbol` is not in the table.
    /// - [`ReportError::NoImplementation`] if the symbol has not been implemented yet.
    pub fn reimplemented(&mut self, symbol: SymbolId) -> Result<(), ReportError> {
        let sym = self.symbols.get(symbol).ok_or(ReportError::UnknownSymbol(symbol))?;
        let first = sym
            .implementation
            .ok_or_else(|| ReportError::NoImplementation(sym.ident.clone()))?;
        let error = SyntaxError::Reimplemented {
            ident: sym.ident.clone(),
            kind: sym.kind,
            first,
        };
        self.report(error);
        Ok(())
    }
}
