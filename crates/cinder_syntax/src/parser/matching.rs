/// Match primitives.
///
/// Each `match_*` either consumes the token it expects, or reports an `expected ...` diagnostic, resynchronizes with
/// [`ParserCtx::skip_if_resumable`] and returns an absent value (`""`, `0`). The `try_match_*` probes never report:
/// they consume on a match and otherwise leave the cursor alone.
impl<'a, L: TokenSource, S: DiagnosticSink> ParserCtx<'a, L, S> {
    // ========================================================================
    // Consuming
    // ========================================================================

    /// Consume the current token unconditionally.
    pub fn consume(&mut self) {
        if self.config.trace_matches {
            tracing::debug!(
                line = self.location.line,
                column = self.location.column,
                text = %self.current().text,
                "matched"
            );
        }
        self.notify_debug_hook();
        self.advance();
    }

    /// Copy the current token's text, then consume it.
    ///
    /// The copy is independent of the lexer and stays valid after the cursor moves on.
    pub fn consume_text(&mut self) -> String {
        let text = self.current().text.clone();
        self.consume();
        text
    }

    // ========================================================================
    // Expect-or-recover
    // ========================================================================

    /// Expect the keyword `id`.
    pub fn match_keyword(&mut self, id: KeywordId) {
        if self.is_keyword(id) {
            self.consume();
        } else {
            self.expected(&format!("'{}'", keywords::as_str(id)));
            self.skip_if_resumable();
        }
    }

    /// Consume the keyword `id` if it is next. Never reports.
    pub fn try_match_keyword(&mut self, id: KeywordId) -> bool {
        if self.is_keyword(id) {
            self.consume();
            true
        } else {
            false
        }
    }

    /// Expect a token of class `class`, whatever its text.
    pub fn match_token_kind(&mut self, class: TokenClass) {
        if self.is_token_kind(class) {
            self.consume();
        } else {
            self.expected(cinder_core::lang::tokens::as_str(class));
            self.skip_if_resumable();
        }
    }

    /// Expect the exact text `text`.
    pub fn match_literal(&mut self, text: &str) {
        if self.is_literal(text) {
            self.consume();
        } else {
            self.expected(&format!("'{text}'"));
            self.skip_if_resumable();
        }
    }

    /// Consume `text` if it is next. Never reports.
    pub fn try_match_literal(&mut self, text: &str) -> bool {
        if self.is_literal(text) {
            self.consume();
            true
        } else {
            false
        }
    }

    /// Expect an integer literal and return its decimal value, or `0` on mismatch.
    ///
    /// ## Notes
    /// - The value is read the way C's `atoi` reads it: leading decimal digits after an optional sign, so `"12u"`
    ///   yields `12`. Overflow wraps.
    pub fn match_integer(&mut self) -> i64 {
        let value = if self.is_integer() {
            leading_decimal(&self.current().text)
        } else {
            0
        };
        self.match_token_kind(TokenClass::Int);
        value
    }

    /// Expect an identifier and return an owned copy of its text, or an empty string on mismatch.
    pub fn match_identifier(&mut self) -> String {
        if self.is_identifier() {
            self.consume_text()
        } else {
            self.match_token_kind(TokenClass::Ident);
            String::new()
        }
    }
}

/// Best-effort decimal parse that never fails.
fn leading_decimal(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| acc.wrapping_mul(10).wrapping_add(i64::from(d - b'0')));
    if negative { magnitude.wrapping_neg() } else { magnitude }
}
