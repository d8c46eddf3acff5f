#![no_main]

use cinder::prelude::*;
use libfuzzer_sys::fuzz_target;

// Drive every cursor operation over arbitrary whitespace-separated input; none may panic or stall.
fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    let mut symbols = SymbolTable::new();
    let mut ctx = ParserCtx::new(TokenReplay::split_whitespace(source), &mut symbols);

    while !ctx.is_eof() {
        if ctx.is_declaration_start() {
            ctx.consume();
            let _ = ctx.match_identifier();
        } else if ctx.is_integer() {
            let _ = ctx.match_integer();
        } else if ctx.try_match_keyword(KeywordId::Return) || ctx.try_match_literal("(") {
            continue;
        } else {
            ctx.match_literal(";");
            // Closers are never skipped by recovery.
            if ctx.is_literal(")") || ctx.is_literal("]") || ctx.is_literal("}") {
                ctx.consume();
            }
        }
    }
    assert_eq!(ctx.error_count(), ctx.into_sink().len());
});
