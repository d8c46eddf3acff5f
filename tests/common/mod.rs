//! A miniature declaration grammar used to drive the cursor end to end.
//!
//! ```text
//! unit  := item*
//! item  := '{' item* '}'
//!        | 'typedef'? type IDENT ( ';' | '(' ')' ( '{' '}' | ';' ) )
//! type  := declaration keyword | IDENT bound to a type-like symbol
//! ```

#![allow(dead_code)]

use cinder::prelude::*;

pub type Ctx<'a> = ParserCtx<'a, TokenReplay>;

/// Install a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

pub fn unit(ctx: &mut Ctx<'_>) {
    while !ctx.is_eof() {
        item(ctx);
    }
}

pub fn item(ctx: &mut Ctx<'_>) {
    if ctx.try_match_literal("{") {
        let parent = ctx.scope();
        let scope = ctx.symbols_mut().push_scope(parent);
        let mut inner = ctx.enter_scope(scope);
        while !inner.is_eof() && !inner.is_literal("}") {
            item(&mut inner);
        }
        inner.match_literal("}");
        return;
    }

    let kind = if ctx.try_match_keyword(KeywordId::Typedef) {
        SymbolKind::Typedef
    } else {
        SymbolKind::Value
    };

    if !ctx.is_declaration_start() {
        if ctx.is_identifier() {
            ctx.undefined_type();
            ctx.consume();
        } else {
            // Consume even closers here, or a stray `)` would never be left behind.
            ctx.expected("declaration");
            ctx.consume();
        }
        return;
    }
    ctx.consume();

    let at = ctx.location();
    let name = ctx.match_identifier();
    if name.is_empty() {
        return;
    }

    let scope = ctx.scope();
    let id = match ctx.symbols().lookup_local(scope, &name) {
        Some(id) => {
            let same_kind = ctx.symbols().get(id).is_some_and(|s| s.kind == kind);
            if !same_kind {
                ctx.redeclared(id, kind).expect("local symbols carry a declaration");
            }
            id
        }
        None => ctx
            .symbols_mut()
            .define(scope, name, kind)
            .expect("the bound scope exists"),
    };
    ctx.symbols_mut().record_declaration(id, at);

    if kind == SymbolKind::Value && ctx.try_match_literal("(") {
        ctx.match_literal(")");
        if ctx.is_literal("{") {
            let implemented = ctx.symbols().get(id).is_some_and(|s| s.implementation.is_some());
            if implemented {
                ctx.reimplemented(id).expect("implementation was recorded");
            } else {
                let body = ctx.location();
                ctx.symbols_mut().set_implementation(id, body);
            }
            ctx.match_literal("{");
            ctx.match_literal("}");
            return;
        }
    }
    ctx.match_literal(";");
}

/// Run the grammar over `source` and return the rendered diagnostics.
pub fn check(source: &str) -> Vec<String> {
    let mut symbols = SymbolTable::new();
    let mut ctx = Ctx::new(TokenReplay::split_whitespace(source), &mut symbols);
    unit(&mut ctx);
    let count = ctx.error_count();
    let rendered: Vec<String> = ctx.into_sink().iter().map(|d| d.to_string()).collect();
    assert_eq!(rendered.len(), count, "every report is counted exactly once");
    rendered
}
