// ABOUTME: Bridges the parser's lexeme tree into runtime values

use crate::parser::Ast;
use crate::value::Value;

/// Convert one parse-tree node into a value.
pub fn read(node: Ast) -> Value {
    match node {
        Ast::Number(lexeme) => match lexeme.parse::<i64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::error("invalid Number."),
        },
        Ast::Symbol(name) => Value::Symbol(name),
        Ast::Str(raw) => Value::Str(unescape(&raw)),
        Ast::Sexpr(children) => Value::Sexpr(children.into_iter().map(read).collect()),
        Ast::Qexpr(children) => Value::Qexpr(children.into_iter().map(read).collect()),
    }
}

/// The grammar root: an S-expression holding the top-level expressions.
pub fn read_program(nodes: Vec<Ast>) -> Value {
    Value::Sexpr(nodes.into_iter().map(read).collect())
}

/// Decode the escape sequences of a string literal. An unknown escape keeps
/// the escaped character.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
