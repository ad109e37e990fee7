//! Binding and function construction: lambda, =, put
//!
//! - `lambda`: build a function from a formals Q-expression and a body
//! - `=`: bind symbols in the root environment
//! - `put`: bind symbols in the current environment
//!
//! Both binders accept a Q-expression of symbols followed by one value per
//! symbol, and return the empty S-expression.

use super::{ensure_arity, ensure_type};
use crate::env::Environment;
use crate::value::{Kind, Value};
use std::rc::Rc;

/// Builds a lambda. The first Q-expression lists the formals (all symbols),
/// the second is the unevaluated body.
pub fn builtin_lambda(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    ensure_arity!("lambda", args, 2);
    ensure_type!("lambda", args, 0, Kind::Qexpr);
    ensure_type!("lambda", args, 1, Kind::Qexpr);

    let body = args.remove(1);
    let cells = args.remove(0).into_cells();

    let mut formals = Vec::with_capacity(cells.len());
    for cell in cells {
        match cell {
            Value::Symbol(name) => formals.push(name),
            other => {
                return Value::error(format!(
                    "function 'lambda' cannot define non-symbol; got {}, expected symbol.",
                    other.kind()
                ))
            }
        }
    }

    Value::lambda(formals, body)
}

/// `=`: binds in the root environment regardless of nesting depth.
pub fn builtin_def(env: &Rc<Environment>, args: Vec<Value>) -> Value {
    bind_symbols(env, args, "=", true)
}

/// `put`: binds in the caller's own frame.
pub fn builtin_put(env: &Rc<Environment>, args: Vec<Value>) -> Value {
    bind_symbols(env, args, "put", false)
}

fn bind_symbols(env: &Rc<Environment>, mut args: Vec<Value>, name: &str, global: bool) -> Value {
    if args.is_empty() {
        return Value::error(format!(
            "function '{}' passed incorrect number of arguments; got 0, expected 1.",
            name
        ));
    }
    ensure_type!(name, args, 0, Kind::Qexpr);

    let syms = args.remove(0).into_cells();
    for cell in &syms {
        if cell.kind() != Kind::Symbol {
            return Value::error(format!(
                "function '{}' cannot define non-symbol; got {}, expected symbol.",
                name,
                cell.kind()
            ));
        }
    }
    if syms.len() != args.len() {
        return Value::error(format!(
            "function '{}' passed too many arguments for symbols; got {}, expected {}.",
            name,
            syms.len(),
            args.len()
        ));
    }

    for (sym, value) in syms.into_iter().zip(args) {
        if let Value::Symbol(key) = sym {
            if global {
                env.def(key, value);
            } else {
                env.put(key, value);
            }
        }
    }

    Value::empty_sexpr()
}

/// Register binding builtins in the environment
pub fn register(env: &Rc<Environment>) {
    env.put("lambda".to_string(), Value::Builtin(builtin_lambda));
    env.put("=".to_string(), Value::Builtin(builtin_def));
    env.put("put".to_string(), Value::Builtin(builtin_put));
}
